use thiserror::Error;

/// Errors that can occur while turning a raw record into a crew member.
///
/// None of these are fatal to anything but the one record they concern: the
/// draining caller logs and discards, and the Roster is never left corrupted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record carries no usable identity, so it cannot be keyed into the
    /// Roster
    #[error("crew record is missing a non-empty 'name' field")]
    MissingIdentity,

    /// A log section entry could not be parsed
    #[error("malformed entry at index {index} in '{section}' section")]
    MalformedLogEntry {
        section: &'static str,
        index: usize,
    },
}
