//! # Roster Sync
//! Client-side reconciliation core that merges remote-authoritative crew
//! records into a local, UI-visible roster.
//!
//! The transport layer enqueues raw records and removal tokens from any
//! thread; a single apply thread drains both queues on a fixed cadence once
//! the readiness gate opens, merges each record into the [`Roster`]
//! (create-or-update, field-level), and pokes the registered UI views at most
//! once per non-empty drain. Classification fields received from the remote
//! peer are written through a silent path that bypasses change notification,
//! so a replicated change is never echoed back across the network.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod backends;
mod config;
mod crew;
mod events;
mod gate;
mod refresh;
mod remote;
mod roster;
mod types;

pub use backends::Timer;
pub use config::RosterSyncConfig;
pub use crew::{
    CrewKind, CrewLog, CrewLogEntry, CrewMember, CrewStatus, Gender, Property, PropertyMutate,
    PropertyMutator, CREW_KIND_INDEX, CREW_STATUS_INDEX,
};
pub use events::{GameEventHandler, GameEventHub, GameEventKind, SubscriptionId};
pub use gate::ReadinessGate;
pub use refresh::{RefreshNotifier, RosterView};
pub use remote::{
    reconciler::apply_record, RawRecord, RecordError, RecordQueue, RecordSender,
    RemoteRosterManager,
};
pub use roster::Roster;
pub use types::GameStage;
