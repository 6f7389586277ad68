use std::collections::HashMap;

use crate::crew::{CrewKind, CrewMember, CrewStatus};

/// The local, authoritative collection of crew members, keyed by unique name.
///
/// The host application owns this; the sync core only mutates it, and only
/// ever from the single apply thread, so the Roster carries no locking of its
/// own.
#[derive(Default)]
pub struct Roster {
    members: HashMap<String, CrewMember>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member under its own name. A member with the same name, if
    /// any, is replaced; the reconciler never takes this path for an existing
    /// name (it merges in place instead).
    pub fn insert(&mut self, member: CrewMember) {
        self.members.insert(member.name().to_owned(), member);
    }

    pub fn remove(&mut self, name: &str) -> Option<CrewMember> {
        self.members.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&CrewMember> {
        self.members.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CrewMember> {
        self.members.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrewMember> {
        self.members.values()
    }

    /// Silently set a member's status; no-op if no member has that name
    pub fn set_status_silently(&mut self, name: &str, status: CrewStatus) {
        if let Some(member) = self.members.get_mut(name) {
            member.set_status_silently(status);
        }
    }

    /// Silently set a member's kind; no-op if no member has that name
    pub fn set_kind_silently(&mut self, name: &str, kind: CrewKind) {
        if let Some(member) = self.members.get_mut(name) {
            member.set_kind_silently(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::crew::{CrewKind, CrewMember, CrewStatus};

    use super::Roster;

    #[test]
    fn one_member_per_name() {
        let mut roster = Roster::new();
        roster.insert(CrewMember::new("Jeb", CrewKind::Crew, CrewStatus::Available));
        roster.insert(CrewMember::new("Jeb", CrewKind::Crew, CrewStatus::Assigned));

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("Jeb").map(|m| m.status()), Some(CrewStatus::Assigned));
    }

    #[test]
    fn silent_setters_ignore_absent_names() {
        let mut roster = Roster::new();
        roster.set_status_silently("Nobody", CrewStatus::Dead);
        roster.set_kind_silently("Nobody", CrewKind::Tourist);
        assert!(roster.is_empty());
    }
}
