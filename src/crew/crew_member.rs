use crate::crew::{
    crew_log::CrewLog,
    property::Property,
    property_mutate::PropertyMutator,
};

/// Tracking index of the `kind` classification field
pub const CREW_KIND_INDEX: u8 = 0;
/// Tracking index of the `status` classification field
pub const CREW_STATUS_INDEX: u8 = 1;

/// What roster category a crew member belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrewKind {
    #[default]
    Crew,
    Applicant,
    Tourist,
    Unowned,
}

impl CrewKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Crew" => Some(Self::Crew),
            "Applicant" => Some(Self::Applicant),
            "Tourist" => Some(Self::Tourist),
            "Unowned" => Some(Self::Unowned),
            _ => None,
        }
    }
}

/// Where a crew member currently is in the duty cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrewStatus {
    #[default]
    Available,
    Assigned,
    Dead,
    Missing,
}

impl CrewStatus {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Available" => Some(Self::Available),
            "Assigned" => Some(Self::Assigned),
            "Dead" => Some(Self::Dead),
            "Missing" => Some(Self::Missing),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// A uniquely named crew record replicated between peers.
///
/// The `name` is the identity: immutable once created, and the key under
/// which the member lives in the Roster. The `kind` and `status` fields are
/// classification fields whose normal mutation path broadcasts; everything
/// else is plain statistical state overwritten wholesale on merge.
pub struct CrewMember {
    name: String,
    kind: Property<CrewKind>,
    status: Property<CrewStatus>,

    pub gender: Gender,
    pub profession: String,
    pub experience: f32,
    pub experience_level: i32,
    pub experience_trait: String,
    pub courage: f32,
    pub stupidity: f32,
    pub veteran: bool,
    pub is_badass: bool,
    pub has_toured: bool,
    pub g_experienced: f64,
    pub g_increment: f64,
    pub gee_force: f64,
    pub out_due_to_g: bool,
    pub inactive_time_end: f64,
    pub last_recovery_time: f64,
    pub seat: Option<String>,
    pub seat_idx: i32,

    pub career_log: CrewLog,
    pub flight_log: CrewLog,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, kind: CrewKind, status: CrewStatus) -> Self {
        Self {
            name: name.into(),
            kind: Property::new(kind, CREW_KIND_INDEX),
            status: Property::new(status, CREW_STATUS_INDEX),
            gender: Gender::default(),
            profession: String::new(),
            experience: 0.0,
            experience_level: 0,
            experience_trait: String::new(),
            courage: 0.0,
            stupidity: 0.0,
            veteran: false,
            is_badass: false,
            has_toured: false,
            g_experienced: 0.0,
            g_increment: 0.0,
            gee_force: 0.0,
            out_due_to_g: false,
            inactive_time_end: 0.0,
            last_recovery_time: 0.0,
            seat: None,
            seat_idx: -1,
            career_log: CrewLog::new(),
            flight_log: CrewLog::new(),
        }
    }

    /// The member's identity. Never changes after creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CrewKind {
        *self.kind
    }

    pub fn status(&self) -> CrewStatus {
        *self.status
    }

    /// Attach the mutator that tracks classification changes for broadcast
    pub fn set_mutator(&mut self, mutator: &PropertyMutator) {
        self.kind.set_mutator(mutator);
        self.status.set_mutator(mutator);
    }

    /// Set the kind, queueing the change for broadcast to peers
    pub fn set_kind(&mut self, kind: CrewKind) {
        self.kind.mirror(kind);
    }

    /// Set the status, queueing the change for broadcast to peers
    pub fn set_status(&mut self, status: CrewStatus) {
        self.status.mirror(status);
    }

    /// Set the kind without firing the change notification. Used when the
    /// value came from a remote peer.
    pub fn set_kind_silently(&mut self, kind: CrewKind) {
        self.kind.mirror_silently(kind);
    }

    /// Set the status without firing the change notification. Used when the
    /// value came from a remote peer.
    pub fn set_status_silently(&mut self, status: CrewStatus) {
        self.status.mirror_silently(status);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::crew::property_mutate::{PropertyMutate, PropertyMutator};

    use super::{CrewKind, CrewMember, CrewStatus, CREW_STATUS_INDEX};

    struct CountingMutate {
        fired: Arc<Mutex<Vec<u8>>>,
    }

    impl PropertyMutate for CountingMutate {
        fn mutate(&mut self, property_index: u8) -> bool {
            self.fired
                .lock()
                .expect("mutation log poisoned")
                .push(property_index);
            true
        }
    }

    #[test]
    fn silent_status_write_observed_zero_times() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mutator = PropertyMutator::new(CountingMutate {
            fired: fired.clone(),
        });
        let mut jeb = CrewMember::new("Jeb", CrewKind::Crew, CrewStatus::Available);
        jeb.set_mutator(&mutator);

        jeb.set_status_silently(CrewStatus::Dead);

        assert_eq!(jeb.status(), CrewStatus::Dead);
        assert!(fired.lock().unwrap().is_empty());
    }

    #[test]
    fn normal_status_write_broadcasts() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mutator = PropertyMutator::new(CountingMutate {
            fired: fired.clone(),
        });
        let mut jeb = CrewMember::new("Jeb", CrewKind::Crew, CrewStatus::Available);
        jeb.set_mutator(&mutator);

        jeb.set_status(CrewStatus::Assigned);

        assert_eq!(jeb.status(), CrewStatus::Assigned);
        assert_eq!(*fired.lock().unwrap(), vec![CREW_STATUS_INDEX]);
    }
}
