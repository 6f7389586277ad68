pub mod crew_log;
pub mod crew_member;
pub mod property;
pub mod property_mutate;

pub use crew_log::{CrewLog, CrewLogEntry};
pub use crew_member::{
    CrewKind, CrewMember, CrewStatus, Gender, CREW_KIND_INDEX, CREW_STATUS_INDEX,
};
pub use property::Property;
pub use property_mutate::{PropertyMutate, PropertyMutator};
