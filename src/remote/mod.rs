pub mod error;
pub mod manager;
pub mod reconciler;
pub mod record;
pub mod record_queue;

pub use error::RecordError;
pub use manager::{RecordSender, RemoteRosterManager};
pub use record::RawRecord;
pub use record_queue::RecordQueue;
