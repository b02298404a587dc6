pub mod docs;
pub mod fetch;
pub mod record_store;
pub mod report;
pub mod wiki;

pub use docs::DocGenerator;
pub use fetch::Fetcher;
pub use record_store::{RecordStore, Snapshot};
pub use wiki::{WikiGenerator, WikiPage};
