mod client;
mod delivery;
mod types;

pub use client::ExtractionClient;
pub use types::{CandidateFile, TransferEvent, EXPORT_FILE_NAME};
