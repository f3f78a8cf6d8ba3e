use std::path::PathBuf;

/// Media type a dropped file must declare to be accepted, and the type
/// the document is sent as.
pub const PDF_MIME: &str = "application/pdf";

/// Fixed name every result spreadsheet is saved under. Re-running an
/// extraction overwrites the previous export.
pub const EXPORT_FILE_NAME: &str = "deal_export.xlsx";

/// A document the user has picked but not yet submitted. The payload
/// itself is read from `path` when the transfer starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

/// Progress notifications sent by the transfer worker, in the order the
/// exchange goes through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    /// The multipart request has been handed to the transport.
    Dispatched,
    /// The service answered with a success status; the body is still
    /// being read.
    Received,
    /// The spreadsheet was decoded and saved.
    Completed,
    /// The exchange stopped; the message is shown to the user as-is.
    Failed(String),
}
