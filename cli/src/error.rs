use std::path::PathBuf;

use records::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing API token; pass --token or set FLEET_API_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not build request: {0}")]
    Request(#[from] records::RequestError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("could not read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid phone number `{0}`; expected 09XXXXXXXXX or +639XXXXXXXXX")]
    InvalidPhone(String),
    #[error("OTP must be {0} digits")]
    InvalidOtp(usize),
    #[error("rating must be between {min} and {max}, got {got}")]
    InvalidRating { min: u8, max: u8, got: u8 },
    #[error("assignment {assignment} already has an unfinished dispatch (log {log})")]
    DispatchOpen { assignment: RecordId, log: RecordId },
    #[error("no dispatch log with id {0}")]
    UnknownDispatch(RecordId),
    #[error("dispatch log {id} is {phase}; `{attempted}` is not available")]
    InvalidTransition { id: RecordId, phase: &'static str, attempted: &'static str },
}

impl CliError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}
