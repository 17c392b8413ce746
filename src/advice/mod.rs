pub mod types;
pub mod openai;
pub mod requester;

#[cfg(test)]
pub mod mock;

pub use types::*;
pub use openai::*;
pub use requester::*;

use thiserror::Error;

/// Everything that can go wrong talking to the advice service.
///
/// Callers on the display path never surface these; they collapse into the
/// site's fallback text. The variants exist for logs.
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("No API key configured for the advice service")]
    MissingApiKey,

    #[error("Advice service is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Advice service rejected the credentials (status {0})")]
    Authentication(u16),

    #[error("Advice service quota or rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Advice service returned error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed advice response: {0}")]
    MalformedResponse(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
