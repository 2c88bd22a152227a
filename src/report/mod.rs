pub mod gemini;
pub mod generator;
pub mod normalize;
pub mod parser;
pub mod prompt;
pub mod types;

pub use gemini::*;
pub use generator::*;
pub use normalize::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("language model endpoint unreachable at {0}")]
    Connection(String),

    #[error("language model returned error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("empty response from language model")]
    EmptyResponse,

    #[error("response decoding error: {0}")]
    ResponseDecoding(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
