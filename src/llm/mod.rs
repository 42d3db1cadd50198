pub mod client;
pub mod prompts;
pub mod response;

pub use client::{GeminiClient, GeminiConfig};
pub use response::{parse_label_response, LabelParseError};
