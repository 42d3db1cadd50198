pub mod classify;
pub mod clean;
pub mod generate;

pub use classify::{execute_classify, ClassifyConfig, ClassifyResult};
pub use clean::{execute_clean, renumber, CleanResult};
pub use generate::{execute_generate, DocumentFailure, GenerateError, GenerateResult};
