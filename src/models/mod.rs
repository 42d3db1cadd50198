pub mod label;
pub mod paragraph;

pub use label::*;
pub use paragraph::*;
