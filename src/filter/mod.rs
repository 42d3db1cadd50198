pub mod rules;

pub use rules::{classify, RemovalRule};
