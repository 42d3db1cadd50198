pub mod input;
pub mod output;

pub use input::{load_metadata, read_speech_lines};
pub use output::{read_corpus, read_labels, write_corpus, write_labels};
