pub mod filter;
pub mod io;
pub mod llm;
pub mod models;
pub mod segment;
pub mod stages;

pub use filter::{classify, RemovalRule};
pub use io::{load_metadata, read_corpus, read_labels, read_speech_lines, write_corpus, write_labels};
pub use llm::{GeminiClient, GeminiConfig};
pub use models::{
    FramingSignal, LabeledParagraph, ParagraphLabel, ParagraphRecord, SpeechMetadata,
};
pub use segment::{assemble, locate_break, segment_lines, split_oversized, SegmentConfig};
pub use stages::{
    execute_classify, execute_clean, execute_generate, renumber, ClassifyConfig, CleanResult,
    GenerateResult,
};
