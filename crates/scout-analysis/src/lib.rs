//! Strategy digest for a set of Reddit posts.
//!
//! Asks a chat-completion endpoint for a summary when a key is configured and
//! falls back to a keyword-driven report built from fixed phrase tables.

pub mod error;
pub mod lexicon;
pub mod report;
pub mod summarizer;

pub use error::AnalysisError;
pub use lexicon::{Difficulty, Sentiment, Theme};
pub use report::{analyze_sentiment, assess_difficulty, extract_themes, generate_report};
pub use summarizer::{Summarizer, SummarizerConfig};
