//! Core data types shared by the normalizer, the analyzer and the UI layer.

pub mod info;
pub mod response;
pub mod sentiment;
pub mod state;

pub use info::{SentimentInfo, SentimentReport};
pub use response::{AnalysisResponse, ValidationOutcome};
pub use sentiment::{SentimentLabel, SentimentResult};
pub use state::{AnalysisState, AnalysisStatus};
