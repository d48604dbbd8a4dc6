pub mod category_table;
pub mod classifier;
pub mod emotion_map;
pub mod error;
pub mod hashtag;
pub mod hf_client;
pub mod model_registry;
pub mod pipeline;
pub mod prediction;

pub use category_table::{CATEGORY_RULES, CategoryRule, KeywordMatch, match_keywords};
pub use classifier::{EmotionClassifier, Summarizer};
pub use emotion_map::{UNCLASSIFIABLE_EMOTION, display_emotion};
pub use error::{NlpError, Result};
pub use hashtag::first_hashtag;
pub use hf_client::HfInferenceClient;
pub use model_registry::ModelRegistry;
pub use pipeline::{FALLBACK_CATEGORY, TIMESTAMP_FORMAT, analyze};
pub use prediction::Prediction;

#[cfg(test)]
mod tests;
