pub mod classifier;
pub mod stopwords;
pub mod summarizer;
pub mod text;
