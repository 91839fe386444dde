pub mod interface;
pub mod textblob;
pub mod vader;

pub use interface::{SentimentInterface, SentimentLabel, SentimentModel, SentimentScores};
pub use textblob::TextBlobAnalyzer;
pub use vader::VaderAnalyzer;
