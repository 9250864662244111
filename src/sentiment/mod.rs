// Sentiment module entry
// Wraps the VADER analyzer and derives labels and report text from its scores

mod label;
mod report;
mod scorer;

pub use label::SentimentLabel;
pub use report::build_report;
pub use scorer::{ScoreError, Scorer, SentimentScores};
