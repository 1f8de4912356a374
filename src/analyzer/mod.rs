//! Describing a repository head in terms of its nearest tag

pub mod head_analyzer;

pub use head_analyzer::{inspect, HeadAnalyzer};
