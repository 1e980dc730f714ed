pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod exit;
pub mod graph;
pub mod ground_truth;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod relevance;
pub mod report;
pub mod types;
