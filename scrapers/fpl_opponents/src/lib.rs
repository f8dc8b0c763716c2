pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod types;
