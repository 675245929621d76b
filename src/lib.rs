pub mod arxiv;
pub mod cli;
pub mod config;
pub mod exports;
pub mod llm;
pub mod review;

// Re-export commonly used types
pub use config::Config;
pub use review::launch;
