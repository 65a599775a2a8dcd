pub mod config;
/// Data models for the Batchflow dispatcher
pub mod events;
pub mod manifest;

// Re-export commonly used types
pub use config::*;
pub use events::*;
pub use manifest::*;
