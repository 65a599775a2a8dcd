// Library root - exports public API

pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routing;
pub mod services;

// Re-export commonly used types
pub use error::BatchflowError;
pub use handlers::handler;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
