/// AWS service clients and infrastructure services
pub mod alerts;
pub mod athena;
pub mod config;
pub mod glue;
pub mod s3;
pub mod spark;

// Re-export service traits
pub use alerts::AlertService;
pub use athena::QueryService;
pub use config::ConfigProvider;
pub use glue::JobService;
pub use s3::StorageService;
pub use spark::ScriptRunner;
