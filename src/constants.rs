/// Application constants
///
/// Hardcoded values used throughout the dispatcher, organized by category.
// ============================================================================
// Manifest Naming
// ============================================================================
/// Substring in the trigger object key that identifies a manifest of
/// unprocessed files
pub const UNPROCESSED_KEY_MARKER: &str = "unprocessed_file";

/// Substring that replaces [`UNPROCESSED_KEY_MARKER`] to derive the error
/// marker key for the same batch
pub const ERROR_KEY_MARKER: &str = "error_file";

// ============================================================================
// Local Spark Execution
// ============================================================================

/// Local path the driver script is downloaded to before spark-submit
pub const LOCAL_SCRIPT_PATH: &str = "/tmp/spark_script.py";

/// Executable used for the local submission path
pub const SPARK_SUBMIT_BIN: &str = "spark-submit";

// ============================================================================
// Glue Job Arguments
// ============================================================================

/// Glue job argument key carrying the newline-delimited manifest
pub const GLUE_INPUT_PATHS_ARG: &str = "--INPUT_PATHS";

// ============================================================================
// Alerting
// ============================================================================

/// Character set for SES alert subject and body
pub const ALERT_CHARSET: &str = "UTF-8";

// ============================================================================
// Testing Constants
// ============================================================================
