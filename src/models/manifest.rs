/// Manifest model - the newline-delimited list of object paths awaiting
/// processing, plus the positional path parsing the downstream jobs rely on
use crate::constants::{ERROR_KEY_MARKER, UNPROCESSED_KEY_MARKER};
use crate::error::BatchflowError;

/// Newline-delimited list of fully-qualified object paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest(String);

impl Manifest {
    /// Assembles the effective manifest from freshly listed paths and the
    /// backlog recorded by a previously failed run.
    ///
    /// Backlog content is appended only when non-empty; the result carries no
    /// leading or trailing whitespace.
    pub fn assemble(unprocessed: &str, backlog: &str) -> Self {
        let fresh = unprocessed.trim();
        let backlog = backlog.trim();

        if backlog.is_empty() {
            Self(fresh.to_string())
        } else if fresh.is_empty() {
            Self(backlog.to_string())
        } else {
            Self(format!("{}\n{}", fresh, backlog))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses every line into an object location. Any malformed line fails
    /// the whole manifest - there is no partial tolerance.
    pub fn locations(&self) -> Result<Vec<ObjectLocation>, BatchflowError> {
        self.0.lines().map(ObjectLocation::parse).collect()
    }
}

impl std::fmt::Display for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single (bucket, key) pair referenced by a manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    /// Parses a manifest path positionally: the bucket is the 3rd
    /// slash-delimited segment, the key everything after. Works for
    /// `s3://bucket/key` shaped paths without treating the scheme specially.
    pub fn parse(path: &str) -> Result<Self, BatchflowError> {
        let segments: Vec<&str> = path.split('/').collect();

        if segments.len() < 3 || segments[2].is_empty() {
            return Err(BatchflowError::Manifest(format!(
                "Path '{}' does not have at least 3 segments",
                path
            )));
        }

        Ok(Self {
            bucket: segments[2].to_string(),
            key: segments[3..].join("/"),
        })
    }
}

/// Derives the error marker key for the batch a manifest key belongs to
pub fn error_marker_key(manifest_key: &str) -> String {
    manifest_key.replace(UNPROCESSED_KEY_MARKER, ERROR_KEY_MARKER)
}

/// Derives the manifest key for a direct `batch_date` invocation
pub fn manifest_key_for_batch_date(batch_date: &str) -> String {
    format!("{}_{}", UNPROCESSED_KEY_MARKER, batch_date)
}
