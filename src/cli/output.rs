//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ResolveError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Resolve(ResolveError::ProfileNotFound(_)) => format!(
            "{}\n\nUse 'clusterconf profile list' to see available profiles.",
            e
        ),
        _ => e.to_string(),
    }
}

/// Process exit code for an error.
pub fn exit_code(e: &ApiError) -> i32 {
    match e {
        ApiError::Resolve(ResolveError::InvalidConfiguration(_)) => 3,
        ApiError::Resolve(ResolveError::ProfileNotFound(_)) => 4,
        ApiError::Resolve(ResolveError::ConfigParse { .. }) => 5,
        ApiError::InvalidArgument(_) => 2,
        _ => 1,
    }
}
