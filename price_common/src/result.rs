//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PerformerError`, so functions can simply return `Result<T>`.
use crate::error::PerformerError;

/// Workspace-wide `Result` alias with `PerformerError` as the default error.
pub type Result<T, E = PerformerError> = std::result::Result<T, E>;
