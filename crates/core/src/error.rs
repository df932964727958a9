// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tik-core operations.

use thiserror::Error;

/// All possible errors that can occur in tik-core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(u64),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, closed")]
    InvalidStatus(String),
}

/// A specialized Result type for tik-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
