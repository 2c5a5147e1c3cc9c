// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures the ledger surfaces to callers. Validation problems are raised
/// before any backend call; everything the collaborator reports comes back
/// as `NotFound` or `Transport`, never retried and never swallowed.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unknown category '{0}'")]
    InvalidCategory(String),
    #[error("no item with id {0}")]
    NotFound(i64),
    #[error("backend error: {0}")]
    Transport(String),
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        LedgerError::Transport(err.to_string())
    }
}
