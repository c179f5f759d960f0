//! Unified application error type.
//! All modules (store, core, cli, clock) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Failed to encode record sequence: {0}")]
    Encode(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected dd/mm/yyyy)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM:SS)")]
    InvalidTime(String),

    #[error("Invalid punch type: {0}")]
    InvalidPunchType(String),

    #[error("Invalid coordinates: {0} (expected \"lat,long\")")]
    InvalidCoordinates(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
