//! Error types for the records service.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors (fatal at startup)
//! - [`StorageError`]: Database operation errors
//! - [`RequestError`]: Request validation errors (method, body)
//! - [`ConfigError`]: Configuration errors
//! - [`ServerError`]: Listener errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Any of these reaching `main` terminates the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server error.
    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// Creating the records table failed.
    #[error("Schema initialization failed: {message}")]
    SchemaFailed {
        /// Description of the failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// A returned row could not be decoded.
    #[error("Row decode failed: {message}")]
    RowDecode {
        /// Description of the decode failure.
        message: String,
    },
}

/// Request validation errors.
///
/// Always recovered locally and surfaced as a 4xx response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The route does not accept this HTTP method.
    #[error("only {allowed} requests are supported")]
    MethodNotAllowed {
        /// The single method the route accepts.
        allowed: String,
    },

    /// The request body did not decode.
    #[error("invalid request body")]
    InvalidBody {
        /// Decoder message, kept for debug logging.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Listener errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// Binding the TCP listener failed.
    #[error("Failed to bind {addr}: {message}")]
    Bind {
        /// The address that could not be bound.
        addr: String,
        /// Description of the failure.
        message: String,
    },

    /// The serve loop exited with an error.
    #[error("Serve failed: {message}")]
    Serve {
        /// Description of the failure.
        message: String,
    },
}
