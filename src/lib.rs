//! Records Service
//!
//! A small HTTP service that persists text values to `SQLite` and lists
//! them back newest-first.
//!
//! # Endpoints
//!
//! - `POST /write` with `{"value": "..."}` stores one record and returns its
//!   id and creation time.
//! - `GET /query/all` returns every record, most recent first.
//!
//! # Quick Start
//!
//! ```bash
//! DATABASE_PATH=./data.db PORT=8080 ./records-service
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   HTTP/1.1   ┌─────────────────┐   sqlx   ┌────────┐
//! │   client   │─────────────▶│  axum handlers  │─────────▶│ SQLite │
//! └────────────┘              └─────────────────┘          └────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod traits;
