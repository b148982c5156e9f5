//! Integration tests for the records service HTTP API.
//!
//! These tests drive the router with file-backed storage and verify:
//! - Status codes and bodies for every endpoint
//! - That rejected requests never reach the store
//! - Behavior under concurrent clients over a real socket

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;
mod live_server;
mod write_workflow;
