// Oblique Gate - Library Root
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// All modules exported here for use by the binary and tests.

pub mod config;
pub mod deck;
pub mod error;
pub mod format;
pub mod handlers;
pub mod mcp;
pub mod select;

pub use error::{ObliqueError, Result};
