// Oblique Gate - Configuration
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// Output mode and server config. Built once from argv, never reassigned.

use crate::error::ObliqueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which halves of the draw end up in the tool result
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Thinking label and card (mode 0 / no argument)
    #[default]
    Full,
    /// Card only (mode 1)
    CardOnly,
    /// Thinking label only (mode 2)
    TextOnly,
}

impl OutputMode {
    /// Numeric code used on the command line
    pub fn code(self) -> &'static str {
        match self {
            OutputMode::Full => "0",
            OutputMode::CardOnly => "1",
            OutputMode::TextOnly => "2",
        }
    }

    /// Lenient lookup: anything unrecognized becomes Full, with a warning.
    pub fn resolve(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            log::warn!("Invalid output mode '{}', defaulting to full output", code);
            OutputMode::Full
        })
    }
}

impl FromStr for OutputMode {
    type Err = ObliqueError;

    /// Strict lookup used at startup
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "0" => Ok(OutputMode::Full),
            "1" => Ok(OutputMode::CardOnly),
            "2" => Ok(OutputMode::TextOnly),
            other => Err(ObliqueError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputMode::Full => "full",
            OutputMode::CardOnly => "card-only",
            OutputMode::TextOnly => "text-only",
        };
        write!(f, "{} ({})", self.code(), label)
    }
}

/// Process-wide server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub mode: OutputMode,
}

impl ServerConfig {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Build from the optional positional argument
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ObliqueError> {
        let mode = match arg {
            Some(code) => code.parse()?,
            None => OutputMode::Full,
        };
        Ok(Self { mode })
    }
}
