//! Configuration management for the ALTO engine

use serde::Deserialize;
use std::env;

/// Default upper bound for a single ALTO document (16 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Largest ALTO document the engine accepts, in bytes
    pub max_input_bytes: usize,
    /// Rotation applied when a caller does not supply one
    pub default_rotation: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            default_rotation: 0,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        EngineConfig {
            max_input_bytes: env::var("ALTO_MAX_INPUT_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_INPUT_BYTES),
            default_rotation: env::var("ALTO_DEFAULT_ROTATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Check an input against the size bound
    pub fn check_input(&self, input: &str) -> crate::error::Result<()> {
        if input.len() > self.max_input_bytes {
            return Err(crate::error::AltoError::InputTooLarge {
                size: input.len(),
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}
