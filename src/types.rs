// src/types.rs
// Shared data-validation types used across the plotting modules.

use thiserror::Error;

/// Errors raised while extracting or validating plot data. Rendering-level
/// failures (backend I/O, font issues) stay as `Box<dyn Error>` at the call
/// boundary; these cover everything that can be checked before a drawing
/// backend exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotDataError {
    #[error("key '{key}' not found in {collection}")]
    KeyNotFound { collection: String, key: String },
    #[error("shape mismatch for {context}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        context: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl PlotDataError {
    pub fn key_not_found(collection: &str, key: &str) -> Self {
        PlotDataError::KeyNotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        }
    }

    pub fn shape_mismatch(context: &str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        PlotDataError::ShapeMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }
}

/// Body side selector for left/right-suffixed coordinate columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Column suffix for this side ("_r" / "_l").
    pub fn suffix(&self) -> &'static str {
        match self {
            Side::Right => "_r",
            Side::Left => "_l",
        }
    }

    /// Column suffix for the opposite side.
    pub fn opposite_suffix(&self) -> &'static str {
        match self {
            Side::Right => "_l",
            Side::Left => "_r",
        }
    }

    pub fn from_arg(arg: &str) -> Option<Side> {
        match arg {
            "r" => Some(Side::Right),
            "l" => Some(Side::Left),
            _ => None,
        }
    }
}
