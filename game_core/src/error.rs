//! Error types for game_core

use thiserror::Error;

/// Arena configuration rejected by [`Config::validate`](crate::Config::validate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        max: i32,
    },

    #[error("{field} ({size}) must be smaller than arena {dimension} ({limit})")]
    TooLarge {
        field: &'static str,
        size: i32,
        dimension: &'static str,
        limit: i32,
    },

    #[error("paddles overlap: right paddle x ({right_x}) is not past the left paddle ({left_edge})")]
    PaddlesOverlap { left_edge: i32, right_x: i32 },
}

/// A collaborator failed while the session loop was running
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input provider failed: {0}")]
    Input(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("display surface failed: {0}")]
    Display(#[source] Box<dyn std::error::Error + Send + Sync>),
}
