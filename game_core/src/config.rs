use crate::{ConfigError, Params, Side};
use glam::IVec2;
use serde::Deserialize;
use std::time::Duration;

/// Arena configuration. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub score_bar_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_speed: i32,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            score_bar_height: Params::SCORE_BAR_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            target_fps: Params::TARGET_FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the arena invariants: everything positive, paddles and ball fit,
    /// and no speed can carry an object past the arena in a single frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, i64); 9] = [
            ("arena_width", self.arena_width.into()),
            ("arena_height", self.arena_height.into()),
            ("score_bar_height", self.score_bar_height.into()),
            ("paddle_width", self.paddle_width.into()),
            ("paddle_height", self.paddle_height.into()),
            ("paddle_speed", self.paddle_speed.into()),
            ("ball_size", self.ball_size.into()),
            ("ball_speed", self.ball_speed.into()),
            ("target_fps", self.target_fps.into()),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ] {
            if value > Params::MAX_ARENA_SIZE {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    max: Params::MAX_ARENA_SIZE,
                });
            }
        }

        let fits: [(&'static str, i32, &'static str, i32); 5] = [
            ("paddle_width", self.paddle_width, "width", self.arena_width),
            ("paddle_height", self.paddle_height, "height", self.arena_height),
            ("ball_size", self.ball_size, "width", self.arena_width),
            ("ball_size", self.ball_size, "height", self.arena_height),
            ("score_bar_height", self.score_bar_height, "height", self.arena_height),
        ];
        for (field, size, dimension, limit) in fits {
            if size >= limit {
                return Err(ConfigError::TooLarge {
                    field,
                    size,
                    dimension,
                    limit,
                });
            }
        }

        let left_edge = self.paddle_x(Side::Left) + self.paddle_width;
        let right_x = self.paddle_x(Side::Right);
        if right_x <= left_edge {
            return Err(ConfigError::PaddlesOverlap { left_edge, right_x });
        }

        let speeds = [
            ("paddle_speed", self.paddle_speed, self.paddle_max_y()),
            (
                "ball_speed",
                self.ball_speed,
                self.arena_width.min(self.arena_height) - self.ball_size,
            ),
        ];
        for (field, value, max) in speeds {
            if value > max {
                return Err(ConfigError::OutOfRange { field, value, max });
            }
        }

        Ok(())
    }

    /// Get X position for a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => Params::PADDLE_MARGIN,
            Side::Right => self.arena_width - Params::PADDLE_MARGIN - self.paddle_width,
        }
    }

    /// Lowest y a paddle's top edge may reach
    pub fn paddle_max_y(&self) -> i32 {
        self.arena_height - self.paddle_height
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        // Not `i32::clamp`: that panics if an unvalidated config inverts the range.
        y.max(0).min(self.paddle_max_y())
    }

    /// Top-left corner that centers a square of `size` in the arena
    pub fn center_for(&self, size: i32) -> IVec2 {
        IVec2::new(
            self.arena_width / 2 - size / 2,
            self.arena_height / 2 - size / 2,
        )
    }

    /// Target frame duration, truncated to whole milliseconds
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }
}
