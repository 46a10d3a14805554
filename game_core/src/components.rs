use crate::Config;
use glam::IVec2;

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Axis-aligned rectangle in logical arena pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// A player's paddle. X is fixed per side; only Y moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub pos: IVec2,  // Top-left corner
    pub size: IVec2, // Width, height
}

impl Paddle {
    pub fn new(side: Side, y: i32, config: &Config) -> Self {
        Self {
            side,
            pos: IVec2::new(config.paddle_x(side), y),
            size: IVec2::new(config.paddle_width, config.paddle_height),
        }
    }

    /// Paddle vertically centered on its side of the arena
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(
            side,
            config.arena_height / 2 - config.paddle_height / 2,
            config,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// The ball. Each velocity axis always has magnitude `ball_speed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2, // Top-left corner
    pub vel: IVec2, // Pixels per frame
    pub size: i32,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, size: i32) -> Self {
        Self { pos, vel, size }
    }

    /// Ball at the arena center heading down and to the right
    pub fn spawn(config: &Config) -> Self {
        Self::new(
            config.center_for(config.ball_size),
            IVec2::splat(config.ball_speed),
            config.ball_size,
        )
    }

    /// Serve restart: back to center, speed renewed, direction kept.
    /// A zero axis counts as negative.
    pub fn reset(&mut self, config: &Config) {
        self.pos = config.center_for(self.size);
        self.vel = IVec2::new(
            direction_of(self.vel.x) * config.ball_speed,
            direction_of(self.vel.y) * config.ball_speed,
        );
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

fn direction_of(v: i32) -> i32 {
    if v > 0 {
        1
    } else {
        -1
    }
}
