/// Default tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;
    pub const SCORE_BAR_HEIGHT: i32 = 50; // Reserved, not used by physics
    pub const MAX_ARENA_SIZE: i32 = 1 << 16;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 10; // pixels per frame
    pub const PADDLE_MARGIN: i32 = 10; // Gap between arena edge and paddle

    // Ball
    pub const BALL_SIZE: i32 = 10;
    pub const BALL_SPEED: i32 = 5; // pixels per frame, per axis

    // Pacing
    pub const TARGET_FPS: u32 = 60;
    pub const RATE_WINDOW_MS: u64 = 1000;
}
