use crate::{Ball, Config, Paddle, PaddleIntent, Side};

/// Move a paddle by `dir` steps of paddle speed, then clamp into the arena
pub fn move_paddle(paddle: &mut Paddle, dir: i32, config: &Config) {
    let step = dir.saturating_mul(config.paddle_speed);
    paddle.pos.y = config.clamp_paddle_y(paddle.pos.y.saturating_add(step));
}

/// Apply paddle movement based on intents, in order
pub fn move_paddles(
    intents: &[PaddleIntent],
    left: &mut Paddle,
    right: &mut Paddle,
    config: &Config,
) {
    for intent in intents {
        let paddle = match intent.side {
            Side::Left => &mut *left,
            Side::Right => &mut *right,
        };
        move_paddle(paddle, intent.dir, config);
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
