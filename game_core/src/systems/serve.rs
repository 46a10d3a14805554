use crate::{Ball, Config, Events};

/// Serve again once the ball has left the arena horizontally.
/// Nobody scores; the ball keeps its heading.
pub fn check_out_of_bounds(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.x < 0 || ball.pos.x > config.arena_width {
        ball.reset(config);
        events.ball_served = true;
    }
}
