pub mod components;
pub mod config;
pub mod error;
pub mod pacer;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use pacer::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;
pub use systems::*;

/// Advance the ball one frame and resolve its collisions
pub fn step(ball: &mut Ball, left: &Paddle, right: &Paddle, config: &Config, events: &mut Events) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(ball);

    // 2. Top and bottom walls
    check_walls(ball, config, events);

    // 3. Paddles
    check_paddles(ball, left, right, events);

    // 4. Serve again if the ball left the arena
    check_out_of_bounds(ball, config, events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn setup() -> (Config, Paddle, Paddle, Events) {
        let config = Config::new();
        let left = Paddle::spawn(Side::Left, &config);
        let right = Paddle::spawn(Side::Right, &config);
        (config, left, right, Events::new())
    }

    #[test]
    fn test_step_bounces_off_top_wall() {
        let (config, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(400, 0), IVec2::new(5, -5), 10);

        step(&mut ball, &left, &right, &config, &mut events);

        assert_eq!(ball.vel.y, 5);
        assert_eq!(ball.pos, IVec2::new(405, -5), "Integrated before bouncing");
    }

    #[test]
    fn test_step_bounces_off_bottom_wall() {
        let (config, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(400, 590), IVec2::new(5, 5), 10);

        step(&mut ball, &left, &right, &config, &mut events);

        assert_eq!(ball.vel.y, -5);
    }

    #[test]
    fn test_step_serves_ball_that_left_the_arena() {
        let (config, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(801, 100), IVec2::new(5, -5), 10);

        step(&mut ball, &left, &right, &config, &mut events);

        assert_eq!(ball.pos, IVec2::new(395, 295));
        assert_eq!(ball.vel, IVec2::new(5, -5));
        assert!(events.ball_served);
    }

    #[test]
    fn test_step_flips_dx_at_left_paddle() {
        let (config, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(20, 280), IVec2::new(-5, 5), 10);

        step(&mut ball, &left, &right, &config, &mut events);

        assert_eq!(ball.vel.x, 5);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_step_clears_previous_events() {
        let (config, left, right, mut events) = setup();
        events.ball_hit_wall = true;
        let mut ball = Ball::spawn(&config);

        step(&mut ball, &left, &right, &config, &mut events);

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_velocity_magnitude_never_drifts() {
        let (config, mut left, mut right, mut events) = setup();
        let mut ball = Ball::spawn(&config);
        for frame in 0..5000 {
            // Sweep the paddles so the ball meets them at varying heights
            let dir = if (frame / 40) % 2 == 0 { 1 } else { -1 };
            move_paddle(&mut left, dir, &config);
            move_paddle(&mut right, -dir, &config);

            step(&mut ball, &left, &right, &config, &mut events);

            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert_eq!(ball.vel.y.abs(), config.ball_speed);
        }
    }
}
