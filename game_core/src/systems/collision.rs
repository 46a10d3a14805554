use crate::{Ball, Config, Events, Paddle};

/// Bounce off the top and bottom walls.
///
/// Only the vertical velocity flips. The ball is not pushed back inside, so it
/// may overlap a wall by up to one frame of travel.
pub fn check_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.y <= 0 || ball.pos.y + ball.size >= config.arena_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Bounce off either paddle.
///
/// The two paddle tests are independent and unordered: the left test only
/// looks at the ball's left edge against the paddle's right edge, the right
/// test only at the ball's right edge against the paddle's left edge. If
/// either holds, the horizontal velocity flips once.
pub fn check_paddles(ball: &mut Ball, left: &Paddle, right: &Paddle, events: &mut Events) {
    let hits_left = ball.pos.x <= left.pos.x + left.size.x && overlaps_vertically(ball, left);
    let hits_right = ball.pos.x + ball.size >= right.pos.x && overlaps_vertically(ball, right);

    if hits_left || hits_right {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_paddle = true;
    }
}

fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.size >= paddle.pos.y && ball.pos.y <= paddle.pos.y + paddle.size.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use glam::IVec2;

    fn setup() -> (Config, Paddle, Paddle, Events) {
        let config = Config::new();
        let left = Paddle::spawn(Side::Left, &config);
        let right = Paddle::spawn(Side::Right, &config);
        (config, left, right, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (config, _, _, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(400, 0), IVec2::new(5, -5), 10);

        check_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, IVec2::new(5, 5), "Only Y velocity reverses");
        assert_eq!(ball.pos.y, 0, "No positional correction");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_overlapping_wall_is_left_in_place() {
        let (config, _, _, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(400, -4), IVec2::new(5, -5), 10);

        check_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.pos.y, -4);
        assert_eq!(ball.vel.y, 5);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (config, _, _, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(400, 590), IVec2::new(-5, 5), 10);

        check_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, IVec2::new(-5, -5));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_in_open_field() {
        let (config, _, _, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(400, 1), IVec2::new(5, -5), 10);

        check_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, IVec2::new(5, -5));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (_, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(20, 280), IVec2::new(-5, 5), 10);

        check_paddles(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, 5, "Ball should bounce right off the left paddle");
        assert_eq!(ball.vel.y, 5, "Y velocity is untouched");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (_, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(770, 340), IVec2::new(5, 5), 10);

        check_paddles(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, -5, "Ball should bounce left off the right paddle");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_vertical_band_edges_are_inclusive() {
        let (_, left, right, mut events) = setup();

        // Ball bottom edge touching paddle top
        let mut ball = Ball::new(IVec2::new(15, 240), IVec2::new(-5, 5), 10);
        check_paddles(&mut ball, &left, &right, &mut events);
        assert_eq!(ball.vel.x, 5);

        // Ball top edge touching paddle bottom
        let mut ball = Ball::new(IVec2::new(15, 350), IVec2::new(-5, 5), 10);
        check_paddles(&mut ball, &left, &right, &mut events);
        assert_eq!(ball.vel.x, 5);
    }

    #[test]
    fn test_ball_misses_paddle_vertically() {
        let (_, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(15, 100), IVec2::new(-5, 5), 10);

        check_paddles(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, -5);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_bounce_ignores_direction_of_travel() {
        // Ball already moving away from the left paddle still flips while in its band
        let (_, left, right, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(18, 280), IVec2::new(5, 5), 10);

        check_paddles(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, -5);
    }

    #[test]
    fn test_both_paddle_tests_true_flips_once() {
        let config = Config {
            arena_width: 60,
            ..Config::new()
        };
        let left = Paddle::spawn(Side::Left, &config);
        let right = Paddle::spawn(Side::Right, &config);
        let mut events = Events::new();
        // Left test: 20 <= 20. Right test: 20 + 20 >= 40.
        let mut ball = Ball::new(IVec2::new(20, 280), IVec2::new(5, 5), 20);

        check_paddles(&mut ball, &left, &right, &mut events);

        assert_eq!(ball.vel.x, -5, "Two hits in one frame still flip once");
    }
}
