//! The session loop: one owner for both paddles, the ball and the pacer.

use crate::render::render_frame;
use crate::systems::{map_input, move_paddles, InputSnapshot};
use crate::{
    step, Ball, Clock, Config, DisplaySurface, Events, FramePacer, Paddle, QuitReason,
    SessionError, Side,
};
use tracing::{debug, info, trace};

pub struct Session {
    pub config: Config,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub pacer: FramePacer,
    pub events: Events,
    quit_reason: Option<QuitReason>,
    frames: u64,
}

impl Session {
    /// Fresh session: paddles centered on their sides, ball served from the center
    pub fn new(config: Config, now_ms: u64) -> Self {
        Self {
            left: Paddle::spawn(Side::Left, &config),
            right: Paddle::spawn(Side::Right, &config),
            ball: Ball::spawn(&config),
            pacer: FramePacer::new(&config, now_ms),
            events: Events::new(),
            quit_reason: None,
            frames: 0,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.quit_reason.is_none()
    }

    pub fn quit_reason(&self) -> Option<QuitReason> {
        self.quit_reason
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one full frame: input, paddles, ball, render, pacing.
    ///
    /// A quit request stops the session only after the frame finishes.
    pub fn run_frame<I, S, C>(
        &mut self,
        input: &mut I,
        surface: &mut S,
        clock: &C,
    ) -> Result<(), SessionError>
    where
        I: InputSnapshot,
        S: DisplaySurface,
        C: Clock,
    {
        self.pacer.begin_frame(clock.now_ms());

        input
            .poll()
            .map_err(|e| SessionError::Input(Box::new(e)))?;
        if input.close_requested() {
            self.stop(QuitReason::CloseRequested);
        }

        let frame = map_input(&*input);
        move_paddles(&frame.intents, &mut self.left, &mut self.right, &self.config);
        if frame.quit {
            self.stop(QuitReason::QuitKey);
        }

        step(
            &mut self.ball,
            &self.left,
            &self.right,
            &self.config,
            &mut self.events,
        );
        if self.events.ball_hit_wall || self.events.ball_hit_paddle {
            trace!(
                frame = self.frames,
                wall = self.events.ball_hit_wall,
                paddle = self.events.ball_hit_paddle,
                "Ball bounced"
            );
        }
        if self.events.ball_served {
            debug!(
                frame = self.frames,
                dx = self.ball.vel.x,
                dy = self.ball.vel.y,
                "Ball left the arena, serving again"
            );
        }

        render_frame(
            surface,
            &self.left,
            &self.right,
            &self.ball,
            self.pacer.fps(),
        )
        .map_err(|e| SessionError::Display(Box::new(e)))?;

        self.pacer.end_frame(clock);
        self.frames += 1;
        Ok(())
    }

    /// Run frames until a quit is requested
    pub fn run<I, S, C>(
        &mut self,
        input: &mut I,
        surface: &mut S,
        clock: &C,
    ) -> Result<QuitReason, SessionError>
    where
        I: InputSnapshot,
        S: DisplaySurface,
        C: Clock,
    {
        info!(
            width = self.config.arena_width,
            height = self.config.arena_height,
            target_fps = self.config.target_fps,
            "Session started"
        );

        loop {
            self.run_frame(input, surface, clock)?;
            if let Some(reason) = self.quit_reason {
                info!(?reason, frames = self.frames, "Session ended");
                return Ok(reason);
            }
        }
    }

    fn stop(&mut self, reason: QuitReason) {
        if self.quit_reason.is_none() {
            self.quit_reason = Some(reason);
        }
    }
}
