//! Terminal display surface
//!
//! Draw calls are queued in arena coordinates and painted onto a braille
//! canvas when the frame is presented.

use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use game_core::{Config, DisplaySurface, Rect};
use ratatui::{
    backend::Backend,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Rectangle},
        Block,
    },
    Terminal,
};
use std::io;

/// Puts the terminal into game mode and restores it on drop
#[derive(Debug)]
pub struct TerminalGuard {
    reports_release: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        match enter_game_mode() {
            Ok(reports_release) => Ok(Self { reports_release }),
            Err(e) => {
                restore_terminal();
                Err(e)
            }
        }
    }

    /// Whether the terminal will send key release events
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn enter_game_mode() -> io::Result<bool> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    Ok(reports_release)
}

/// Restore terminal state - called on drop and on panic
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen,
        Show
    );
}

#[derive(Debug, Clone, PartialEq)]
enum DrawCommand {
    Fill(Rect),
    Text { x: i32, y: i32, text: String },
}

/// [`DisplaySurface`] over a ratatui terminal
pub struct CanvasSurface<B: Backend> {
    terminal: Terminal<B>,
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl<B: Backend> CanvasSurface<B> {
    pub fn new(backend: B, config: &Config) -> io::Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            width: f64::from(config.arena_width),
            height: f64::from(config.arena_height),
            commands: Vec::new(),
        })
    }
}

/// Canvas y grows upward; arena y grows downward
fn to_canvas(rect: Rect, arena_height: f64) -> Rectangle {
    Rectangle {
        x: f64::from(rect.x),
        y: arena_height - f64::from(rect.y) - f64::from(rect.h),
        width: f64::from(rect.w),
        height: f64::from(rect.h),
        color: Color::White,
    }
}

impl<B: Backend> DisplaySurface for CanvasSurface<B> {
    type Error = io::Error;

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Fill(rect));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present(&mut self) -> io::Result<()> {
        let (width, height) = (self.width, self.height);
        let commands = &self.commands;

        self.terminal.draw(|frame| {
            let canvas = Canvas::default()
                .block(Block::bordered().title(" Pong "))
                .marker(Marker::Braille)
                .x_bounds([0.0, width])
                .y_bounds([0.0, height])
                .paint(|ctx| {
                    for command in commands {
                        match command {
                            DrawCommand::Fill(rect) => ctx.draw(&to_canvas(*rect, height)),
                            DrawCommand::Text { x, y, text } => {
                                ctx.print(f64::from(*x), height - f64::from(*y), text.clone())
                            }
                        }
                    }
                });
            frame.render_widget(canvas, frame.area());
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{render_frame, Ball, Paddle, Side};
    use ratatui::backend::TestBackend;

    fn screen_text(surface: &CanvasSurface<TestBackend>) -> String {
        surface
            .terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_to_canvas_flips_y() {
        let rect = to_canvas(Rect::new(10, 250, 10, 100), 600.0);
        assert_eq!((rect.x, rect.y), (10.0, 250.0));

        let rect = to_canvas(Rect::new(395, 0, 10, 10), 600.0);
        assert_eq!((rect.y, rect.height), (590.0, 10.0));
    }

    #[test]
    fn test_present_paints_shapes_and_text() {
        let config = Config::new();
        let mut surface = CanvasSurface::new(TestBackend::new(100, 40), &config).unwrap();

        render_frame(
            &mut surface,
            &Paddle::spawn(Side::Left, &config),
            &Paddle::spawn(Side::Right, &config),
            &Ball::spawn(&config),
            60,
        )
        .unwrap();

        let text = screen_text(&surface);
        assert!(text.contains("FPS: 60"));
        assert!(
            text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)),
            "Paddles and ball should be painted as braille dots"
        );
    }

    #[test]
    fn test_clear_drops_queued_commands() {
        let config = Config::new();
        let mut surface = CanvasSurface::new(TestBackend::new(100, 40), &config).unwrap();

        surface.draw_text(10, 10, "FPS: 1");
        surface.clear();
        surface.present().unwrap();

        assert!(!screen_text(&surface).contains("FPS"));
    }
}
