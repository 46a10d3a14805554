//! Keyboard handling
//!
//! Terminals report key presses as a stream of events, not as held state.
//! With keyboard enhancement we also get releases; without it a key stays
//! held only while the terminal keeps sending repeats.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSnapshot, Key};
use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

/// How long a key counts as held after its last press or repeat, when the
/// terminal cannot report releases
pub const HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// Map a terminal key to a game key
pub fn game_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w' | 'W') => Some(Key::LeftUp),
        KeyCode::Char('s' | 'S') => Some(Key::LeftDown),
        KeyCode::Up => Some(Key::RightUp),
        KeyCode::Down => Some(Key::RightDown),
        KeyCode::Char('q' | 'Q') => Some(Key::Quit),
        _ => None,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Held-key state built from terminal key events
#[derive(Debug)]
pub struct Keyboard {
    held: HashMap<Key, Instant>,
    reports_release: bool,
    close_requested: bool,
}

impl Keyboard {
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: HashMap::new(),
            reports_release,
            close_requested: false,
        }
    }

    /// Fold one terminal event into the held-key state
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        let Event::Key(key) = event else {
            return;
        };

        if is_interrupt(key) {
            self.close_requested = true;
            return;
        }

        let Some(game_key) = game_key(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(game_key, now);
            }
            KeyEventKind::Release => {
                self.held.remove(&game_key);
            }
        }
    }

    /// Drop keys that have gone quiet, for terminals without release events
    pub fn expire(&mut self, now: Instant) {
        if self.reports_release {
            return;
        }
        self.held
            .retain(|_, last_seen| now.saturating_duration_since(*last_seen) < HOLD_TIMEOUT);
    }
}

impl InputSnapshot for Keyboard {
    type Error = io::Error;

    fn poll(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(&event, Instant::now());
        }
        self.expire(Instant::now());
        Ok(())
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }
}
