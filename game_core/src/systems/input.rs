use crate::Side;

/// Keys the game reads from the input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Quit,
}

/// What a held key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MovePaddle { side: Side, dir: i32 },
    Quit,
}

/// Fixed key table, in the order keys are checked each frame
pub const KEY_BINDINGS: [(Key, Action); 5] = [
    (
        Key::LeftUp,
        Action::MovePaddle {
            side: Side::Left,
            dir: -1,
        },
    ),
    (
        Key::LeftDown,
        Action::MovePaddle {
            side: Side::Left,
            dir: 1,
        },
    ),
    (
        Key::RightUp,
        Action::MovePaddle {
            side: Side::Right,
            dir: -1,
        },
    ),
    (
        Key::RightDown,
        Action::MovePaddle {
            side: Side::Right,
            dir: 1,
        },
    ),
    (Key::Quit, Action::Quit),
];

/// Per-frame view of the keyboard (or whatever drives the paddles)
pub trait InputSnapshot {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Refresh held-key state. Called once at the start of every frame.
    fn poll(&mut self) -> Result<(), Self::Error>;

    /// Whether `key` is held as of the last poll
    fn is_held(&self, key: Key) -> bool;

    /// Window close or equivalent
    fn close_requested(&self) -> bool {
        false
    }
}

/// Movement intent for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleIntent {
    pub side: Side,
    pub dir: i32, // -1 = up, 1 = down
}

/// Everything the held keys asked for this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub intents: Vec<PaddleIntent>,
    pub quit: bool,
}

/// Translate held keys into paddle intents, in binding order.
///
/// Opposite keys held together both produce an intent; they are applied one
/// after the other rather than cancelled here.
pub fn map_input(input: &impl InputSnapshot) -> InputFrame {
    let mut frame = InputFrame::default();
    for (key, action) in KEY_BINDINGS {
        if !input.is_held(key) {
            continue;
        }
        match action {
            Action::MovePaddle { side, dir } => frame.intents.push(PaddleIntent { side, dir }),
            Action::Quit => frame.quit = true,
        }
    }
    frame
}
