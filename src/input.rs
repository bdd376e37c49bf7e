/// Keyboard sampling.
///
/// Input model: the sampler drains every pending terminal event once per
/// frame and folds key transitions into the ship's `Intents`.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol and friends): proper
///   `Press` / `Repeat` / `Release` events.  Press sets a direction, release
///   clears it, repeats are ignored.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  A direction counts as held while presses keep
///   arriving and is released after `HOLD_WINDOW` frames of silence.  A
///   Space press inside the same window is auto-repeat and does not fire.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Intents;

/// Frames a direction stays held on terminals that never report releases.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key means to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Fire,
    Quit,
}

/// Outcome of draining the event queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    Continue,
    Quit,
}

/// Fixed key bindings: W/A/S/D or arrows, Space, Escape, Ctrl+C.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Action::Quit)
        }
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Action::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Action::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Action::Move(Direction::Right))
        }
        _ => None,
    }
}

fn set_direction(intents: &mut Intents, direction: Direction, held: bool) {
    match direction {
        Direction::Up => intents.up = held,
        Direction::Down => intents.down = held,
        Direction::Left => intents.left = held,
        Direction::Right => intents.right = held,
    }
}

#[derive(Debug)]
pub struct InputSampler {
    /// The terminal reports `Release` events.
    release_events: bool,
    /// Last frame a press was seen, per held direction (classic terminals).
    last_seen: HashMap<Direction, u64>,
    /// Last frame a fire press was seen (classic terminals).
    fire_seen: Option<u64>,
    /// Latest terminal size reported by a resize event.
    resized: Option<(u16, u16)>,
}

impl InputSampler {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            last_seen: HashMap::new(),
            fire_seen: None,
            resized: None,
        }
    }

    /// Drain every pending terminal event without blocking, then expire
    /// stale directions.
    pub fn poll(&mut self, intents: &mut Intents, frame: u64) -> std::io::Result<Poll> {
        let mut result = Poll::Continue;
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if self.handle_event(&ev, intents, frame) == Poll::Quit {
                result = Poll::Quit;
            }
        }
        self.expire(intents, frame);
        Ok(result)
    }

    /// Fold a single terminal event into `intents`.
    pub fn handle_event(&mut self, ev: &Event, intents: &mut Intents, frame: u64) -> Poll {
        match ev {
            Event::Key(key) => self.handle_key(key, intents, frame),
            Event::Resize(cols, rows) => {
                self.resized = Some((*cols, *rows));
                Poll::Continue
            }
            _ => Poll::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, intents: &mut Intents, frame: u64) -> Poll {
        let Some(action) = action_for(key) else {
            return Poll::Continue;
        };

        match (key.kind, action) {
            (KeyEventKind::Press, Action::Quit) => return Poll::Quit,
            (KeyEventKind::Press, Action::Fire) => {
                if !self.is_fire_repeat(frame) {
                    intents.fire = true;
                }
            }
            (KeyEventKind::Press, Action::Move(direction)) => {
                set_direction(intents, direction, true);
                self.last_seen.insert(direction, frame);
            }
            // Classic terminals have no repeat kind, so this only refreshes
            // when the protocol is on, and then expiry never runs.
            (KeyEventKind::Repeat, Action::Move(direction)) => {
                self.last_seen.insert(direction, frame);
            }
            (KeyEventKind::Release, Action::Move(direction)) => {
                set_direction(intents, direction, false);
                self.last_seen.remove(&direction);
            }
            _ => {}
        }
        Poll::Continue
    }

    /// Classic terminals report a held Space as a stream of presses.  Any
    /// press within `HOLD_WINDOW` frames of the previous one continues the
    /// same hold.
    fn is_fire_repeat(&mut self, frame: u64) -> bool {
        if self.release_events {
            return false;
        }
        let repeat = self
            .fire_seen
            .map_or(false, |last| frame.saturating_sub(last) <= HOLD_WINDOW);
        self.fire_seen = Some(frame);
        repeat
    }

    /// Release directions whose key has gone quiet.  Only applies when the
    /// terminal cannot tell us about releases itself.
    pub fn expire(&mut self, intents: &mut Intents, frame: u64) {
        if self.release_events {
            return;
        }
        self.last_seen.retain(|&direction, &mut last| {
            let held = frame.saturating_sub(last) <= HOLD_WINDOW;
            if !held {
                set_direction(intents, direction, false);
            }
            held
        });
    }

    /// Terminal size from the most recent resize event, if one arrived
    /// since the last call.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }
}
