//! Keyboard input adapter
//!
//! Turns key-down events into move commands. Anything that is not an arrow
//! key, and every auto-repeat, is dropped here and never reaches the sim.

use crate::sim::{Event, Move};

/// The four recognized directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn to_move(self) -> Move {
        match self {
            Direction::Left => Move::LEFT,
            Direction::Right => Move::RIGHT,
            Direction::Up => Move::UP,
            Direction::Down => Move::DOWN,
        }
    }
}

/// Event for a key-down, if it is a fresh press of an arrow key
pub fn key_event(code: &str, repeat: bool) -> Option<Event> {
    if repeat {
        return None;
    }
    Direction::from_code(code).map(|d| Event::Move(d.to_move()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_event("ArrowUp", false), Some(Event::Move(Move::UP)));
        assert_eq!(key_event("ArrowDown", false), Some(Event::Move(Move::DOWN)));
        assert_eq!(key_event("ArrowLeft", false), Some(Event::Move(Move::LEFT)));
        assert_eq!(key_event("ArrowRight", false), Some(Event::Move(Move::RIGHT)));
    }

    #[test]
    fn test_repeat_suppressed() {
        assert_eq!(key_event("ArrowUp", true), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(key_event("KeyW", false), None);
        assert_eq!(key_event("Space", false), None);
        assert_eq!(key_event("arrowup", false), None);
    }

    #[test]
    fn test_move_points() {
        let points: Vec<i32> = Direction::ALL.iter().map(|d| d.to_move().points).collect();
        assert_eq!(points, vec![0, 0, 5, -5]);
    }
}
