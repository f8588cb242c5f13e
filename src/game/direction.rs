use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction the snake can move
///
/// `In` and `Out` move along the depth axis and are only legal when the
/// space has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    In,
    Out,
}

/// Returned when a direction name is not one of the six known names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction `{0}`")]
pub struct ParseDirectionError(pub String);

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::In,
        Direction::Out,
    ];

    pub const PLANAR: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::In => Direction::Out,
            Direction::Out => Direction::In,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy, dz) for moving in this direction
    ///
    /// Origin is top-left: +x right, +y down, +z into the screen.
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::Up => (0, -1, 0),
            Direction::Down => (0, 1, 0),
            Direction::Left => (-1, 0, 0),
            Direction::Right => (1, 0, 0),
            Direction::In => (0, 0, 1),
            Direction::Out => (0, 0, -1),
        }
    }

    /// True for the four directions available without a depth axis
    pub fn is_planar(self) -> bool {
        !matches!(self, Direction::In | Direction::Out)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));
        assert!(Direction::In.is_opposite(Direction::Out));
        assert!(Direction::Out.is_opposite(Direction::In));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::In));
    }

    #[test]
    fn test_opposite_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1, 0));
        assert_eq!(Direction::Left.delta(), (-1, 0, 0));
        assert_eq!(Direction::Right.delta(), (1, 0, 0));
        assert_eq!(Direction::In.delta(), (0, 0, 1));
        assert_eq!(Direction::Out.delta(), (0, 0, -1));
    }

    #[test]
    fn test_opposites_cancel() {
        for d in Direction::ALL {
            let (ax, ay, az) = d.delta();
            let (bx, by, bz) = d.opposite().delta();
            assert_eq!((ax + bx, ay + by, az + bz), (0, 0, 0));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("IN".parse::<Direction>(), Ok(Direction::In));
        assert_eq!(" out ".parse::<Direction>(), Ok(Direction::Out));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(ParseDirectionError("sideways".to_string()))
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"left\"");
        assert_eq!(
            serde_json::from_str::<Direction>("\"in\"").unwrap(),
            Direction::In
        );
    }
}
