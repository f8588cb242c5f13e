use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell in the space; `z` stays 0 on a planar board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    pub fn new3(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.delta();
        self.moved_by(dx, dy, dz)
    }
}

/// Bounded discrete space of two or three axes
///
/// A planar space behaves as a volume of depth 1 whose depth axis cannot
/// be travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    width: usize,
    height: usize,
    depth: Option<usize>,
}

impl Space {
    pub fn planar(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depth: None,
        }
    }

    pub fn volumetric(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth: Some(depth),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Extent of the depth axis, 1 for a planar space
    pub fn depth(&self) -> usize {
        self.depth.unwrap_or(1)
    }

    pub fn is_volumetric(&self) -> bool {
        self.depth.is_some()
    }

    /// Total number of cells
    pub fn volume(&self) -> usize {
        self.width * self.height * self.depth()
    }

    /// Whether a direction can be travelled in this space
    pub fn allows(&self, direction: Direction) -> bool {
        self.is_volumetric() || direction.is_planar()
    }

    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0
            || pos.y < 0
            || pos.z < 0
            || pos.x as usize >= self.width
            || pos.y as usize >= self.height
            || pos.z as usize >= self.depth()
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        !self.is_out_of_bounds(pos)
    }

    /// Floor of half of each dimension
    pub fn midpoint(&self) -> Position {
        Position::new3(
            (self.width / 2) as i32,
            (self.height / 2) as i32,
            (self.depth() / 2) as i32,
        )
    }

    /// Linear index `x + y*width + z*width*height`, or `None` outside the space
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if self.is_out_of_bounds(pos) {
            return None;
        }
        let (x, y, z) = (pos.x as usize, pos.y as usize, pos.z as usize);
        Some(x + y * self.width + z * self.width * self.height)
    }

    pub fn position_at(&self, index: usize) -> Position {
        let layer = self.width * self.height;
        let z = index / layer;
        let rem = index % layer;
        Position::new3(
            (rem % self.width) as i32,
            (rem / self.width) as i32,
            z as i32,
        )
    }

    /// Every cell, z outermost then y then x, each ascending from 0
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.volume()).map(|i| self.position_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1, 0), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1, 0), Position::new(5, 4));
        assert_eq!(
            pos.moved_in_direction(Direction::In),
            Position::new3(5, 5, 1)
        );
    }

    #[test]
    fn test_bounds_checking() {
        let space = Space::planar(20, 20);

        assert!(space.is_in_bounds(Position::new(0, 0)));
        assert!(space.is_in_bounds(Position::new(19, 19)));
        assert!(space.is_out_of_bounds(Position::new(-1, 0)));
        assert!(space.is_out_of_bounds(Position::new(20, 0)));
        assert!(space.is_out_of_bounds(Position::new(0, 20)));
        assert!(space.is_out_of_bounds(Position::new3(0, 0, 1)));
        assert!(space.is_out_of_bounds(Position::new3(0, 0, -1)));
    }

    #[test]
    fn test_volumetric_bounds() {
        let space = Space::volumetric(4, 4, 4);
        assert!(space.is_in_bounds(Position::new3(3, 3, 3)));
        assert!(space.is_out_of_bounds(Position::new3(2, 1, 4)));
        assert!(space.is_out_of_bounds(Position::new3(2, 1, -1)));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Space::planar(10, 7).midpoint(), Position::new(5, 3));
        assert_eq!(
            Space::volumetric(9, 9, 5).midpoint(),
            Position::new3(4, 4, 2)
        );
    }

    #[test]
    fn test_depth_directions_need_depth_axis() {
        let planar = Space::planar(10, 10);
        assert!(planar.allows(Direction::Up));
        assert!(!planar.allows(Direction::In));
        assert!(!planar.allows(Direction::Out));

        let volume = Space::volumetric(10, 10, 1);
        assert!(volume.allows(Direction::In));
    }

    #[test]
    fn test_index_round_trip_and_scan_order() {
        let space = Space::volumetric(3, 2, 2);
        let cells: Vec<Position> = space.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Position::new3(0, 0, 0));
        assert_eq!(cells[1], Position::new3(1, 0, 0));
        assert_eq!(cells[3], Position::new3(0, 1, 0));
        assert_eq!(cells[6], Position::new3(0, 0, 1));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(space.index_of(*cell), Some(i));
        }
        assert_eq!(space.index_of(Position::new3(3, 0, 0)), None);
    }
}
