use serde::Serialize;

use super::direction::Direction;
use super::rng::Lcg;
use super::space::{Position, Space};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction executed on the last tick
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy, dz) = direction.delta();
        let body = std::iter::successors(Some(head), |prev| Some(prev.moved_by(-dx, -dy, -dz)))
            .take(length)
            .collect();

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check whether moving the head onto `pos` would hit the body
    ///
    /// The tail cell is vacated on a tick without growth, so it only counts
    /// when `growing` is set.
    pub fn collides_with(&self, pos: Position, growing: bool) -> bool {
        let checked = if growing {
            &self.body[..]
        } else {
            &self.body[..self.body.len().saturating_sub(1)]
        };
        checked.contains(&pos)
    }

    /// Push a new head, dropping the tail unless growing
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionType {
    /// Snake left the space
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Where the game sits in its Running / Paused / GameOver cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Complete game state
///
/// One value per play session, owned by the host loop and changed only
/// through the operations in [`engine`](super::engine).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) space: Space,
    pub(crate) snake: Snake,
    /// Direction the next tick will commit
    pub(crate) next_direction: Direction,
    pub(crate) food: Option<Position>,
    pub(crate) score: u32,
    /// Ticks executed since the last (re)start, including a fatal one
    pub(crate) steps: u32,
    pub(crate) game_over: bool,
    pub(crate) paused: bool,
    pub(crate) tick_ms: f64,
    pub(super) accumulator_ms: f64,
    pub(super) initial_snake_length: usize,
    pub(super) rng: Lcg,
}

impl GameState {
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Body, head first, with the committed direction
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Committed direction
    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Direction the next tick will commit
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Leftover milliseconds not yet consumed by a tick
    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    pub fn rng(&self) -> &Lcg {
        &self.rng
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    /// Read-only view for renderers and debug dumps
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.phase(),
            width: self.space.width(),
            height: self.space.height(),
            depth: self.space.is_volumetric().then(|| self.space.depth()),
            snake: self.snake.body.clone(),
            food: self.food,
            score: self.score,
            steps: self.steps,
            direction: self.snake.direction,
            next_direction: self.next_direction,
        }
    }
}

/// Serializable copy of the observable game state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: Phase,
    pub width: usize,
    pub height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub steps: u32,
    pub direction: Direction,
    pub next_direction: Direction,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
