use tracing::{debug, info, trace};

use super::{
    config::{ConfigError, GameConfig},
    direction::Direction,
    food::place_target,
    rng::Lcg,
    space::{Position, Space},
    state::{CollisionType, GameState, Snake},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            info: StepInfo {
                ate_food: false,
                collision_type: None,
            },
        }
    }
}

impl GameState {
    /// Start a session, seeding the generator from the config or from entropy
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map(Lcg::new).unwrap_or_else(Lcg::from_entropy);
        Self::with_rng(config, rng)
    }

    /// Start a session with an explicit generator
    pub fn with_rng(config: &GameConfig, mut rng: Lcg) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = config.space();
        let (snake, food) = spawn(&space, config.initial_snake_length, &mut rng);

        Ok(Self {
            space,
            next_direction: snake.direction,
            snake,
            food,
            score: 0,
            steps: 0,
            game_over: false,
            paused: false,
            tick_ms: config.tick_ms,
            accumulator_ms: 0.0,
            initial_snake_length: config.initial_snake_length,
            rng,
        })
    }

    /// Start a session from a given snake and food, e.g. to replay a position
    ///
    /// The snake must lie inside the space without overlapping itself and
    /// the food must sit on a free cell. The pending direction starts equal
    /// to the committed one.
    pub fn with_layout(
        config: &GameConfig,
        snake: Snake,
        food: Option<Position>,
    ) -> Result<Self, ConfigError> {
        let mut state = Self::new(config)?;
        let space = state.space;

        if snake.is_empty() {
            return Err(ConfigError::InvalidLayout("snake has no segments"));
        }
        if !space.allows(snake.direction) {
            return Err(ConfigError::InvalidLayout("direction needs a depth axis"));
        }
        let mut seen = vec![false; space.volume()];
        for &segment in &snake.body {
            let index = space
                .index_of(segment)
                .ok_or(ConfigError::InvalidLayout("snake leaves the space"))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(ConfigError::InvalidLayout("snake overlaps itself"));
            }
        }
        if let Some(food) = food {
            match space.index_of(food) {
                None => return Err(ConfigError::InvalidLayout("food outside the space")),
                Some(index) if seen[index] => {
                    return Err(ConfigError::InvalidLayout("food on the snake"));
                }
                Some(_) => {}
            }
        }

        state.next_direction = snake.direction;
        state.snake = snake;
        state.food = food;
        Ok(state)
    }

    /// Queue a direction for the next tick
    ///
    /// Ignored when the space has no axis for it or when it reverses the
    /// committed direction. Returns whether the pending direction changed
    /// hands; the last accepted call before a tick wins.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !self.space.allows(requested) || self.snake.direction.is_opposite(requested) {
            return false;
        }
        self.next_direction = requested;
        true
    }

    /// Execute one tick of the game
    pub fn step(&mut self) -> StepResult {
        if self.game_over || self.paused {
            return StepResult::idle(self.game_over);
        }

        self.snake.direction = self.next_direction;
        let new_head = self.snake.head().moved_in_direction(self.snake.direction);
        let ate_food = self.food == Some(new_head);
        self.steps += 1;

        if let Some(collision_type) = self.check_collision(new_head, ate_food) {
            self.game_over = true;
            info!(
                ?collision_type,
                score = self.score,
                length = self.snake.len(),
                steps = self.steps,
                "game over"
            );

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        self.snake.advance_to(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.food = place_target(&self.space, &self.snake.body, &mut self.rng);
            debug!(score = self.score, food = ?self.food, "food eaten");
            if self.food.is_none() {
                info!(length = self.snake.len(), "no free cell left for food");
            }
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    /// Feed wall-clock time into the fixed-timestep scheduler
    ///
    /// Runs one tick per whole `tick_ms` in the accumulator and keeps the
    /// remainder for the next call. Stops draining once the game is over.
    /// Non-positive or non-finite input is ignored. Returns the number of
    /// ticks run.
    pub fn advance(&mut self, elapsed_ms: f64) -> usize {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }

        self.accumulator_ms += elapsed_ms;

        // Paused ticks are no-ops, so drain them in one go.
        if self.paused && !self.game_over {
            let ticks = (self.accumulator_ms / self.tick_ms).floor();
            self.accumulator_ms %= self.tick_ms;
            return ticks as usize;
        }

        // A running snake cannot turn mid-call, so it reaches a wall within
        // one board length and the loop ends.
        let mut ticks = 0;
        while !self.game_over && self.accumulator_ms >= self.tick_ms {
            self.accumulator_ms -= self.tick_ms;
            self.step();
            ticks += 1;
        }

        if ticks > 1 {
            trace!(ticks, elapsed_ms, "scheduler caught up");
        }
        ticks
    }

    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Begin a new round on the same board
    ///
    /// The generator keeps its stream, so consecutive rounds do not replay
    /// the same food sequence.
    pub fn restart(&mut self) {
        let (snake, food) = spawn(&self.space, self.initial_snake_length, &mut self.rng);
        self.next_direction = snake.direction;
        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.steps = 0;
        self.game_over = false;
        self.paused = false;
        self.accumulator_ms = 0.0;
        debug!(food = ?self.food, "game restarted");
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, pos: Position, growing: bool) -> Option<CollisionType> {
        if self.space.is_out_of_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.snake.collides_with(pos, growing) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

/// Seed snake at the midpoint heading right, plus its first food
fn spawn(space: &Space, length: usize, rng: &mut Lcg) -> (Snake, Option<Position>) {
    let snake = Snake::new(space.midpoint(), Direction::Right, length);
    let food = place_target(space, &snake.body, rng);
    (snake, food)
}
