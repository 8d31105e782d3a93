use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameRules;
use crate::food;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::progression;
use crate::score::HighScoreStore;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// Steering uses two explicit fields: `direction` is what the last tick
/// actually moved in, `next_direction` is the latest legal intent, applied
/// at the start of the following tick. Intents arriving between ticks
/// overwrite each other, so only the most recent one counts.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub next_direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub foods_eaten: u32,
    pub game_speed_ms: u64,
    pub status: GameStatus,
    rules: GameRules,
    rng: StdRng,
}

const INITIAL_DIRECTION: Direction = Direction::Up;

impl GameState {
    /// Creates a fresh session in `Ready` with an entropy-seeded RNG.
    ///
    /// `high_score` is the value read from persistent storage at startup.
    #[must_use]
    pub fn new(rules: GameRules, high_score: u32) -> Self {
        Self::with_rng(rules, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(rules: GameRules, high_score: u32, seed: u64) -> Self {
        Self::with_rng(rules, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: GameRules, high_score: u32, mut rng: StdRng) -> Self {
        let snake = initial_snake(rules.board_size);
        let food = food::spawn(&mut rng, rules.board_size, &snake);

        Self {
            snake,
            food,
            direction: INITIAL_DIRECTION,
            next_direction: INITIAL_DIRECTION,
            score: 0,
            high_score,
            level: 1,
            foods_eaten: 0,
            game_speed_ms: rules.initial_speed_ms,
            status: GameStatus::Ready,
            rules,
            rng,
        }
    }

    /// Returns the session back to `Ready` with everything but the high
    /// score reinitialized. Idempotent and available from every status.
    pub fn reset(&mut self) {
        self.snake = initial_snake(self.rules.board_size);
        self.food = food::spawn(&mut self.rng, self.rules.board_size, &self.snake);
        self.direction = INITIAL_DIRECTION;
        self.next_direction = INITIAL_DIRECTION;
        self.score = 0;
        self.level = 1;
        self.foods_eaten = 0;
        self.game_speed_ms = self.rules.initial_speed_ms;
        self.status = GameStatus::Ready;
    }

    /// Applies one external input intent.
    ///
    /// Direction intents only mutate the buffered `next_direction`; a
    /// reversal of the committed direction is dropped here, at intent time.
    /// Direction intents are accepted in any status but only take effect on
    /// a tick while `Playing`.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if direction_change_is_valid(self.direction, direction) {
                    self.next_direction = direction;
                }
            }
            GameInput::TogglePauseOrStart => {
                self.status = match self.status {
                    GameStatus::Ready => GameStatus::Playing,
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    GameStatus::GameOver => GameStatus::GameOver,
                };
            }
            GameInput::Restart => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Advances the simulation by one tick. No-op outside `Playing`.
    ///
    /// The collision check runs before anything commits, against the
    /// candidate head with the tail still in place (grow first, trim
    /// after): a colliding tick changes only the status and the high
    /// score, leaving the snake, direction, and scores as they were. On
    /// game over the high score is persisted best-effort through `store`;
    /// a failed write never affects in-memory state.
    pub fn tick(&mut self, store: &mut dyn HighScoreStore) {
        if self.status != GameStatus::Playing {
            return;
        }

        if self
            .snake
            .would_collide(self.next_direction, self.rules.board_size)
        {
            self.status = GameStatus::GameOver;
            if self.score > self.high_score {
                self.high_score = self.score;
                let _ = store.save(self.high_score);
            }
            return;
        }

        self.direction = self.next_direction;
        self.snake.advance(self.direction);

        if self.snake.head() == self.food {
            self.foods_eaten += 1;
            self.level = progression::level_for(self.foods_eaten, self.rules.foods_per_level);
            self.game_speed_ms = progression::speed_for(
                self.level,
                self.rules.initial_speed_ms,
                self.rules.speed_increment_ms,
            );
            self.score += self.rules.points_per_food * progression::score_multiplier(self.level);
            self.food = food::spawn(&mut self.rng, self.rules.board_size, &self.snake);
        } else {
            self.snake.drop_tail();
        }
    }

    /// Returns the rule set in effect for this session.
    #[must_use]
    pub fn rules(&self) -> GameRules {
        self.rules
    }
}

/// Three vertical segments hanging down from the board center, head on top.
fn initial_snake(board_size: i32) -> Snake {
    let center = board_size / 2;
    Snake::from_segments(vec![
        Position {
            x: center,
            y: center,
        },
        Position {
            x: center,
            y: center + 1,
        },
        Position {
            x: center,
            y: center + 2,
        },
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::GameRules;
    use crate::input::{Direction, GameInput};
    use crate::score::MemoryHighScoreStore;
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus};

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(GameRules::default(), 0, seed);
        state.status = GameStatus::Playing;
        state
    }

    #[test]
    fn fresh_state_starts_ready_at_board_center() {
        let state = GameState::new_with_seed(GameRules::default(), 0, 1);

        assert_eq!(state.status, GameStatus::Ready);
        assert_eq!(state.snake.head(), Position { x: 12, y: 12 });
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.game_speed_ms, 200);
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn plain_move_drops_the_tail() {
        let mut state = playing_state(2);
        let mut store = MemoryHighScoreStore::default();
        // Keep the food out of the snake's path.
        state.food = Position { x: 0, y: 0 };

        state.tick(&mut store);

        let body: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![
                Position { x: 12, y: 11 },
                Position { x: 12, y: 12 },
                Position { x: 12, y: 13 },
            ]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.foods_eaten, 0);
    }

    #[test]
    fn eating_food_grows_scores_and_respawns_food() {
        let mut state = playing_state(3);
        let mut store = MemoryHighScoreStore::default();
        state.food = Position { x: 12, y: 11 };

        state.tick(&mut store);

        assert_eq!(state.snake.head(), Position { x: 12, y: 11 });
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.foods_eaten, 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.level, 1);
        assert_ne!(state.food, Position { x: 12, y: 11 });
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn fifth_food_levels_up_speeds_up_and_doubles_points() {
        let mut state = playing_state(4);
        let mut store = MemoryHighScoreStore::default();
        state.foods_eaten = 4;
        state.score = 40;
        state.food = Position { x: 12, y: 11 };

        state.tick(&mut store);

        assert_eq!(state.foods_eaten, 5);
        assert_eq!(state.level, 2);
        assert_eq!(state.game_speed_ms, 185);
        // The food that crosses the threshold already pays level-2 points.
        assert_eq!(state.score, 60);
    }

    #[test]
    fn wall_collision_ends_the_game_and_persists_the_record() {
        let mut state = playing_state(5);
        let mut store = MemoryHighScoreStore::default();
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 5 }]);
        state.direction = Direction::Left;
        state.next_direction = Direction::Left;
        state.score = 70;
        state.foods_eaten = 7;
        state.level = 2;

        state.tick(&mut store);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 70);
        assert_eq!(store.stored, 70);
        // Everything besides status and high score stays put.
        assert_eq!(state.score, 70);
        assert_eq!(state.foods_eaten, 7);
        assert_eq!(state.level, 2);
        assert_eq!(state.snake.head(), Position { x: 0, y: 5 });
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn collision_tick_leaves_snake_and_direction_untouched() {
        let mut state = playing_state(14);
        let mut store = MemoryHighScoreStore::default();
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 5 }, Position { x: 1, y: 5 }]);
        state.direction = Direction::Left;
        state.next_direction = Direction::Left;

        state.tick(&mut store);

        assert_eq!(state.status, GameStatus::GameOver);
        // The fatal step is never committed: no out-of-bounds head, no
        // extra segment, same direction.
        let body: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(body, vec![Position { x: 0, y: 5 }, Position { x: 1, y: 5 }]);
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn fatal_buffered_direction_is_not_committed() {
        let mut state = playing_state(15);
        let mut store = MemoryHighScoreStore::default();
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 5 }, Position { x: 0, y: 6 }]);
        state.direction = Direction::Up;
        state.next_direction = Direction::Up;

        state.apply_input(GameInput::Direction(Direction::Left));
        state.tick(&mut store);

        assert_eq!(state.status, GameStatus::GameOver);
        // The buffered turn killed the snake before ever becoming the
        // committed direction.
        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.snake.head(), Position { x: 0, y: 5 });
    }

    #[test]
    fn lower_score_does_not_touch_the_stored_record() {
        let mut state = GameState::new_with_seed(GameRules::default(), 100, 6);
        state.status = GameStatus::Playing;
        let mut store = MemoryHighScoreStore { stored: 100 };
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 5 }]);
        state.direction = Direction::Left;
        state.next_direction = Direction::Left;
        state.score = 30;

        state.tick(&mut store);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 100);
        assert_eq!(store.stored, 100);
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut state = playing_state(7);
        let mut store = MemoryHighScoreStore::default();
        // Heading left into a C-shaped body closes the loop onto (1, 2).
        state.snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 1 },
        ]);
        state.direction = Direction::Left;
        state.next_direction = Direction::Left;
        state.food = Position { x: 20, y: 20 };

        state.tick(&mut store);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.head(), Position { x: 2, y: 2 });
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn reversal_intent_is_rejected_at_intent_time() {
        let mut state = playing_state(8);
        let mut store = MemoryHighScoreStore::default();
        state.snake = Snake::from_segments(vec![
            Position { x: 10, y: 10 },
            Position { x: 11, y: 10 },
            Position { x: 12, y: 10 },
        ]);
        state.direction = Direction::Left;
        state.next_direction = Direction::Left;
        state.food = Position { x: 0, y: 0 };

        state.apply_input(GameInput::Direction(Direction::Right));
        assert_eq!(state.next_direction, Direction::Left);

        state.tick(&mut store);
        assert_eq!(state.direction, Direction::Left);
        assert_eq!(state.snake.head(), Position { x: 9, y: 10 });
    }

    #[test]
    fn between_tick_intents_coalesce_to_the_last_legal_one() {
        let mut state = playing_state(9);
        let mut store = MemoryHighScoreStore::default();
        state.food = Position { x: 0, y: 0 };

        // Committed direction is Up; Left then Right both legal, Right wins.
        state.apply_input(GameInput::Direction(Direction::Left));
        state.apply_input(GameInput::Direction(Direction::Right));
        state.tick(&mut store);

        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position { x: 13, y: 12 });
    }

    #[test]
    fn pause_toggles_and_paused_ticks_are_no_ops() {
        let mut state = GameState::new_with_seed(GameRules::default(), 0, 10);
        let mut store = MemoryHighScoreStore::default();

        state.apply_input(GameInput::TogglePauseOrStart);
        assert_eq!(state.status, GameStatus::Playing);

        state.apply_input(GameInput::TogglePauseOrStart);
        assert_eq!(state.status, GameStatus::Paused);

        let head_before = state.snake.head();
        state.tick(&mut store);
        assert_eq!(state.snake.head(), head_before);

        state.apply_input(GameInput::TogglePauseOrStart);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn direction_intent_buffered_while_paused_applies_on_resume() {
        let mut state = playing_state(11);
        let mut store = MemoryHighScoreStore::default();
        state.food = Position { x: 0, y: 0 };

        state.apply_input(GameInput::TogglePauseOrStart);
        state.apply_input(GameInput::Direction(Direction::Left));
        state.apply_input(GameInput::TogglePauseOrStart);
        state.tick(&mut store);

        assert_eq!(state.direction, Direction::Left);
        assert_eq!(state.snake.head(), Position { x: 11, y: 12 });
    }

    #[test]
    fn toggle_does_not_leave_game_over() {
        let mut state = playing_state(12);
        state.status = GameStatus::GameOver;

        state.apply_input(GameInput::TogglePauseOrStart);

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn restart_resets_everything_but_the_high_score() {
        let mut state = playing_state(13);
        state.score = 90;
        state.high_score = 90;
        state.level = 3;
        state.foods_eaten = 12;
        state.game_speed_ms = 170;
        state.status = GameStatus::GameOver;

        state.apply_input(GameInput::Restart);

        assert_eq!(state.status, GameStatus::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.foods_eaten, 0);
        assert_eq!(state.game_speed_ms, 200);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.high_score, 90);

        // Restart from Ready is idempotent.
        state.apply_input(GameInput::Restart);
        assert_eq!(state.status, GameStatus::Ready);
    }
}
