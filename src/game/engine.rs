use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    action::{Action, Direction},
    collision,
    config::GameConfig,
    food,
    state::{Cell, CollisionType, GameState, Snake},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has ended
    pub game_over: bool,
    /// Score after the step
    pub score: u32,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state: head at (width/2, height/4) moving
    /// right, body trailing to the left.
    pub fn reset(&mut self) -> GameState {
        let board = self.config.board();
        let block = board.block;
        let head = Cell::new(
            (board.width / 2).div_euclid(block) * block,
            (board.height / 4).div_euclid(block) * block,
        );

        let snake = Snake::new(
            head,
            Direction::Right,
            self.config.initial_snake_length,
            block,
        );

        let food = food::place(&board, &snake.body, &mut self.rng);

        GameState::new(snake, food, board)
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                game_over: true,
                score: state.score,
                info: StepInfo {
                    ate_food: false,
                    collision: None,
                },
            };
        }

        let direction = match action {
            Action::Move(direction) => direction,
            Action::Continue => state.snake.direction,
        };

        let new_head = state.snake.advance(direction, state.board.block);
        state.steps += 1;

        // A fatal move leaves the body as it is: no tail pop, no food check
        if let Some(collision) =
            collision::detect(new_head, &state.board, state.snake.body_segments())
        {
            state.is_alive = false;

            return StepResult {
                game_over: true,
                score: state.score,
                info: StepInfo {
                    ate_food: false,
                    collision: Some(collision),
                },
            };
        }

        let ate_food = new_head == state.food;

        if ate_food {
            state.snake.grow();
            state.score += 1;
            state.food = food::place(&state.board, &state.snake.body, &mut self.rng);
            debug!(
                "food eaten at ({}, {}), score {}, next food at ({}, {})",
                new_head.x, new_head.y, state.score, state.food.x, state.food.y
            );
        } else {
            state.snake.shrink();
        }

        StepResult {
            game_over: false,
            score: state.score,
            info: StepInfo {
                ate_food,
                collision: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Board;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::seeded(42))
    }

    fn board() -> Board {
        GameConfig::default().board()
    }

    #[test]
    fn test_reset() {
        let mut engine = engine();
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(
            state.snake.body,
            vec![Cell::new(320, 120), Cell::new(300, 120), Cell::new(280, 120)]
        );
        assert_eq!(state.snake.direction, Direction::Right);
        assert!(!state.is_occupied_by_snake(state.food));
        assert!(state.board.contains(state.food));
    }

    #[test]
    fn test_seeded_resets_agree() {
        let first = GameEngine::new(GameConfig::seeded(9)).reset();
        let second = GameEngine::new(GameConfig::seeded(9)).reset();
        assert_eq!(first.food, second.food);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.food = Cell::new(0, 0);

        let result = engine.step(&mut state, Action::Continue);

        assert!(!result.game_over);
        assert!(!result.info.ate_food);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), Cell::new(340, 120));
        assert_eq!(state.snake.len(), 3);
        assert!(!state.snake.occupies(Cell::new(280, 120)));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = engine();
        let mut state = engine.reset();

        // Place food directly in front of snake
        state.food = state.snake.head().stepped(Direction::Right, 20);
        let initial_length = state.snake.len();
        let initial_tail = state.snake.tail();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert_eq!(result.score, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert_eq!(state.snake.tail(), initial_tail);
        assert!(!state.is_occupied_by_snake(state.food));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine();
        let mut state = GameState::new(
            Snake::new(Cell::new(0, 100), Direction::Left, 3, 20),
            Cell::new(300, 300),
            board(),
        );
        state.score = 4;

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.game_over);
        assert_eq!(result.score, 4);
        assert!(!state.is_alive);
        assert_eq!(result.info.collision, Some(CollisionType::Wall));
        // Fatal tick keeps the inserted head and skips the tail pop
        assert_eq!(state.snake.head(), Cell::new(-20, 100));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();

        // Body: (100,100), (80,100), (60,100), (40,100)
        let snake = Snake::new(Cell::new(100, 100), Direction::Right, 4, 20);
        let mut state = GameState::new(snake, Cell::new(400, 400), board());

        engine.step(&mut state, Action::Continue);
        engine.step(&mut state, Action::Move(Direction::Down));
        engine.step(&mut state, Action::Move(Direction::Left));
        // Up lands on (100,100), still part of the body
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.game_over);
        assert_eq!(result.info.collision, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_reversal_is_allowed_and_fatal() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.food = Cell::new(0, 0);

        let result = engine.step(&mut state, Action::Move(Direction::Left));

        assert!(result.game_over);
        assert_eq!(state.snake.direction, Direction::Left);
        assert_eq!(result.info.collision, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.is_alive = false;
        let before = state.clone();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.game_over);
        assert_eq!(state, before);
    }

    #[test]
    fn test_length_and_score_invariants_over_many_ticks() {
        let mut engine = engine();
        let mut state = engine.reset();
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        for tick in 0..400 {
            let length_before = state.snake.len();
            let score_before = state.score;
            let action = if tick % 7 == 0 {
                Action::Move(turns[(tick / 7) % turns.len()])
            } else {
                Action::Continue
            };

            let result = engine.step(&mut state, action);
            if result.game_over {
                assert_eq!(result.score, score_before);
                break;
            }

            if result.info.ate_food {
                assert_eq!(state.snake.len(), length_before + 1);
                assert_eq!(state.score, score_before + 1);
            } else {
                assert_eq!(state.snake.len(), length_before);
                assert_eq!(state.score, score_before);
            }
            assert!(!state.is_occupied_by_snake(state.food));
        }
    }
}
