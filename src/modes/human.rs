use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::info;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState, Phase, StepResult};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, TerminalSession};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game ended and the player acknowledged the game over screen
    Finished { score: u32 },
    /// The player asked to quit
    Quit,
}

impl Outcome {
    /// Line printed to stdout once the terminal is restored
    pub fn exit_message(&self) -> Option<String> {
        match self {
            Outcome::Finished { score } => Some(format!("Final Score: {}", score)),
            Outcome::Quit => None,
        }
    }
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    /// What is on screen: the last state that survived its tick
    last_frame: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            last_frame: state.clone(),
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending_direction: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play one game in `session`, returning once the player confirms the
    /// game over screen or quits.
    pub async fn run(&mut self, session: &mut TerminalSession) -> Result<Outcome> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "game started: board {}x{} blocks, head at ({}, {})",
            self.state.board.columns(),
            self.state.board.rows(),
            self.state.snake.head().x,
            self.state.snake.head().y
        );

        self.draw(session)?;
        tick_timer.reset();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(outcome) = self.handle_event(event) {
                                return Ok(outcome);
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => return Ok(Outcome::Quit),
                    }
                }

                // Game logic tick, rate limited by the interval
                _ = tick_timer.tick(), if self.state.is_alive => {
                    self.update_game();
                    self.draw(session)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    return Ok(Outcome::Quit);
                }
            }
        }
    }

    /// Apply one key event. Returns the outcome once the session is over.
    fn handle_event(&mut self, event: Event) -> Option<Outcome> {
        let Event::Key(key) = event else {
            return None;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match (self.input_handler.handle_key_event(key), self.state.phase()) {
            (KeyAction::Quit, _) => {
                info!("quit requested, score {}", self.state.score);
                Some(Outcome::Quit)
            }
            (KeyAction::GameAction(Action::Move(dir)), Phase::Running) => {
                // Last key before the tick wins
                self.pending_direction = Some(dir);
                None
            }
            (KeyAction::Confirm, Phase::GameOver) => Some(Outcome::Finished {
                score: self.state.score,
            }),
            _ => None,
        }
    }

    fn update_game(&mut self) -> StepResult {
        let action = self
            .pending_direction
            .take()
            .map(Action::from)
            .unwrap_or(Action::Continue);

        let result = self.engine.step(&mut self.state, action);

        if result.game_over {
            // Keep the last good frame under the game over overlay
            self.last_frame.is_alive = false;
            info!(
                "game over: {:?} at ({}, {}), score {}, {} steps",
                result.info.collision,
                self.state.snake.head().x,
                self.state.snake.head().y,
                result.score,
                self.state.steps
            );
        } else {
            self.last_frame = self.state.clone();
        }

        result
    }

    fn draw(&self, session: &mut TerminalSession) -> Result<()> {
        session.draw(|frame| self.renderer.render(frame, &self.last_frame))
    }
}
