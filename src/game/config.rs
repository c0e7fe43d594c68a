use std::time::Duration;

use super::state::Board;

/// Board width in pixels
pub const BOARD_WIDTH_PX: i32 = 640;
/// Board height in pixels
pub const BOARD_HEIGHT_PX: i32 = 480;
/// Edge length of one grid block in pixels
pub const BLOCK_SIZE: i32 = 20;
/// Game steps per second
pub const TICKS_PER_SECOND: u32 = 10;
/// Segments the snake starts with
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Configuration for the game
///
/// The defaults are the only supported geometry and speed; the seed is the
/// one knob exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the board in pixels
    pub width_px: i32,
    /// Height of the board in pixels
    pub height_px: i32,
    /// Size of one block in pixels
    pub block_size: i32,
    /// Fixed tick rate
    pub ticks_per_second: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Seed for food placement, `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width_px: BOARD_WIDTH_PX,
            height_px: BOARD_HEIGHT_PX,
            block_size: BLOCK_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed food seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.width_px, self.height_px, self.block_size)
    }

    /// Duration of one game tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width_px, 640);
        assert_eq!(config.height_px, 480);
        assert_eq!(config.block_size, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_board_in_blocks() {
        let board = GameConfig::default().board();
        assert_eq!(board.columns(), 32);
        assert_eq!(board.rows(), 24);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(
            GameConfig::default().tick_interval(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_seeded_config() {
        let config = GameConfig::seeded(7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.block_size, BLOCK_SIZE);
    }
}
