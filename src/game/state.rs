use super::action::Direction;

/// A block-aligned cell on the board, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one block in a direction
    pub fn stepped(&self, direction: Direction, block: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * block, dy * block)
    }
}

/// Fixed playing field. Dimensions are in pixels, cells are `block` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub block: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, block: i32) -> Self {
        Self {
            width,
            height,
            block,
        }
    }

    /// Board width in blocks
    pub fn columns(&self) -> i32 {
        self.width / self.block
    }

    /// Board height in blocks
    pub fn rows(&self) -> i32 {
        self.height / self.block
    }

    /// Cell at the given block column and row
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.block, row * self.block)
    }

    /// Block column and row of a cell
    pub fn grid_position(&self, cell: Cell) -> (i32, i32) {
        (cell.x.div_euclid(self.block), cell.y.div_euclid(self.block))
    }

    /// Check if a cell lies within `[0, columns) x [0, rows)`
    pub fn contains(&self, cell: Cell) -> bool {
        let (column, row) = self.grid_position(cell);
        column >= 0 && column < self.columns() && row >= 0 && row < self.rows()
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head, direction and length; the body
    /// trails behind the head one block per segment.
    pub fn new(head: Cell, direction: Direction, length: usize, block: i32) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * block * i, -dy * block * i))
            .collect();

        Self { body, direction }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if a cell is occupied by any segment, head included
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Push a new head one block further in `direction` and make it the
    /// current direction. The tail stays until `shrink` is called.
    pub fn advance(&mut self, direction: Direction, block: i32) -> Cell {
        self.direction = direction;
        let new_head = self.head().stepped(direction, block);
        self.body.insert(0, new_head);
        new_head
    }

    /// Keep the tail, so the length gained by `advance` stays.
    pub fn grow(&mut self) {}

    /// Drop the tail cell, undoing the length gained by `advance`.
    pub fn shrink(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop()
        } else {
            None
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Phase of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub board: Board,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Cell, board: Board) -> Self {
        Self {
            snake,
            food,
            board,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_alive {
            Phase::Running
        } else {
            Phase::GameOver
        }
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }
}
