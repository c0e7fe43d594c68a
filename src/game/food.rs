//! Food placement

use rand::Rng;

use super::state::{Board, Cell};

/// Pick a uniformly random board cell that is not part of the snake.
///
/// Retries until a free cell comes up, so this never returns when the snake
/// covers the whole board. Boards are always far larger than a snake gets in
/// practice.
pub fn place<R: Rng + ?Sized>(board: &Board, snake: &[Cell], rng: &mut R) -> Cell {
    loop {
        let column = rng.gen_range(0..board.columns());
        let row = rng.gen_range(0..board.rows());
        let cell = board.cell_at(column, row);

        if !snake.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_is_aligned_and_on_board() {
        let board = Board::new(640, 480, 20);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let food = place(&board, &[], &mut rng);
            assert!(board.contains(food));
            assert_eq!(food.x % 20, 0);
            assert_eq!(food.y % 20, 0);
        }
    }

    #[test]
    fn test_food_avoids_snake() {
        let board = Board::new(60, 40, 20);
        let mut rng = StdRng::seed_from_u64(3);

        // Everything but (40, 20) is taken
        let snake: Vec<Cell> = (0..3)
            .flat_map(|c| (0..2).map(move |r| (c, r)))
            .filter(|&(c, r)| (c, r) != (2, 1))
            .map(|(c, r)| board.cell_at(c, r))
            .collect();

        for _ in 0..20 {
            assert_eq!(place(&board, &snake, &mut rng), Cell::new(40, 20));
        }
    }

    #[test]
    fn test_food_reaches_last_row_and_column() {
        let board = Board::new(40, 40, 20);
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(place(&board, &[], &mut rng));
        }
        assert_eq!(seen.len(), (board.columns() * board.rows()) as usize);
    }
}
