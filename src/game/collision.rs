//! Collision detection for the snake head

use super::state::{Board, Cell, CollisionType};

/// Classify a collision of `head` with the board edge or the rest of the
/// body. The boundary is checked first.
pub fn detect(head: Cell, board: &Board, body_excluding_head: &[Cell]) -> Option<CollisionType> {
    if !board.contains(head) {
        return Some(CollisionType::Wall);
    }

    if body_excluding_head.contains(&head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// Whether the head has left the board or run into the body
pub fn check(head: Cell, board: &Board, body_excluding_head: &[Cell]) -> bool {
    detect(head, board, body_excluding_head).is_some()
}
