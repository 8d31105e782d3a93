use rand::Rng;

use crate::snake::{Position, Snake};

/// Picks a uniformly random cell not occupied by the snake.
///
/// Rejection-samples the board until a free cell turns up. Termination
/// assumes the board has more cells than the snake has segments, which
/// holds for every reachable state on the 24×24 board.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board_size: i32, snake: &Snake) -> Position {
    loop {
        let candidate = Position {
            x: rng.gen_range(0..board_size),
            y: rng.gen_range(0..board_size),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::snake::{Position, Snake};

    use super::spawn;

    #[test]
    fn food_never_spawns_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
            Position { x: 3, y: 0 },
        ]);

        for _ in 0..500 {
            let food = spawn(&mut rng, 4, &snake);
            assert!(!snake.occupies(food));
            assert!(food.is_within_board(4));
        }
    }

    #[test]
    fn food_spawns_in_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
        ]);

        let food = spawn(&mut rng, 2, &snake);
        assert_eq!(food, Position { x: 0, y: 1 });
    }
}
