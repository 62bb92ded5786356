use crate::config::GridSize;
use crate::rng::RandomSource;
use crate::snake::{Snake, Vector2};

/// Picks a free cell for the next food item, or `None` when the snake fills
/// the board.
///
/// Free cells are enumerated row by row (`y` outer, `x` inner) and one is
/// chosen with a single draw from `rng`, so the result is fully determined by
/// the snake, the board size and the generator state. No sample is drawn when
/// the board is full.
#[must_use]
pub fn place_food<R: RandomSource + ?Sized>(
    snake: &Snake,
    width: u16,
    height: u16,
    rng: &mut R,
) -> Option<Vector2> {
    let bounds = GridSize { width, height };
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(height) {
        for x in 0..i32::from(width) {
            let position = Vector2::new(x, y);
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let sample = rng.next_unit().clamp(0.0, 1.0);
    // Truncation is the floor for non-negative samples.
    let index = ((sample * candidates.len() as f64) as usize).min(candidates.len() - 1);
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::place_food;
    use crate::rng::Lcg;
    use crate::snake::{Snake, Vector2};

    fn top_row_snake() -> Snake {
        Snake::from_segments(vec![
            Vector2::new(0, 0),
            Vector2::new(1, 0),
            Vector2::new(2, 0),
        ])
    }

    #[test]
    fn zero_sample_picks_first_free_cell_in_row_major_order() {
        let food = place_food(&top_row_snake(), 4, 4, &mut || 0.0);

        assert_eq!(food, Some(Vector2::new(3, 0)));
    }

    #[test]
    fn sample_just_below_one_picks_last_free_cell() {
        let food = place_food(&top_row_snake(), 4, 4, &mut || 0.999_999_999);

        assert_eq!(food, Some(Vector2::new(3, 3)));
    }

    #[test]
    fn out_of_range_sample_is_clamped_to_last_candidate() {
        let food = place_food(&top_row_snake(), 4, 4, &mut || 1.0);

        assert_eq!(food, Some(Vector2::new(3, 3)));
    }

    #[test]
    fn full_board_yields_none_without_drawing() {
        let snake = Snake::from_segments(vec![
            Vector2::new(0, 0),
            Vector2::new(1, 0),
            Vector2::new(1, 1),
            Vector2::new(0, 1),
        ]);
        let mut draws = 0;

        let food = place_food(&snake, 2, 2, &mut || {
            draws += 1;
            0.5
        });

        assert_eq!(food, None);
        assert_eq!(draws, 0);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let snake = Snake::from_segments(vec![
            Vector2::new(0, 0),
            Vector2::new(1, 0),
            Vector2::new(1, 1),
        ]);

        for sample in [0.0, 0.3, 0.75, 0.999] {
            assert_eq!(
                place_food(&snake, 2, 2, &mut || sample),
                Some(Vector2::new(0, 1))
            );
        }
    }

    #[test]
    fn same_seed_places_food_identically() {
        let snake = top_row_snake();
        let mut first = Lcg::new(99);
        let mut second = Lcg::new(99);

        for _ in 0..50 {
            assert_eq!(
                place_food(&snake, 9, 7, &mut first),
                place_food(&snake, 9, 7, &mut second)
            );
        }
    }

    proptest! {
        #[test]
        fn placed_food_is_free_and_in_bounds(
            width in 1u16..=12,
            height in 1u16..=12,
            occupied in prop::collection::vec(any::<bool>(), 144),
            seed in any::<u32>(),
        ) {
            let cells: Vec<Vector2> = (0..i32::from(height))
                .flat_map(|y| (0..i32::from(width)).map(move |x| Vector2::new(x, y)))
                .zip(occupied.iter())
                .filter(|(_, taken)| **taken)
                .map(|(cell, _)| cell)
                .collect();
            let snake = Snake::from_segments(cells);
            let free_cells = usize::from(width) * usize::from(height) - snake.len();

            let food = place_food(&snake, width, height, &mut Lcg::new(seed));

            match food {
                Some(cell) => {
                    prop_assert!(!snake.occupies(cell));
                    prop_assert!(cell.x >= 0 && cell.x < i32::from(width));
                    prop_assert!(cell.y >= 0 && cell.y < i32::from(height));
                }
                None => prop_assert_eq!(free_cells, 0),
            }
        }
    }
}
