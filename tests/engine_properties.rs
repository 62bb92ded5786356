use grid_snake::config::Config;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::Direction;
use grid_snake::rng::Lcg;
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn config() -> impl Strategy<Value = Config> {
    (3u16..=16, 3u16..=16, direction()).prop_flat_map(|(width, height, start_direction)| {
        (1u16..=width / 2 + 1).prop_map(move |start_length| Config {
            width,
            height,
            start_length,
            start_direction,
        })
    })
}

/// Drives a game with random intents and returns every snapshot visited.
fn play(config: Config, seed: u32, intents: &[Option<Direction>]) -> Vec<GameState> {
    let mut rng = Lcg::new(seed);
    let mut state = GameState::new(config, &mut rng);
    let mut history = vec![state.clone()];

    for intent in intents {
        state = state.set_direction(*intent).step(&mut rng);
        history.push(state.clone());
    }

    history
}

proptest! {
    #[test]
    fn initial_state_is_valid(config in config(), seed in any::<u32>()) {
        prop_assume!(config.validate().is_ok());
        let state = GameState::new(config, &mut Lcg::new(seed));

        prop_assert_eq!(state.snake.len(), usize::from(config.start_length));
        prop_assert!(state.snake.segments().all(|cell| cell.is_within_bounds(config.bounds())));
        let food = state.food.expect("a validated board always has a free cell");
        prop_assert!(!state.snake.occupies(food));
    }

    #[test]
    fn running_snapshots_keep_invariants(
        config in config(),
        seed in any::<u32>(),
        intents in prop::collection::vec(prop::option::of(direction()), 1..200),
    ) {
        prop_assume!(config.validate().is_ok());
        let history = play(config, seed, &intents);

        for pair in history.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if before.is_terminal() {
                prop_assert_eq!(before, after);
                continue;
            }

            let head = before.snake.head().expect("snake is never empty");
            match after.status {
                GameStatus::Running => {
                    prop_assert_eq!(after.snake.head(), Some(head + after.direction.vector()));

                    if after.score == before.score + 1 {
                        prop_assert_eq!(after.snake.len(), before.snake.len() + 1);
                        let food = after.food.expect("running game has food");
                        prop_assert!(!after.snake.occupies(food));
                    } else {
                        prop_assert_eq!(after.score, before.score);
                        prop_assert_eq!(after.snake.len(), before.snake.len());
                        prop_assert_eq!(after.food, before.food);
                    }
                }
                GameStatus::GameOver => {
                    prop_assert_eq!(&after.snake, &before.snake);
                    prop_assert_eq!(after.score, before.score);
                }
                GameStatus::Won => {
                    prop_assert_eq!(after.snake.len(), config.bounds().total_cells());
                    prop_assert_eq!(after.food, None);
                }
            }

            let cells: Vec<_> = after.snake.segments().copied().collect();
            for (index, cell) in cells.iter().enumerate() {
                prop_assert!(cell.is_within_bounds(config.bounds()));
                prop_assert!(!cells[index + 1..].contains(cell));
            }
        }
    }

    #[test]
    fn reversal_never_changes_pending_direction(
        config in config(),
        seed in any::<u32>(),
        turn in direction(),
    ) {
        prop_assume!(config.validate().is_ok());
        let state = GameState::new(config, &mut Lcg::new(seed)).set_direction(Some(turn));

        let reversed = state.set_direction(Some(state.direction.opposite()));

        prop_assert_eq!(reversed.pending_direction, state.pending_direction);
    }

    #[test]
    fn same_seed_same_game(
        config in config(),
        seed in any::<u32>(),
        intents in prop::collection::vec(prop::option::of(direction()), 1..100),
    ) {
        prop_assume!(config.validate().is_ok());

        prop_assert_eq!(play(config, seed, &intents), play(config, seed, &intents));
    }
}
