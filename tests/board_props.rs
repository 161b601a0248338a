use grid_battleship::{
    AttackError, AttackOutcome, Board, GameConfig, Orientation, PlacementError, PlacementStrategy,
    RandomPlacement, ShipKind,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::with_fleet(config.board_size, config.build_fleet()).unwrap();
    RandomPlacement::new().place_fleet(&mut rng, &mut board).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_cells_point_back_at_their_ship(seed in any::<u64>()) {
        let board = random_board(seed);
        let mut occupied = 0;
        for (id, ship) in board.fleet().iter().enumerate() {
            prop_assert!(ship.is_placed());
            for (x, y) in ship.cells() {
                prop_assert_eq!(board.ship_at(x, y), Some(id));
                occupied += 1;
            }
        }
        let total = (0..board.size())
            .flat_map(|y| (0..board.size()).map(move |x| (x, y)))
            .filter(|&(x, y)| board.ship_at(x, y).is_some())
            .count();
        prop_assert_eq!(occupied, total);
        prop_assert_eq!(total, board.fleet().total_cells());
    }

    #[test]
    fn placing_over_an_occupied_cell_overlaps(seed in any::<u64>(), vertical in any::<bool>()) {
        let config = GameConfig::default();
        let mut fleet = config.build_fleet().iter().cloned().collect::<Vec<_>>();
        fleet.push(grid_battleship::Ship::new(ShipKind::Submarine));
        let mut board = Board::with_fleet(config.board_size, fleet.into_iter().collect()).unwrap();
        let extra = board.fleet().len() - 1;
        let mut rng = SmallRng::seed_from_u64(seed);
        let strategy = &mut RandomPlacement::new();
        for id in 0..extra {
            strategy.place_ship(&mut rng, &mut board, id).unwrap();
        }
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        for ship in board.fleet().iter().take(extra) {
            for (x, y) in ship.cells() {
                prop_assert_eq!(board.can_place(extra, x, y, orientation), Err(PlacementError::Overlap));
            }
        }
    }

    #[test]
    fn hit_flags_only_grow(seed in any::<u64>(), shots in 1usize..150) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut attacked = std::collections::BTreeSet::new();
        for _ in 0..shots {
            let (x, y) = (rng.random_range(0..board.size()), rng.random_range(0..board.size()));
            match board.resolve_attack(x, y) {
                Ok(_) => prop_assert!(attacked.insert((x, y))),
                Err(e) => {
                    prop_assert_eq!(e, AttackError::AlreadyAttacked { x, y });
                    prop_assert!(attacked.contains(&(x, y)));
                }
            }
            prop_assert!(attacked.iter().all(|&(ax, ay)| board.is_attacked(ax, ay)));
            prop_assert_eq!(board.attacks_made(), attacked.len());
        }
    }

    #[test]
    fn ship_sinks_exactly_when_all_cells_are_attacked(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let id = rng.random_range(0..board.fleet().len());
        let mut cells: Vec<_> = board.ship(id).unwrap().cells().collect();
        cells.shuffle(&mut rng);
        let last = cells.len() - 1;
        for (i, (x, y)) in cells.into_iter().enumerate() {
            let outcome = board.resolve_attack(x, y).unwrap();
            if i == last {
                prop_assert_eq!(outcome, AttackOutcome::Sunk(board.ship(id).unwrap().kind()));
                prop_assert!(board.ship(id).unwrap().is_destroyed());
            } else {
                prop_assert_eq!(outcome, AttackOutcome::Hit);
                prop_assert!(!board.ship(id).unwrap().is_destroyed());
            }
        }
    }
}
