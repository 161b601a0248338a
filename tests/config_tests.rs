use grid_battleship::{
    ConfigurationError, Fleet, FleetComposition, GameConfig, PlacementError, SetupError, ShipKind,
    DEFAULT_BOARD_SIZE,
};

#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
    assert_eq!(config.fleet.total_ships(), 10);
    assert_eq!(config.fleet.total_cells(), 20);
    config.validate().unwrap();
}

#[test]
fn fleet_builds_in_enumeration_order() {
    let composition = FleetComposition::from_counts([2, 1, 0, 1]);
    let kinds: Vec<_> = Fleet::build(&composition).iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ShipKind::Submarine,
            ShipKind::Submarine,
            ShipKind::Destroyer,
            ShipKind::Carrier
        ]
    );
    assert!(Fleet::build(&composition).iter().all(|s| !s.is_placed()));
}

#[test]
fn parse_fleet_string() {
    let composition: FleetComposition = "carrier=1, Submarine=2,3=1".parse().unwrap();
    assert_eq!(composition.count(ShipKind::Submarine), 2);
    assert_eq!(composition.count(ShipKind::Destroyer), 0);
    assert_eq!(composition.count(ShipKind::Cruiser), 1);
    assert_eq!(composition.count(ShipKind::Carrier), 1);
    assert_eq!(composition.to_string(), "submarine=2,cruiser=1,carrier=1");
    assert_eq!(composition.largest_kind(), Some(ShipKind::Carrier));
}

#[test]
fn repeated_kinds_add_up() {
    let composition: FleetComposition = "destroyer=1,destroyer=2".parse().unwrap();
    assert_eq!(composition.count(ShipKind::Destroyer), 3);
}

#[test]
fn parse_rejects_bad_fleet_strings() {
    assert_eq!(
        "battleship=1".parse::<FleetComposition>(),
        Err(ConfigurationError::UnknownShipKind("battleship".to_string()))
    );
    assert_eq!(
        "carrier=-1".parse::<FleetComposition>(),
        Err(ConfigurationError::InvalidCount("-1".to_string()))
    );
    assert_eq!(
        "carrier".parse::<FleetComposition>(),
        Err(ConfigurationError::MalformedFleet("carrier".to_string()))
    );
    assert_eq!(
        "carrier=0".parse::<FleetComposition>(),
        Err(ConfigurationError::EmptyFleet)
    );
}

#[test]
fn from_raw_rejects_non_positive_sizes() {
    assert_eq!(
        GameConfig::from_raw(0, "submarine=1"),
        Err(ConfigurationError::InvalidBoardSize(0))
    );
    assert_eq!(
        GameConfig::from_raw(-4, "submarine=1"),
        Err(ConfigurationError::InvalidBoardSize(-4))
    );
    let config = GameConfig::from_raw(6, "submarine=1").unwrap();
    assert_eq!(config.board_size, 6);
}

#[test]
fn validate_rejects_ship_longer_than_board() {
    let config = GameConfig::new(3, FleetComposition::empty().with(ShipKind::Carrier, 1));
    assert_eq!(
        config.validate(),
        Err(SetupError::Fleet(PlacementError::ShipTooLarge {
            kind: ShipKind::Carrier,
            board_size: 3
        }))
    );
}

#[test]
fn validate_rejects_empty_fleet_and_zero_size() {
    let empty = GameConfig::new(5, FleetComposition::empty());
    assert_eq!(
        empty.validate(),
        Err(SetupError::Configuration(ConfigurationError::EmptyFleet))
    );
    let zero = GameConfig::new(0, FleetComposition::default());
    assert_eq!(
        zero.validate(),
        Err(SetupError::Configuration(ConfigurationError::InvalidBoardSize(0)))
    );
}

#[test]
fn parse_rejects_counts_that_overflow() {
    assert_eq!(
        "submarine=18446744073709551615,destroyer=1".parse::<FleetComposition>(),
        Ok(FleetComposition::empty()
            .with(ShipKind::Submarine, usize::MAX)
            .with(ShipKind::Destroyer, 1))
    );
    assert_eq!(
        "destroyer=18446744073709551615,destroyer=1".parse::<FleetComposition>(),
        Err(ConfigurationError::InvalidCount("destroyer=1".to_string()))
    );
    let huge = FleetComposition::from_counts([usize::MAX, 1, 1, usize::MAX]);
    assert_eq!(huge.total_ships(), usize::MAX);
    assert_eq!(huge.total_cells(), usize::MAX);
}

#[test]
fn validate_rejects_fleet_larger_than_board_without_building_it() {
    let config = GameConfig::from_raw(10, "submarine=10000000000").unwrap();
    assert_eq!(
        config.validate(),
        Err(SetupError::Configuration(ConfigurationError::FleetTooLarge {
            cells: 10_000_000_000,
            capacity: 100
        }))
    );

    let crowded = GameConfig::new(2, FleetComposition::empty().with(ShipKind::Submarine, 5));
    assert_eq!(
        crowded.validate(),
        Err(SetupError::Configuration(ConfigurationError::FleetTooLarge {
            cells: 5,
            capacity: 4
        }))
    );

    let long = GameConfig::new(
        3,
        FleetComposition::empty()
            .with(ShipKind::Submarine, usize::MAX)
            .with(ShipKind::Carrier, 1),
    );
    assert_eq!(
        long.validate(),
        Err(SetupError::Fleet(PlacementError::ShipTooLarge {
            kind: ShipKind::Carrier,
            board_size: 3
        }))
    );

    let full = GameConfig::new(2, FleetComposition::empty().with(ShipKind::Submarine, 4));
    full.validate().unwrap();
}
