#[cfg(feature = "std")]
mod cli_tests {
    use std::{cell::RefCell, io::Cursor, rc::Rc};

    use grid_battleship::console::{
        parse_orientation, render_board, render_player_view, BoardEcho, ConsoleInput,
    };
    use grid_battleship::{
        Answer, Board, Fleet, FleetComposition, InputClosed, InputSource, InteractivePlacement,
        Orientation, PlacementStrategy, ScriptedInput, ShipKind,
    };
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn console_reasks_until_answer_parses() {
        let mut console = ConsoleInput::new(Cursor::new("abc\n 7 \nsideways\nV\n"), Vec::new());
        assert_eq!(console.request_int("x: "), Ok(7));
        assert_eq!(
            console.request_orientation("orientation: "),
            Ok(Orientation::Vertical)
        );
        assert_eq!(console.request_int("y: "), Err(InputClosed));

        let (_, out) = console.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("'abc' is not a number"));
        assert!(out.contains("Invalid orientation 'sideways'"));
        assert_eq!(out.matches("x: ").count(), 2);
    }

    #[test]
    fn orientation_accepts_letters_words_and_legacy_numbers() {
        assert_eq!(parse_orientation("h"), Some(Orientation::Horizontal));
        assert_eq!(parse_orientation("Vertical"), Some(Orientation::Vertical));
        assert_eq!(parse_orientation("1"), Some(Orientation::Vertical));
        assert_eq!(parse_orientation("2"), Some(Orientation::Horizontal));
        assert_eq!(parse_orientation("x"), None);
    }

    fn small_board() -> Board {
        let composition = FleetComposition::empty().with(ShipKind::Destroyer, 1);
        let mut board = Board::with_fleet(3, Fleet::build(&composition)).unwrap();
        board.place(0, 1, 1, Orientation::Horizontal).unwrap();
        board.resolve_attack(0, 0).unwrap();
        board.resolve_attack(1, 1).unwrap();
        board
    }

    #[test]
    fn render_hidden_board_shows_only_attacked_cells() {
        let board = small_board();
        let text = render_board(&board);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "      0  1  2");
        assert_eq!(lines[1], "  0   o  .  .");
        assert_eq!(lines[2], "  1   .  X  .");
        assert_eq!(lines[3], "  2   .  .  .");
        assert!(lines[4].starts_with("Legend: X=Hit"));
    }

    #[test]
    fn render_revealed_board_shows_ships() {
        let mut board = small_board();
        board.set_hidden(false);
        let text = render_board(&board);
        assert_eq!(text.lines().nth(2), Some("  1   .  X  S"));
        assert!(text.contains("S=Ship"));
    }

    #[test]
    fn player_view_lists_ship_status() {
        let own = small_board();
        let opponent = small_board();
        let text = render_player_view(&own, &opponent);
        assert!(text.starts_with("Opponent board:"));
        assert!(text.contains("Your board:"));
        assert!(text.contains("Destroyer (2): Active"));
    }

    #[test]
    fn board_is_shown_after_each_placed_ship() {
        let answers = ScriptedInput::new([
            Answer::Int(0),
            Answer::Int(0),
            Answer::Orientation(Orientation::Horizontal),
            Answer::Int(2),
            Answer::Int(0),
            Answer::Orientation(Orientation::Vertical),
        ]);
        let echo = Rc::new(RefCell::new(ScriptedInput::default()));
        let mut strategy = BoardEcho::new(InteractivePlacement::new(answers), echo.clone());
        let composition = FleetComposition::empty().with(ShipKind::Submarine, 2);
        let mut board = Board::with_fleet(3, Fleet::build(&composition)).unwrap();
        board.set_hidden(false);
        strategy
            .place_fleet(&mut SmallRng::seed_from_u64(0), &mut board)
            .unwrap();

        let shown = echo.borrow();
        assert_eq!(shown.messages().len(), 2);
        assert_eq!(shown.messages()[0].lines().nth(1), Some("  0   S  .  ."));
        assert_eq!(shown.messages()[1].lines().nth(1), Some("  0   S  .  S"));
    }
}
