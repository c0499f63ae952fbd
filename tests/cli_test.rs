#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use seabattle::{
        cell_to_human, legend, parse_coordinate, render_screen, BattleshipError, Cell, CliPlayer,
        CoordinateError, Grid, Player,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_valid_coordinates() {
        let grid = Grid::new(10);
        assert_eq!(parse_coordinate("A3", &grid), Ok(20));
        assert_eq!(parse_coordinate("a3\n", &grid), Ok(20));
        assert_eq!(parse_coordinate("J10", &grid), Ok(99));
        assert_eq!(parse_coordinate("A1", &grid), Ok(0));
    }

    #[test]
    fn test_parse_rejections() {
        let mut grid = Grid::new(10);
        assert_eq!(parse_coordinate("", &grid), Err(CoordinateError::BadLength));
        assert_eq!(parse_coordinate("A100", &grid), Err(CoordinateError::BadLength));
        assert_eq!(parse_coordinate("33", &grid), Err(CoordinateError::BadFormat));
        assert_eq!(parse_coordinate("A", &grid), Err(CoordinateError::BadFormat));
        assert_eq!(parse_coordinate("AB", &grid), Err(CoordinateError::BadFormat));
        assert_eq!(parse_coordinate("K1", &grid), Err(CoordinateError::InvalidColumn));
        assert_eq!(parse_coordinate("A0", &grid), Err(CoordinateError::InvalidRow));
        assert_eq!(parse_coordinate("A11", &grid), Err(CoordinateError::InvalidRow));

        grid.set(20, Cell::Miss).unwrap();
        assert_eq!(parse_coordinate("A3", &grid), Err(CoordinateError::AlreadyShot));
        // intact ships are still fair game
        grid.set(21, Cell::Ship).unwrap();
        assert_eq!(parse_coordinate("B3", &grid), Ok(21));
    }

    #[test]
    fn test_read_target_retries() {
        let grid = Grid::new(10);
        let input = Cursor::new("Z9\nhello\nB2\n");
        let mut output = Vec::new();
        let mut player = CliPlayer::with_io(input, &mut output);

        assert_eq!(player.read_target(&grid).unwrap(), Some(11));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Error: Please enter valid column"));
        assert!(text.contains("Error: Please enter only one column and row such as A3"));
        assert_eq!(text.matches("Enter column and row such as A3: ").count(), 3);
    }

    #[test]
    fn test_read_target_end_of_input() {
        let grid = Grid::new(10);
        let mut player = CliPlayer::with_io(Cursor::new("A0\n"), Vec::new());
        assert_eq!(player.read_target(&grid).unwrap(), None);

        let mut rng = SmallRng::seed_from_u64(1);
        assert!(player.select_target(&mut rng, &grid).is_err());
    }

    #[test]
    fn test_render_hides_opponent_ships() {
        let mut player = Grid::new(2);
        player.set(0, Cell::Ship).unwrap();
        let mut opponent = Grid::new(2);
        opponent.set(3, Cell::Ship).unwrap();
        opponent.set(0, Cell::Miss).unwrap();

        let hidden = render_screen(&player, &opponent, false).unwrap();
        assert_eq!(
            hidden,
            "    A B     A B \n1 ) S . 1 ) x . \n2 ) . . 2 ) . . \n    ^ Your field ^\n"
        );
        let shown = render_screen(&player, &opponent, true).unwrap();
        assert!(shown.contains("2 ) . . 2 ) . S \n"));
    }

    #[test]
    fn test_render_size_errors() {
        assert_eq!(
            render_screen(&Grid::new(2), &Grid::new(3), false),
            Err(BattleshipError::GridSizeMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            render_screen(&Grid::new(27), &Grid::new(27), false),
            Err(BattleshipError::InvalidFieldSize(27))
        );
    }

    #[test]
    fn test_human_readable_cells() {
        assert_eq!(cell_to_human(0, 10), "A1");
        assert_eq!(cell_to_human(99, 10), "J10");
        assert_eq!(cell_to_human(27, 10), "H3");
        assert!(legend().contains("F - SUNKEN"));
        assert!(legend().contains("@ - DEBRIS"));
    }
}
