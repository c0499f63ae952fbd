use seabattle::{
    candidate_placements, fleet_lengths, generate, BattleshipError, Cell, Fleet, GameConfig,
    GameSession, Grid, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn generate_default(seed: u64) -> (Grid, Fleet) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..16 {
        if let Ok(field) = generate(&mut rng, 10, 4) {
            return field;
        }
    }
    panic!("no field generated for seed {}", seed);
}

fn touching(grid: &Grid, a: &Ship, b: &Ship) -> bool {
    a.cells().iter().any(|&i| {
        b.cells().iter().any(|&j| {
            let (ra, ca) = grid.coords(i);
            let (rb, cb) = grid.coords(j);
            ra.abs_diff(rb) <= 1 && ca.abs_diff(cb) <= 1
        })
    })
}

#[test]
fn test_default_fleet_composition() {
    let (grid, fleet) = generate_default(7);
    let mut lengths: Vec<usize> = fleet.ships().iter().map(Ship::len).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![1, 1, 1, 1, 2, 2, 2, 3, 3, 4]);
    assert_eq!(fleet.deck_count(), 20);
    assert_eq!(grid.count(Cell::Ship), 20);
    assert_eq!(grid.count(Cell::Water), 80);
}

#[test]
fn test_ships_are_straight_and_apart() {
    for seed in 0..20 {
        let (grid, fleet) = generate_default(seed);
        for ship in fleet.ships() {
            let rows: Vec<usize> = ship.cells().iter().map(|&i| grid.coords(i).0).collect();
            let cols: Vec<usize> = ship.cells().iter().map(|&i| grid.coords(i).1).collect();
            let horizontal = rows.iter().all(|&r| r == rows[0]);
            let vertical = cols.iter().all(|&c| c == cols[0]);
            assert!(horizontal || vertical, "bent ship {:?}", ship);
            for &i in ship.cells() {
                assert_eq!(grid.cells()[i], Cell::Ship);
            }
        }
        for (a_idx, a) in fleet.ships().iter().enumerate() {
            for b in &fleet.ships()[a_idx + 1..] {
                assert!(!touching(&grid, a, b), "{:?} touches {:?}", a, b);
            }
        }
    }
}

#[test]
fn test_same_seed_same_field() {
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    let first = generate(&mut rng1, 10, 4);
    let second = generate(&mut rng2, 10, 4);
    assert_eq!(first, second);
}

#[test]
fn test_impossible_field_fails() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        generate(&mut rng, 3, 4).unwrap_err(),
        BattleshipError::FieldGeneration {
            size: 3,
            max_deck_length: 4
        }
    );
    // a two-deck ship fills a 2x2 field together with its buffer
    assert_eq!(
        generate(&mut rng, 2, 2).unwrap_err(),
        BattleshipError::FieldGeneration {
            size: 2,
            max_deck_length: 2
        }
    );
}

#[test]
fn test_session_gives_up_after_attempts() {
    let mut rng = SmallRng::seed_from_u64(5);
    let config = GameConfig {
        size: 2,
        max_deck_length: 2,
        generation_attempts: 3,
        ..GameConfig::default()
    };
    assert!(matches!(
        GameSession::new(config, &mut rng),
        Err(BattleshipError::FieldGeneration { .. })
    ));
}

#[test]
fn test_candidate_placements_on_empty_grid() {
    let grid = Grid::new(3);
    // a single deck counts once per orientation
    assert_eq!(candidate_placements(&grid, 1).len(), 18);
    // three horizontal and three vertical runs
    assert_eq!(candidate_placements(&grid, 3).len(), 6);
    assert!(candidate_placements(&grid, 4).is_empty());
}

#[test]
fn test_candidate_placements_respect_buffer() {
    let mut grid = Grid::new(3);
    grid.set(4, Cell::Ship).unwrap();
    // every cell of a 3x3 grid touches the centre
    assert!(candidate_placements(&grid, 1).is_empty());
}

#[test]
fn test_fleet_lengths_order() {
    let lengths: Vec<usize> = fleet_lengths(4).collect();
    assert_eq!(lengths, vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
    assert_eq!(fleet_lengths(0).count(), 0);
    assert_eq!(GameConfig::default().total_ship_cells(), 20);
}
