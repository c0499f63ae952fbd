use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{simulate, GameConfig};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 4 {
        eprintln!("Usage: {} <seed> [<size> <max_deck_length>]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut config = GameConfig {
        generation_attempts: 8,
        ..GameConfig::default()
    };
    if args.len() == 4 {
        config.size = args[2].parse()?;
        config.max_deck_length = args[3].parse()?;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let report = simulate(config, &mut rng)?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
