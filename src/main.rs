#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    cell_to_human, init_logging, legend, render_screen, CliPlayer, GameConfig, GameSession,
    GameStatus, Player, ShotResult, DEFAULT_FIELD_SIZE, DEFAULT_MAX_DECK_LENGTH,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Play battleship in the terminal against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_FIELD_SIZE, help = "Width and height of each field (at most 26)")]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_DECK_LENGTH, help = "Length of the longest ship")]
    max_deck_length: usize,
    #[arg(long, help = "Reveal the opponent's ships and log targeting decisions")]
    debug: bool,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let config = GameConfig {
        size: cli.size,
        max_deck_length: cli.max_deck_length,
        debug: cli.debug,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config, &mut rng)?;
    let mut player = CliPlayer::new();

    println!("\t\tWELCOME TO BATTLESHIP!\n");
    print!("{}", legend());

    let size = config.size;
    while session.status() == GameStatus::InProgress {
        print!(
            "{}",
            render_screen(session.player_grid(), session.opponent_grid(), config.debug)?
        );
        println!("\t\tTurn: #{} (player)", session.turn() + 1);

        let index = player.select_target(&mut rng, session.opponent_grid())?;
        let result = session.player_shot(index)?;
        player.handle_shot_result(session.opponent_grid(), index, result);
        match result {
            ShotResult::Hit => {
                println!("YOUR SHOT HIT, but ship is still afloat...");
                continue;
            }
            ShotResult::Sunk => {
                println!("YOU'VE SUNK THEIR BATTLESHIP!");
                if session.status() == GameStatus::Won {
                    println!("\n\t\tYOU WON!");
                }
                continue;
            }
            ShotResult::Miss => {}
        }

        println!("YOU MISSED! AI's turn...");
        println!("\t\tTurn: #{} (AI)", session.turn() + 1);
        println!("AI's turn log:");
        for (index, result) in session.opponent_turn(&mut rng)? {
            println!("{} - {}", cell_to_human(index, size), result.name());
        }
        if session.status() == GameStatus::Lost {
            println!("\n\t\tYOU LOST!");
        }
    }
    print!(
        "{}",
        render_screen(session.player_grid(), session.opponent_grid(), true)?
    );
    Ok(())
}
