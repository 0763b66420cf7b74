use std::io;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use liblife::{Game, grid::Grid};
use rand::{SeedableRng, rngs::StdRng};
use renderer::Renderer;
use tracing::{debug, error, info};

mod cli;
mod renderer;
mod signal;
mod ticker;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let seed = cli.seed();
    let mut rng = StdRng::seed_from_u64(seed);

    let grid = Grid::new_random(cli.width, cli.height, cli.density, &mut rng)
        .context("Creating the starting grid")?;

    info!(
        width = cli.width,
        height = cli.height,
        density = cli.density,
        interval_ms = cli.interval_ms,
        color_policy = ?cli.color_policy,
        seed,
        alive = grid.count_alive(),
        "Starting simulation"
    );
    debug!("Starting grid:\n{grid}");

    let mut game = Game::new(grid, cli.color_policy.into(), rng);
    let mut stop_receiver = signal::spawn_listener();

    let mut renderer = Renderer::new(io::stdout());
    if let Err(err) = renderer.clear_screen() {
        error!(?err, "Terminal output closed");
        return Ok(());
    }

    match ticker::run(&mut game, &mut renderer, cli.interval(), &mut stop_receiver) {
        Ok(generations) => {
            if let Err(err) = renderer.finish(game.grid()) {
                error!(?err, "Couldn't move the cursor below the grid");
            }

            println!("- Interrupted, exiting");
            info!(generations, "Simulation stopped");
        }
        // Nowhere left to draw, so there's nothing more to do than stop quietly.
        Err(err) => error!(?err, generation = game.generation(), "Terminal output closed"),
    }

    Ok(())
}

/// Logs go to stderr so they never end up in the middle of the board. Only errors are shown unless
/// `RUST_LOG` asks for more.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
