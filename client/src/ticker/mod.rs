use std::{
    io::Write,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Context;
use liblife::Game;
use rand::Rng;
use sleeper::Sleeper;
use tracing::debug;

use crate::renderer::Renderer;

pub mod sleeper;

/// Decides, once per generation, whether the simulation loop should end.
pub trait StopSignal {
    fn should_stop(&mut self) -> bool;
}

impl StopSignal for Receiver<()> {
    fn should_stop(&mut self) -> bool {
        match self.try_recv() {
            Ok(()) => true,
            // A listener that went away can't ask us to stop anymore.
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => false,
        }
    }
}

/// Draws the starting generation, then advances and redraws once per `interval` until `stop`
/// says otherwise. Returns the number of generations advanced.
pub fn run<R, W, S>(
    game: &mut Game<R>,
    renderer: &mut Renderer<W>,
    interval: Duration,
    stop: &mut S,
) -> anyhow::Result<u64>
where
    R: Rng,
    W: Write,
    S: StopSignal + ?Sized,
{
    let start_generation = game.generation();
    let mut sleeper = Sleeper::new(interval);

    let drawn_cells = renderer
        .draw(game.grid())
        .context("Drawing the starting generation")?;
    debug!(drawn_cells, alive = game.grid().count_alive(), "Drew starting generation");
    sleeper.sleep();

    while !stop.should_stop() {
        game.tick();

        let drawn_cells = renderer
            .draw(game.grid())
            .with_context(|| format!("Drawing generation {}", game.generation()))?;

        debug!(
            generation = game.generation(),
            drawn_cells,
            alive = game.grid().count_alive(),
            "Drew generation"
        );

        if !sleeper.sleep() {
            debug!(generation = game.generation(), "Generation took longer than the frame interval");
        }
    }

    Ok(game.generation() - start_generation)
}
