use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use liblife::color::ColorPolicy;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Colorized Conway's Game of Life on a wrap-around terminal grid")]
pub struct Cli {
    /// Number of columns in the grid.
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Number of rows in the grid.
    #[arg(long, default_value_t = 30)]
    pub height: usize,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = 200)]
    pub interval_ms: u64,

    /// Probability of each cell starting out alive.
    #[arg(long, default_value_t = 0.5)]
    pub density: f64,

    /// Seed for the random generator. Defaults to the current time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// What happens to a cell's color when it dies.
    #[arg(long, value_enum, default_value_t = ColorPolicyArg::CarryForward)]
    pub color_policy: ColorPolicyArg,
}

impl Cli {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|since_epoch| since_epoch.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorPolicyArg {
    /// Reborn cells keep the color they had before dying.
    CarryForward,

    /// Reborn cells get a new random color.
    ClearOnDeath,
}

impl From<ColorPolicyArg> for ColorPolicy {
    fn from(value: ColorPolicyArg) -> Self {
        match value {
            ColorPolicyArg::CarryForward => ColorPolicy::CarryForward,
            ColorPolicyArg::ClearOnDeath => ColorPolicy::ClearOnDeath,
        }
    }
}
