use rand::Rng;

/// Color tag a cell receives the first time it comes alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl CellColor {
    pub const PALETTE: [CellColor; 7] = [
        CellColor::Red,
        CellColor::Green,
        CellColor::Yellow,
        CellColor::Blue,
        CellColor::Magenta,
        CellColor::Cyan,
        CellColor::White,
    ];

    /// Picks a palette entry uniformly at random.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

/// What happens to a cell's color when the cell dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Dead cells keep their last color, so a reborn cell comes back in the color it had before.
    #[default]
    CarryForward,

    /// Dead cells drop their color and get a freshly picked one when reborn.
    ClearOnDeath,
}

impl ColorPolicy {
    /// The color a cell ends up with after its alive state has been decided, before any new color
    /// is assigned.
    pub fn retained(self, previous: Option<CellColor>, alive: bool) -> Option<CellColor> {
        match self {
            ColorPolicy::CarryForward => previous,
            ColorPolicy::ClearOnDeath => previous.filter(|_| alive),
        }
    }
}
