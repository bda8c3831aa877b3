use crate::*;
use serde::{Deserialize, Serialize};

pub use random::*;

mod random;

pub trait LightsGenerator {
    fn generate(self, config: GameConfig) -> LightGrid;
}

/// How a cell's random draw is compared against `chance_light_starts_on`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LitPolicy {
    /// Lit when the draw is above the chance, so a higher chance means a darker board.
    #[default]
    AboveChance,
    /// Lit when the draw is below the chance, the chance is the probability of being lit.
    BelowChance,
}

impl LitPolicy {
    pub fn starts_lit(self, draw: f64, chance: f64) -> bool {
        match self {
            Self::AboveChance => draw > chance,
            Self::BelowChance => draw < chance,
        }
    }
}
