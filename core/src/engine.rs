use serde::{Deserialize, Serialize};

use crate::*;

/// Game phase. The grid only exists while the game is still being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    Playing(LightGrid),
    Won,
}

impl Game {
    /// Derives the phase from `grid`; an already dark board starts out won.
    pub fn new(grid: LightGrid) -> Self {
        if grid.has_won() {
            Self::Won
        } else {
            Self::Playing(grid)
        }
    }

    pub fn generate(generator: impl LightsGenerator, config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(generator.generate(config)))
    }

    pub const fn has_won(&self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn grid(&self) -> Option<&LightGrid> {
        match self {
            Self::Playing(grid) => Some(grid),
            Self::Won => None,
        }
    }

    /// Flips `coords` and its neighbors, replacing the current grid with the result.
    pub fn flip_cells_around(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        let Self::Playing(grid) = self else {
            return Err(GameError::AlreadyEnded);
        };

        let next = grid.flipped_around(coords)?;
        log::trace!("flip {:?}, {} lit", coords, next.lit_count());
        *self = Self::new(next);

        Ok(if self.has_won() {
            FlipOutcome::Won
        } else {
            FlipOutcome::Flipped
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const F: bool = false;
    const T: bool = true;

    fn game(rows: &[[bool; 3]]) -> Game {
        Game::new(LightGrid::from_rows(rows).unwrap())
    }

    #[test]
    fn dark_board_is_won_immediately() {
        let game = game(&[[F; 3]; 3]);

        assert!(game.has_won());
        assert_eq!(game.grid(), None);
    }

    #[test]
    fn flip_replaces_grid_and_keeps_playing() {
        let mut game = game(&[[F, F, F], [T, T, F], [F, F, F]]);

        let outcome = game.flip_cells_around((1, 2)).unwrap();

        assert_eq!(outcome, FlipOutcome::Flipped);
        assert_eq!(
            game.grid().map(LightGrid::to_rows),
            Some(vec![vec![F, F, T], vec![T, F, T], vec![F, F, T]])
        );
    }

    #[test]
    fn clearing_last_lights_transitions_to_won() {
        let mut game = game(&[[F, T, F], [T, T, T], [F, T, F]]);

        let outcome = game.flip_cells_around((1, 1)).unwrap();

        assert_eq!(outcome, FlipOutcome::Won);
        assert_eq!(game, Game::Won);
    }

    #[test]
    fn won_game_rejects_further_flips() {
        let mut game = game(&[[T, T, F], [T, F, F], [F, F, F]]);
        assert_eq!(game.flip_cells_around((0, 0)).unwrap(), FlipOutcome::Won);

        assert_eq!(
            game.flip_cells_around((0, 0)),
            Err(GameError::AlreadyEnded)
        );
        assert!(game.has_won());
    }

    #[test]
    fn invalid_flip_keeps_current_grid() {
        let mut game = game(&[[T, F, F], [F, F, F], [F, F, F]]);
        let before = game.clone();

        assert_eq!(game.flip_cells_around((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(game, before);
    }

    #[test]
    fn snapshot_survives_flip_of_live_state() {
        let mut game = game(&[[T, F, T], [F, T, F], [T, F, T]]);
        let snapshot = game.grid().cloned().unwrap();

        game.flip_cells_around((0, 1)).unwrap();

        assert_eq!(
            snapshot.to_rows(),
            vec![vec![T, F, T], vec![F, T, F], vec![T, F, T]]
        );
        assert_ne!(game.grid(), Some(&snapshot));
    }

    #[test]
    fn generate_rejects_invalid_config() {
        let generator = RandomLightsGenerator::new(7, LitPolicy::AboveChance);
        let config = GameConfig::new_unchecked((0, 3), 0.5);

        assert_eq!(
            Game::generate(generator, config),
            Err(GameError::InvalidSize)
        );
    }
}
