use super::*;

/// Generation strategy that lights every cell independently, one uniform draw per cell in row-major
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLightsGenerator {
    seed: u64,
    policy: LitPolicy,
}

impl RandomLightsGenerator {
    pub fn new(seed: u64, policy: LitPolicy) -> Self {
        Self { seed, policy }
    }
}

impl LightsGenerator for RandomLightsGenerator {
    fn generate(self, config: GameConfig) -> LightGrid {
        use rand::prelude::*;

        let size = (config.nrows().max(1), config.ncols().max(1));
        if size != config.size {
            log::warn!(
                "Board size {:?} has an empty axis, generated {:?} instead",
                config.size,
                size
            );
        }

        let chance = config.chance_light_starts_on;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let lights = Array2::from_shape_simple_fn(size.to_nd_index(), || {
            self.policy.starts_lit(rng.random::<f64>(), chance)
        });

        let grid = LightGrid { lights };
        log::debug!(
            "Generated {}x{} board with {} of {} lights on",
            size.0,
            size.1,
            grid.lit_count(),
            grid.total_cells()
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, policy: LitPolicy, size: Coord2, chance: f64) -> LightGrid {
        let config = GameConfig::new(size, chance).unwrap();
        RandomLightsGenerator::new(seed, policy).generate(config)
    }

    #[test]
    fn generated_board_matches_configured_shape() {
        for nrows in 1..=6 {
            for ncols in 1..=6 {
                let grid = generate(42, LitPolicy::AboveChance, (nrows, ncols), 0.5);
                let rows = grid.to_rows();

                assert_eq!(rows.len(), usize::from(nrows));
                assert!(rows.iter().all(|row| row.len() == usize::from(ncols)));
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let a = generate(1234, LitPolicy::AboveChance, (7, 9), 0.5);
        let b = generate(1234, LitPolicy::AboveChance, (7, 9), 0.5);

        assert_eq!(a, b);
    }

    #[test]
    fn above_chance_full_chance_is_dark() {
        for seed in 0..16 {
            let grid = generate(seed, LitPolicy::AboveChance, (5, 5), 1.0);
            assert!(grid.has_won());
        }
    }

    #[test]
    fn above_chance_zero_chance_lights_everything() {
        let grid = generate(3, LitPolicy::AboveChance, (10, 10), 0.0);

        assert_eq!(grid.lit_count(), grid.total_cells());
    }

    #[test]
    fn below_chance_follows_the_name() {
        for seed in 0..16 {
            let dark = generate(seed, LitPolicy::BelowChance, (5, 5), 0.0);
            assert!(dark.has_won());

            let lit = generate(seed, LitPolicy::BelowChance, (5, 5), 1.0);
            assert_eq!(lit.lit_count(), lit.total_cells());
        }
    }

    #[test]
    fn policies_are_complementary_for_the_same_draws() {
        let above = generate(99, LitPolicy::AboveChance, (8, 8), 0.5);
        let below = generate(99, LitPolicy::BelowChance, (8, 8), 0.5);

        // only a draw of exactly 0.5 is dark under both
        assert_eq!(above.lit_count() + below.lit_count(), above.total_cells());
    }

    #[test]
    fn empty_axis_is_bumped_to_one() {
        let config = GameConfig::new_unchecked((0, 4), 0.5);

        let grid = RandomLightsGenerator::new(0, LitPolicy::AboveChance).generate(config);

        assert_eq!(grid.size(), (1, 4));
    }
}
