use crate::cell::CellView;
use crate::utils::js_random_seed;
use clap::Args;
use lightsout_core as game;
use thiserror::Error;
use yew::prelude::*;

const DEFAULT_ROWS: game::Coord = 5;
const DEFAULT_COLS: game::Coord = 5;
const DEFAULT_CHANCE: f64 = 0.25;

#[derive(Error, Debug)]
pub(crate) enum LaunchError {
    #[error("Invalid game settings: {0}")]
    Game(#[from] game::GameError),
    #[error("Invalid board preset: {0}")]
    Preset(#[from] serde_json::Error),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Flip(game::Coord2),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: game::Coord,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: game::Coord,

    /// Threshold a cell's random draw is compared against
    #[arg(long, default_value_t = DEFAULT_CHANCE)]
    pub chance: f64,

    /// Light a cell when its draw is below the chance instead of above it
    #[arg(long)]
    pub lit_below_chance: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start from this board instead of a random one, as JSON rows of booleans
    #[arg(long)]
    pub board: Option<String>,
}

impl Default for BoardProps {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            chance: DEFAULT_CHANCE,
            lit_below_chance: false,
            seed: None,
            board: None,
        }
    }
}

impl BoardProps {
    fn lit_policy(&self) -> game::LitPolicy {
        if self.lit_below_chance {
            game::LitPolicy::BelowChance
        } else {
            game::LitPolicy::AboveChance
        }
    }

    /// Generation flags that differ from their defaults, which a preset board makes irrelevant.
    fn flags_ignored_by_preset(&self) -> Vec<&'static str> {
        let defaults = Self::default();
        [
            ("--rows", self.rows != defaults.rows),
            ("--cols", self.cols != defaults.cols),
            ("--chance", self.chance != defaults.chance),
            ("--lit-below-chance", self.lit_below_chance),
            ("--seed", self.seed.is_some()),
        ]
        .into_iter()
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect()
    }

    fn start_game(&self, seed: u64) -> Result<game::Game, LaunchError> {
        if let Some(preset) = &self.board {
            let ignored = self.flags_ignored_by_preset();
            if !ignored.is_empty() {
                log::warn!("--board given, ignoring {}", ignored.join(", "));
            }
            let rows: Vec<Vec<bool>> = serde_json::from_str(preset)?;
            let grid = game::LightGrid::from_rows(&rows)?;
            return Ok(game::Game::new(grid));
        }

        let config = game::GameConfig::new((self.rows, self.cols), self.chance)?;
        let generator = game::RandomLightsGenerator::new(seed, self.lit_policy());
        Ok(game::Game::generate(generator, config)?)
    }
}

/// Owns the game; every flip replaces it and re-renders the board.
#[derive(Debug)]
pub(crate) struct BoardView {
    game: Result<game::Game, LaunchError>,
}

impl BoardView {
    fn view_grid(ctx: &Context<Self>, grid: &game::LightGrid) -> Html {
        let (rows, cols) = grid.size();

        html! {
            <table class="board">
                <tbody>
                    {
                        for (0..rows).map(|y| html! {
                            <tr key={y}>
                                {
                                    for (0..cols).map(|x| {
                                        let is_lit = grid.is_lit((y, x));
                                        let on_flip = ctx.link().callback(move |()| Msg::Flip((y, x)));
                                        html! {
                                            <CellView key={x} {is_lit} {on_flip}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let game = props.start_game(seed);
        match &game {
            Ok(started) if started.has_won() => log::info!("Board started out dark"),
            Ok(_) => log::debug!("Board ready"),
            Err(err) => log::error!("Could not start game: {}", err),
        }
        Self { game }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Ok(current) = &mut self.game else {
            return false;
        };

        match msg {
            Msg::Flip(coords) => match current.flip_cells_around(coords) {
                Ok(outcome) => {
                    if outcome == game::FlipOutcome::Won {
                        log::info!("All lights are off");
                    }
                    true
                }
                Err(err) => {
                    log::warn!("Ignored flip at {:?}: {}", coords, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.game {
            Ok(game::Game::Playing(grid)) => Self::view_grid(ctx, grid),
            Ok(game::Game::Won) => html! { <h1>{"You have won!"}</h1> },
            Err(err) => html! { <p class="error">{err.to_string()}</p> },
        }
    }
}
