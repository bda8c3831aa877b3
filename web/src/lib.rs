use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use wasm_bindgen::prelude::*;

mod board;
mod cell;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(flatten)]
    props: board::BoardProps,
}

impl Args {
    /// Parses `#--rows=3&--cols=4` style fragments, the leading empty piece stands in for the binary name.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let props = match Args::from_location_hash(&location_hash) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                console_log::init_with_level(log_level).expect("Error initializing logger");
            }
            args.props
        }
        Err(err) => {
            console_log::init_with_level(log::Level::Warn).expect("Error initializing logger");
            log::error!("Could not parse args, using defaults: {}", err);
            board::BoardProps::default()
        }
    };
    log::debug!("props: {:?}", props);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, props).render();
}
