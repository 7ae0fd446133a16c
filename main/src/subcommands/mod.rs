pub mod deal;
pub mod normalization;
pub mod rate;
pub mod rate_json;

use doppelkopf_lib::{
    rating::STrumpfStaerkeParams,
    rules::ESolo,
};
use doppelkopf_util::info;
use failure::Error;

pub mod shared_args {
    pub fn solo_arg() -> clap::Arg<'static> {
        clap::Arg::new("solo")
            .long("solo")
            .takes_value(true)
            .help("Game variant")
            .long_help("Game variant: n (normal game), H, B, E (Herz-, Blatt-, Eichelsolo), U (Untersolo), O (Obersolo), F (Fleischlos). Unknown letters are treated as a normal game.")
    }

    pub fn params_arg() -> clap::Arg<'static> {
        clap::Arg::new("params")
            .long("params")
            .takes_value(true)
            .help("TOML file with rating parameters")
            .long_help("TOML file overriding the weights, normalizations and the cap of the rating. Missing keys keep their default value.")
    }

    pub fn json_arg() -> clap::Arg<'static> {
        clap::Arg::new("json")
            .long("json")
            .help("Print results as JSON")
    }
}

pub fn get_solo(clapmatches: &clap::ArgMatches) -> ESolo {
    clapmatches.value_of("solo").map_or(ESolo::Normal, ESolo::parse_lenient)
}

pub fn get_params(clapmatches: &clap::ArgMatches) -> Result<STrumpfStaerkeParams, Error> {
    match clapmatches.value_of("params") {
        None => Ok(STrumpfStaerkeParams::default()),
        Some(str_path) => {
            info!("Reading rating parameters from {}", str_path);
            STrumpfStaerkeParams::from_file(std::path::Path::new(str_path))
        },
    }
}
