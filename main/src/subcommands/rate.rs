use doppelkopf_lib::{
    primitives::parse_raw_cards,
    rating::SRatingRequest,
};
use itertools::Itertools;
use failure::{format_err, Error};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Rate the trumpf strength of a single hand")
        .arg(clap::Arg::new("hand")
            .long("hand")
            .takes_value(true)
            .required(true)
            .help("The cards on the hand")
            .long_help("The cards on the hand as whitespace separated codes from 1 to 24, e.g. \"2 2 15 23 24\".")
        )
        .arg(clap::Arg::new("bock")
            .long("bock")
            .help("Herz-Koenig is trumpf in this game")
        )
        .arg(clap::Arg::new("schweinchen")
            .long("schweinchen")
            .help("Someone holds both aces of the trumpf farbe")
        )
        .arg(solo_arg())
        .arg(params_arg())
        .arg(json_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let vecrawcard = parse_raw_cards(
        clapmatches.value_of("hand").ok_or_else(|| format_err!("No hand given as parameter."))?
    )?;
    let esolo = super::get_solo(clapmatches);
    let rating = SRatingRequest::new(
        vecrawcard,
        clapmatches.is_present("bock"),
        clapmatches.is_present("schweinchen"),
        esolo,
    )
        .evaluate(&super::get_params(clapmatches)?);
    if clapmatches.is_present("json") {
        println!("{}", serde_json::to_string(&rating)?);
    } else {
        println!("{}", esolo);
        println!("Trumpf: {}", rating.veccard_trumpf.iter().join(" "));
        println!("Trumpfstaerke: {:.2}", rating.f_trumpfstaerke);
    }
    Ok(())
}
