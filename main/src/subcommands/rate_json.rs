use doppelkopf_lib::rating::SRatingRequest;
use doppelkopf_util::warn;
use failure::Error;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Rate a hand given as JSON request")
        .arg(clap::Arg::new("request")
            .required(true)
            .takes_value(true)
            .help("JSON request")
            .long_help("JSON request, e.g. {\"hand\": [2, 2, 15, 24], \"bock\": true, \"schweinchen\": false, \"solo\": \"n\"}. The solo is optional.")
        )
        .arg(params_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let str_request = clapmatches.value_of("request").unwrap_or_default();
    let request = SRatingRequest::from_json(str_request)
        .map_err(|err| {
            warn!("Rejected request {}: {}", str_request, err);
            err
        })?;
    println!("{}", serde_json::to_string(&request.evaluate(&super::get_params(clapmatches)?))?);
    Ok(())
}
