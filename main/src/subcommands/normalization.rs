use doppelkopf_lib::rating::normalization_table;
use failure::Error;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Show the rating of the normalization reference hands")
        .arg(params_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    for str_line in normalization_table(&super::get_params(clapmatches)?) {
        println!("{}", str_line);
    }
    Ok(())
}
