#![deny(bare_trait_objects)]

mod subcommands;

use failure::Error;

fn main() -> Result<(), Error> {
    doppelkopf_util::logging::init_logging("doppelkopf")?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("doppelkopf")
            .about("Rates the trumpf strength of Doppelkopf hands")
            .arg_required_else_help(true)
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (deal, "deal")
        (rate, "rate")
        (rate_json, "rate-json")
        (normalization, "normalization")
    );
    Ok(())
}
