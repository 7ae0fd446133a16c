use doppelkopf_lib::{
    game::SDeal,
    primitives::*,
};
use itertools::Itertools;
use plain_enum::PlainEnum;
use failure::Error;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Deal four random hands and rate each of them")
        .arg(solo_arg())
        .arg(params_arg())
        .arg(json_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let esolo = super::get_solo(clapmatches);
    let params = super::get_params(clapmatches)?;
    let deal = SDeal::new_random(&mut rand::thread_rng());
    let b_bock = deal.bock(esolo);
    let b_schweinchen = deal.schweinchen(esolo);
    let mapepirating = deal.rate(esolo, &params);
    if clapmatches.is_present("json") {
        println!("{}", serde_json::json!({
            "solo": esolo.short_name(),
            "bock": b_bock,
            "schweinchen": b_schweinchen,
            "players": EPlayerIndex::values()
                .map(|epi| serde_json::json!({
                    "hand": deal.hand(epi),
                    "rating": mapepirating[epi],
                }))
                .collect::<Vec<_>>(),
        }));
    } else {
        println!("{} (bock: {}, schweinchen: {})", esolo, b_bock, b_schweinchen);
        for epi in EPlayerIndex::values() {
            let rating = &mapepirating[epi];
            println!("Spieler {}: {}", epi.to_usize()+1, deal.hand(epi).iter().join(" "));
            println!("  Trumpf: {}", rating.veccard_trumpf.iter().join(" "));
            println!("  Trumpfstaerke: {:.2}", rating.f_trumpfstaerke);
        }
    }
    Ok(())
}
