pub mod trumpfdecider;

use crate::primitives::*;
use crate::util::*;
use self::trumpfdecider::*;
use std::fmt;

plain_enum_mod!(modesolo, ESolo {
    Normal,
    Herz,
    Blatt,
    Eichel,
    Unter,
    Ober,
    Fleischlos,
});

impl ESolo {
    pub fn short_name(self) -> &'static str {
        match self {
            ESolo::Normal => "n",
            ESolo::Herz => "H",
            ESolo::Blatt => "B",
            ESolo::Eichel => "E",
            ESolo::Unter => "U",
            ESolo::Ober => "O",
            ESolo::Fleischlos => "F",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ESolo::Normal => "Normal",
            ESolo::Herz => "Herzsolo",
            ESolo::Blatt => "Blattsolo",
            ESolo::Eichel => "Eichelsolo",
            ESolo::Unter => "Untersolo",
            ESolo::Ober => "Obersolo",
            ESolo::Fleischlos => "Fleischlos",
        }
    }

    /// Accepts short and long names. Anything else is played as normal game.
    pub fn parse_lenient(str_solo: &str) -> ESolo {
        let str_solo = str_solo.trim();
        ESolo::values()
            .find(|esolo|
                str_solo.eq_ignore_ascii_case(esolo.short_name())
                    || str_solo.eq_ignore_ascii_case(esolo.name())
            )
            .unwrap_or_else(|| {
                warn!("Unknown solo \"{}\". Falling back to {}.", str_solo, ESolo::Normal);
                ESolo::Normal
            })
    }

    /// Farbe whose plain cards join Ober, Unter and Herz-Zehn as trumpf.
    pub fn trumpffarbe(self) -> Option<EFarbe> {
        match self {
            ESolo::Normal => Some(EFarbe::Schellen),
            ESolo::Herz => Some(EFarbe::Herz),
            ESolo::Blatt => Some(EFarbe::Blatt),
            ESolo::Eichel => Some(EFarbe::Eichel),
            ESolo::Unter | ESolo::Ober | ESolo::Fleischlos => None,
        }
    }

    /// Schlag that is the only trumpf.
    pub fn trumpfschlag(self) -> Option<ESchlag> {
        match self {
            ESolo::Unter => Some(ESchlag::Unter),
            ESolo::Ober => Some(ESchlag::Ober),
            ESolo::Normal | ESolo::Herz | ESolo::Blatt | ESolo::Eichel | ESolo::Fleischlos => None,
        }
    }

    pub fn bock_possible(self) -> bool {
        self.trumpffarbe().is_some()
    }

    /// Ass of the trumpf farbe; holding both copies makes Schweinchen.
    pub fn schweinchen_card(self) -> Option<ECard> {
        self.trumpffarbe().map(|efarbe| ECard::new(efarbe, ESchlag::Ass))
    }

    pub fn trumpfdecider(self, b_bock_on_hand: bool) -> VTrumpfDecider {
        match (self.trumpfschlag(), self.trumpffarbe()) {
            (Some(eschlag), _) => STrumpfDeciderSchlag::new(eschlag).into(),
            (None, Some(efarbe)) => STrumpfDeciderFarbe::new(efarbe, b_bock_on_hand).into(),
            (None, None) => STrumpfDeciderNoTrumpf.into(),
        }
    }
}

impl fmt::Display for ESolo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Trumpf labels of `slcrawcard` in input order. Bock is detected on this hand alone.
pub fn classify(slcrawcard: &[SRawCard], esolo: ESolo) -> Vec<ECard> {
    let b_bock_on_hand = slcrawcard.iter()
        .filter(|rawcard| rawcard.card()==ECard::HK)
        .count()==2;
    let veccard_trumpf = esolo.trumpfdecider(b_bock_on_hand).trumpfs(slcrawcard);
    trace!("classify({}): bock on hand: {}, {} of {} cards are trumpf",
        esolo,
        b_bock_on_hand,
        veccard_trumpf.len(),
        slcrawcard.len(),
    );
    veccard_trumpf
}
