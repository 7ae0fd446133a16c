use crate::primitives::*;
use crate::util::*;
use enum_dispatch::enum_dispatch;
use std::fmt;

#[enum_dispatch]
pub trait TTrumpfDecider : Clone + fmt::Debug {
    /// Symbolic label of `card` if it is trumpf.
    fn trumpf_label(&self, card: ECard) -> Option<ECard>;

    fn trumpfs(&self, slcrawcard: &[SRawCard]) -> Vec<ECard> {
        slcrawcard.iter()
            .filter_map(|rawcard| self.trumpf_label(rawcard.card()))
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct STrumpfDeciderNoTrumpf;

impl TTrumpfDecider for STrumpfDeciderNoTrumpf {
    fn trumpf_label(&self, _card: ECard) -> Option<ECard> {
        None
    }
}

#[derive(Clone, Debug, new)]
pub struct STrumpfDeciderSchlag {
    eschlag: ESchlag,
}

impl TTrumpfDecider for STrumpfDeciderSchlag {
    fn trumpf_label(&self, card: ECard) -> Option<ECard> {
        if_then_some!(card.schlag()==self.eschlag, card)
    }
}

#[derive(Clone, Debug, new)]
pub struct STrumpfDeciderFarbe {
    efarbe: EFarbe,
    b_bock: bool,
}

impl TTrumpfDecider for STrumpfDeciderFarbe {
    fn trumpf_label(&self, card: ECard) -> Option<ECard> {
        match (card.farbe(), card.schlag()) {
            (_, ESchlag::Ober | ESchlag::Unter) | (EFarbe::Herz, ESchlag::Zehn) => Some(card),
            (EFarbe::Herz, ESchlag::Koenig) if self.b_bock => Some(card),
            (efarbe, _) if efarbe==self.efarbe => Some(match card {
                ECard::BZ => ECard::SZ, // Blatt-Zehn is labelled like Schellen-Zehn
                _ => card,
            }),
            _ => None,
        }
    }
}

#[enum_dispatch(TTrumpfDecider)]
#[derive(Clone, Debug)]
pub enum VTrumpfDecider {
    STrumpfDeciderNoTrumpf,
    STrumpfDeciderSchlag,
    STrumpfDeciderFarbe,
}
