use crate::error::VTrumpfStaerkeError;
use crate::primitives::card::*;
use crate::util::*;
use serde::Serialize;
use std::fmt;

/// Numeric card code in `[1, 24]` as dealt from the double deck.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct SRawCard(u8);

// identity of each code in a normal game
static ACARD_BY_RAW : [ECard; SRawCard::N_MAX as usize] = [
    ECard::H9, ECard::HK, ECard::HA,
    ECard::B9, ECard::BK, ECard::BZ, ECard::BA,
    ECard::E9, ECard::EK, ECard::EZ, ECard::EA,
    ECard::S9, ECard::SK, ECard::SZ, ECard::SA,
    ECard::SU, ECard::HU, ECard::BU, ECard::EU,
    ECard::SO, ECard::HO, ECard::BO, ECard::EO,
    ECard::HZ,
];

impl SRawCard {
    pub const N_MAX : u8 = 24;

    pub fn new(n_raw: u8) -> Result<SRawCard, VTrumpfStaerkeError> {
        if (1..=Self::N_MAX).contains(&n_raw) {
            Ok(SRawCard(n_raw))
        } else {
            Err(VTrumpfStaerkeError::invalid_argument_type(
                format!("card has to be an integer in [1, {}], got {}", Self::N_MAX, n_raw)
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn card(self) -> ECard {
        ACARD_BY_RAW[(self.0 - 1).as_num::<usize>()]
    }

    pub fn values() -> impl Iterator<Item=SRawCard>+Clone {
        (1..=Self::N_MAX).map(SRawCard)
    }
}

impl TryFrom<i64> for SRawCard {
    type Error = VTrumpfStaerkeError;
    fn try_from(n_raw: i64) -> Result<SRawCard, VTrumpfStaerkeError> {
        u8::try_from(n_raw)
            .map_err(|_| VTrumpfStaerkeError::invalid_argument_type(
                format!("card has to be an integer in [1, {}], got {}", Self::N_MAX, n_raw)
            ))
            .and_then(SRawCard::new)
    }
}

impl fmt::Display for SRawCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses whitespace separated codes such as "2 2 15 24".
pub fn parse_raw_cards(str_cards: &str) -> Result<Vec<SRawCard>, VTrumpfStaerkeError> {
    parse_whitespace_separated::<Vec<_>, _>(str_cards, number_parser())
        .map_err(|err| VTrumpfStaerkeError::invalid_argument_type(
            format!("hand has to be a list of integers, got \"{}\": {:?}", str_cards, err)
        ))?
        .iter()
        .map(|str_raw| {
            str_raw.parse::<i64>()
                .map_err(|_| VTrumpfStaerkeError::invalid_argument_type(format!("{} is not a card", str_raw)))
                .and_then(SRawCard::try_from)
        })
        .collect()
}

#[test]
fn test_rawcard_bounds() {
    assert!(SRawCard::new(0).is_err());
    assert!(SRawCard::new(25).is_err());
    assert_eq!(SRawCard::new(24).map(SRawCard::get), Ok(24));
    assert!(SRawCard::try_from(-2).is_err());
    assert!(SRawCard::try_from(300).is_err());
    assert_eq!(SRawCard::values().count(), 24);
}

#[test]
fn test_rawcard_identity() {
    use ECard::*;
    let veccard = SRawCard::values().map(SRawCard::card).collect::<Vec<_>>();
    assert_eq!(veccard, vec![
        H9, HK, HA, B9, BK, BZ, BA, E9, EK, EZ, EA, S9, SK, SZ, SA,
        SU, HU, BU, EU, SO, HO, BO, EO, HZ,
    ]);
    for card in veccard.iter() {
        assert_eq!(veccard.iter().filter(|&card_raw| card_raw==card).count(), 1);
    }
}

#[test]
fn test_parse_raw_cards() {
    assert_eq!(
        parse_raw_cards(" 2 2 15\n24 ").map(|vecrawcard| vecrawcard.into_iter().map(SRawCard::get).collect::<Vec<_>>()),
        Ok(vec![2, 2, 15, 24]),
    );
    assert!(matches!(parse_raw_cards("2 x 15"), Err(VTrumpfStaerkeError::InvalidArgumentType(_))));
    assert!(matches!(parse_raw_cards("2 25"), Err(VTrumpfStaerkeError::InvalidArgumentType(_))));
    assert!(matches!(parse_raw_cards("99999999999999999999"), Err(VTrumpfStaerkeError::InvalidArgumentType(_))));
}
