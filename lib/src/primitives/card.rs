use crate::error::VTrumpfStaerkeError;
use crate::util::*;
use combine::{char::*, *};
use serde::Serializer;
use std::fmt;

plain_enum_mod!(modefarbe, EFarbe {
    Eichel,
    Blatt,
    Herz,
    Schellen,
});

impl EFarbe {
    /// Position in the order Schellen < Herz < Blatt < Eichel that ranks Ober and Unter.
    pub fn ober_unter_rank(self) -> usize {
        EFarbe::SIZE - 1 - self.to_usize()
    }
}

impl fmt::Display for EFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Eichel => "Eichel",
            Self::Blatt => "Blatt",
            Self::Herz => "Herz",
            Self::Schellen => "Schellen",
        })
    }
}

plain_enum_mod!(modeschlag, ESchlag {
    Ass,
    Zehn,
    Koenig,
    Ober,
    Unter,
    Neun,
});

impl fmt::Display for ESchlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Doubles as symbolic trumpf label: Display yields "EO", "H10", ...
plain_enum_mod!(modecard, ECard {
    EA, EZ, EK, EO, EU, E9,
    BA, BZ, BK, BO, BU, B9,
    HA, HZ, HK, HO, HU, H9,
    SA, SZ, SK, SO, SU, S9,
});

impl ECard {
    pub fn new(efarbe: EFarbe, eschlag: ESchlag) -> ECard {
        ECard::wrapped_from_usize(efarbe.to_usize() * ESchlag::SIZE + eschlag.to_usize())
    }
    pub fn farbe(self) -> EFarbe {
        EFarbe::wrapped_from_usize(self.to_usize() / ESchlag::SIZE)
    }
    pub fn schlag(self) -> ESchlag {
        ESchlag::wrapped_from_usize(self.to_usize() % ESchlag::SIZE)
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}",
            match self.farbe() {
                EFarbe::Eichel => "E",
                EFarbe::Blatt => "B",
                EFarbe::Herz => "H",
                EFarbe::Schellen => "S",
            },
            match self.schlag() {
                ESchlag::Neun => "9",
                ESchlag::Zehn => "10",
                ESchlag::Unter => "U",
                ESchlag::Ober => "O",
                ESchlag::Koenig => "K",
                ESchlag::Ass => "A",
            }
        )
    }
}

impl serde::Serialize for ECard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ECard {
    fn deserialize<D>(deserializer: D) -> Result<ECard, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        parse_trimmed(&String::deserialize(deserializer)?, card_parser())
            .map_err(serde::de::Error::custom)
    }
}

pub fn farbe_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = EFarbe>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        choice!(char('e'), char('E')).map(|_chr| EFarbe::Eichel),
        choice!(char('b'), char('B'), char('g'), char('G')).map(|_chr| EFarbe::Blatt),
        choice!(char('h'), char('H')).map(|_chr| EFarbe::Herz),
        choice!(char('s'), char('S')).map(|_chr| EFarbe::Schellen)
    )
}

pub fn schlag_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ESchlag>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        char('9').map(|_chr| ESchlag::Neun),
        (char('1'), char('0')).map(|_tplchr| ESchlag::Zehn),
        choice!(char('z'), char('Z'), char('x'), char('X')).map(|_chr| ESchlag::Zehn),
        choice!(char('u'), char('U')).map(|_chr| ESchlag::Unter),
        choice!(char('o'), char('O')).map(|_chr| ESchlag::Ober),
        choice!(char('k'), char('K')).map(|_chr| ESchlag::Koenig),
        choice!(char('a'), char('A')).map(|_chr| ESchlag::Ass)
    )
}

pub fn card_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ECard>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    (farbe_parser(), schlag_parser()).map(|(efarbe, eschlag)| ECard::new(efarbe, eschlag))
}

/// Parses whitespace separated labels such as "EO EO H10".
pub fn parse_cards(str_cards: &str) -> Result<Vec<ECard>, VTrumpfStaerkeError> {
    parse_whitespace_separated::<Vec<_>, _>(str_cards, card_parser())
        .map_err(|err| VTrumpfStaerkeError::invalid_argument_type(
            format!("Cannot parse trumpf labels \"{}\": {:?}", str_cards, err)
        ))
}

#[test]
fn test_card_ctor() {
    for efarbe in EFarbe::values() {
        for eschlag in ESchlag::values() {
            let card = ECard::new(efarbe, eschlag);
            assert_eq!(card.farbe(), efarbe);
            assert_eq!(card.schlag(), eschlag);
        }
    }
    assert_eq!(ECard::new(EFarbe::Herz, ESchlag::Zehn), ECard::HZ);
    assert_eq!(ECard::new(EFarbe::Eichel, ESchlag::Ober), ECard::EO);
    assert_eq!(ECard::new(EFarbe::Schellen, ESchlag::Neun), ECard::S9);
    assert_eq!(ECard::values().count(), 24);
}

#[test]
fn test_ober_unter_rank() {
    assert_eq!(EFarbe::Schellen.ober_unter_rank(), 0);
    assert_eq!(EFarbe::Herz.ober_unter_rank(), 1);
    assert_eq!(EFarbe::Blatt.ober_unter_rank(), 2);
    assert_eq!(EFarbe::Eichel.ober_unter_rank(), 3);
}

#[test]
fn test_display_and_parse() {
    use ECard::*;
    assert_eq!(HZ.to_string(), "H10");
    assert_eq!(EO.to_string(), "EO");
    assert_eq!(S9.to_string(), "S9");
    for card in ECard::values() {
        assert_eq!(parse_cards(&card.to_string()), Ok(vec![card]));
    }
    assert_eq!(parse_cards("eo EO hx H10 gu"), Ok(vec![EO, EO, HZ, HZ, BU]));
    assert_eq!(parse_cards(""), Ok(vec![]));
    assert!(parse_cards("EO XX").is_err());
    assert!(parse_cards("H11").is_err());
}

#[test]
fn test_serialization() {
    macro_rules! test_card(($($card:ident $str_card:expr,)*) => {
        $(
            serde_test::assert_tokens(&ECard::$card, &[
                serde_test::Token::Str($str_card),
            ]);
        )*
    });
    test_card!(
        EO "EO", BO "BO", HO "HO", SO "SO",
        EU "EU", BU "BU", HU "HU", SU "SU",
        HZ "H10", HK "HK", SA "SA", SZ "S10", S9 "S9",
    );
}
