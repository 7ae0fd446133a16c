use crate::primitives::*;
use crate::rating::params::*;
use crate::rules::ESolo;
use itertools::Itertools;

/// Weakest hand that is still unbeatable under the given flags. It must reach the cap.
pub fn normalization_reference_hand(b_bock: bool, b_schweinchen: bool, esolo: ESolo) -> Vec<ECard> {
    use ECard::*;
    if let Some(eschlag) = esolo.trumpfschlag() {
        [EFarbe::Schellen, EFarbe::Herz, EFarbe::Blatt, EFarbe::Eichel].iter()
            .flat_map(|&efarbe| itertools::repeat_n(ECard::new(efarbe, eschlag), 2))
            .collect()
    } else {
        match (b_bock, b_schweinchen) {
            (true, false) => vec![S9, S9, SK, SK, BO, BO, EO, EO, HK, HK, HZ, HZ],
            (true, true) => vec![S9, S9, SK, SK, EO, EO, HK, HK, HZ, HZ, SA, SA],
            (false, true) => vec![S9, S9, SK, SK, SU, SU, EO, EO, HZ, HZ, SA, SA],
            (false, false) => vec![S9, S9, SK, SK, SA, SU, BO, BO, EO, EO, HZ, HZ],
        }
    }
}

impl STrumpfStaerkeParams {
    pub fn normalization_reference(&self, b_bock: bool, b_schweinchen: bool, esolo: ESolo) -> f64 {
        self.trumpfstaerke(
            &normalization_reference_hand(b_bock, b_schweinchen, esolo),
            b_bock,
            b_schweinchen,
            esolo,
        )
    }
}

pub fn normalization_reference(b_bock: bool, b_schweinchen: bool, esolo: ESolo) -> f64 {
    STrumpfStaerkeParams::default().normalization_reference(b_bock, b_schweinchen, esolo)
}

/// Human readable listing of `normalization_reference` for all solos and flags.
pub fn normalization_table(params: &STrumpfStaerkeParams) -> Vec<String> {
    use crate::util::*;
    ESolo::values()
        .cartesian_product([false, true])
        .cartesian_product([false, true])
        .map(|((esolo, b_bock), b_schweinchen)| format!(
            "{:<10} bock: {:<5} schweinchen: {:<5} {:>7.2} [{}]",
            esolo,
            b_bock,
            b_schweinchen,
            params.normalization_reference(b_bock, b_schweinchen, esolo),
            normalization_reference_hand(b_bock, b_schweinchen, esolo).iter().join(" "),
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn test_normalization_reference_normal() {
        for b_bock in [false, true] {
            for b_schweinchen in [false, true] {
                assert_eq!(normalization_reference(b_bock, b_schweinchen, ESolo::Normal), 100.);
                assert_eq!(normalization_reference_hand(b_bock, b_schweinchen, ESolo::Normal).len(), 12);
            }
        }
    }

    #[test]
    fn test_normalization_reference_reaches_cap() {
        let params = STrumpfStaerkeParams::default();
        for b_bock in [false, true] {
            for b_schweinchen in [false, true] {
                let f = params.trumpfstaerke_uncapped(
                    &normalization_reference_hand(b_bock, b_schweinchen, ESolo::Normal),
                    b_bock,
                    b_schweinchen,
                    ESolo::Normal,
                );
                assert!(100. <= f && f < 121., "{} {}: {}", b_bock, b_schweinchen, f);
            }
        }
    }

    #[test]
    fn test_normalization_reference_literal_defect() {
        // Two adjacent literals "SU" "BO" were once fused into "SUBO", dropping to 11 labels.
        // The fused label is not a card at all.
        assert!(parse_cards("S9 S9 SK SK SA SUBO BO EO EO H10 H10").is_err());
        let veccard_intended = parse_cards("S9 S9 SK SK SA SU BO BO EO EO H10 H10").unwrap();
        assert_eq!(veccard_intended, normalization_reference_hand(false, false, ESolo::Normal));
        // without the fused label, the hand sits clearly above the cap
        let f_uncapped = STrumpfStaerkeParams::default()
            .trumpfstaerke_uncapped(&veccard_intended, false, false, ESolo::Normal);
        assert!(120. < f_uncapped && f_uncapped < 121., "{}", f_uncapped);
    }

    #[test]
    fn test_normalization_reference_schlag() {
        use ECard::*;
        assert_eq!(normalization_reference_hand(false, false, ESolo::Ober), vec![SO, SO, HO, HO, BO, BO, EO, EO]);
        assert_eq!(normalization_reference_hand(false, false, ESolo::Unter), vec![SU, SU, HU, HU, BU, BU, EU, EU]);
        for esolo in [ESolo::Unter, ESolo::Ober] {
            assert_eq!(normalization_reference(false, false, esolo), 100.);
        }
    }

    #[test]
    fn test_normalization_reference_farbsolo_and_fleischlos() {
        assert_eq!(normalization_reference(true, true, ESolo::Fleischlos), 0.);
        for esolo in [ESolo::Herz, ESolo::Blatt, ESolo::Eichel] {
            let f = normalization_reference(false, false, esolo);
            assert!((0. ..=100.).contains(&f));
        }
    }

    #[test]
    fn test_normalization_table() {
        let vecstr = normalization_table(&STrumpfStaerkeParams::default());
        assert_eq!(vecstr.len(), ESolo::SIZE * 4);
        assert!(vecstr[0].starts_with("Normal"));
        assert!(vecstr[0].contains("100.00"));
    }
}
