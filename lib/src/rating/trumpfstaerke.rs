use crate::primitives::*;
use crate::rating::params::*;
use crate::rules::ESolo;
use crate::util::*;

fn count_card(slccard: &[ECard], card: ECard) -> usize {
    slccard.iter().filter(|&&card_hand| card_hand==card).count()
}

/// Trumpfs that cannot be beaten once all higher ones are gone, most senior first.
pub fn unbeatable_in_descending_order(b_bock: bool, b_schweinchen: bool) -> &'static [ECard] {
    use ECard::*;
    match (b_schweinchen, b_bock) {
        (false, false) => &[HZ, EO, BO, HO, SO, EU, BU, HU, SU, SA, SZ, SK, S9],
        (false, true) => &[HZ, HK, EO, BO, HO, SO, EU, BU, HU, SU, SA, SZ, SK, S9],
        (true, false) => &[SA, HZ, EO, BO, HO, SO, EU, BU, HU, SU, SZ, SK, S9],
        (true, true) => &[SA, HZ, HK, EO, BO, HO, SO, EU, BU, HU, SU, SZ, SK, S9],
    }
}

/// Length of the unbroken run from the top of `slccard_unbeatable` held in `slccard_trumpf`.
/// A single EO does not break the run: the other one belongs to the partner.
pub fn count_unbeatable(slccard_trumpf: &[ECard], slccard_unbeatable: &[ECard]) -> usize {
    let mut n_unbeatable = 0;
    for &card_unbeatable in slccard_unbeatable {
        match (count_card(slccard_trumpf, card_unbeatable), card_unbeatable) {
            (2, _) => n_unbeatable += 2,
            (1, ECard::EO) => n_unbeatable += 1,
            (1, _) => {
                n_unbeatable += 1;
                break;
            },
            _ => break,
        }
    }
    n_unbeatable
}

/// Argument of the arctangent that measures the quality of a single trumpf.
pub fn quality_argument(card: ECard, efarbe_trumpf: EFarbe, b_bock: bool, b_schweinchen: bool) -> f64 {
    let b_herz = EFarbe::Herz==efarbe_trumpf;
    match (card.farbe(), card.schlag()) {
        (efarbe, ESchlag::Neun) if efarbe==efarbe_trumpf => -6.,
        (efarbe, ESchlag::Koenig) if efarbe==efarbe_trumpf && !(b_bock && b_herz) => -5.,
        (efarbe, ESchlag::Zehn) if efarbe==efarbe_trumpf && !b_herz => -4.,
        (efarbe, ESchlag::Ass) if efarbe==efarbe_trumpf && !b_schweinchen => -3.,
        (efarbe, ESchlag::Unter) => -2. + efarbe.ober_unter_rank().as_num::<f64>(),
        (efarbe, ESchlag::Ober) => 2. + efarbe.ober_unter_rank().as_num::<f64>(),
        (EFarbe::Herz, ESchlag::Koenig) if b_bock => 5.5,
        (EFarbe::Herz, ESchlag::Zehn) => 6.,
        (efarbe, ESchlag::Ass) if efarbe==efarbe_trumpf => 7., // Schweinchen
        _ => 0.,
    }
}

impl STrumpfStaerkeParams {
    /// Rating in `[0, f_cap]` of the trumpf labels `slccard_trumpf`.
    /// `b_bock` and `b_schweinchen` describe the whole deal, not only this hand.
    pub fn trumpfstaerke(&self, slccard_trumpf: &[ECard], b_bock: bool, b_schweinchen: bool, esolo: ESolo) -> f64 {
        self.trumpfstaerke_uncapped(slccard_trumpf, b_bock, b_schweinchen, esolo)
            .min(self.f_cap)
    }

    pub fn trumpfstaerke_uncapped(&self, slccard_trumpf: &[ECard], b_bock: bool, b_schweinchen: bool, esolo: ESolo) -> f64 {
        match (esolo.trumpfschlag(), esolo.trumpffarbe()) {
            (Some(eschlag), _) => self.trumpfstaerke_schlag(slccard_trumpf, eschlag),
            (None, Some(efarbe)) => self.trumpfstaerke_farbe(slccard_trumpf, b_bock, b_schweinchen, efarbe),
            (None, None) => 0., // nobody has trumpf
        }
    }

    fn trumpfstaerke_schlag(&self, slccard_trumpf: &[ECard], eschlag: ESchlag) -> f64 {
        // quality doubles with each farbe, quantity matters more
        let f_quality = slccard_trumpf.iter()
            .filter(|card| card.schlag()==eschlag)
            .map(|card| 0.25 * 2f64.powi(card.farbe().ober_unter_rank().as_num::<i32>()))
            .sum::<f64>();
        let n_count_farbe = |efarbe| count_card(slccard_trumpf, ECard::new(efarbe, eschlag));
        let mut n_unbeatable = n_count_farbe(EFarbe::Eichel);
        if 1==n_unbeatable && 1==slccard_trumpf.len() {
            n_unbeatable = 0; // blank
        }
        for (efarbe, n_unbeatable_so_far) in [(EFarbe::Blatt, 2), (EFarbe::Herz, 4), (EFarbe::Schellen, 6)] {
            if n_unbeatable!=n_unbeatable_so_far {
                break;
            }
            n_unbeatable += n_count_farbe(efarbe);
        }
        let f_normalization = self.f_normalization_schlag;
        debug!("trumpfstaerke({}): q={} n={} t={} c={}", eschlag, f_quality, slccard_trumpf.len(), n_unbeatable, f_normalization);
        (f_quality
            + slccard_trumpf.len().as_num::<f64>()
            + self.f_weight_unbeatable_schlag * n_unbeatable.as_num::<f64>()
        ) / f_normalization
    }

    fn trumpfstaerke_farbe(&self, slccard_trumpf: &[ECard], b_bock: bool, b_schweinchen: bool, efarbe_trumpf: EFarbe) -> f64 {
        // arctan in (-pi/2, pi/2), shifted to stay positive
        let f_quality = slccard_trumpf.iter()
            .map(|&card| self.f_weight_quality * (quality_argument(card, efarbe_trumpf, b_bock, b_schweinchen).atan() + 1.5))
            .sum::<f64>();
        let n_unbeatable = count_unbeatable(slccard_trumpf, unbeatable_in_descending_order(b_bock, b_schweinchen));
        let f_normalization = self.normalization(b_bock, b_schweinchen);
        debug!("trumpfstaerke({}, bock: {}, schweinchen: {}): q={} n={} t={} c={}",
            efarbe_trumpf,
            b_bock,
            b_schweinchen,
            f_quality,
            slccard_trumpf.len(),
            n_unbeatable,
            f_normalization,
        );
        (f_quality * slccard_trumpf.len().as_num::<f64>()
            + self.f_weight_unbeatable * n_unbeatable.as_num::<f64>()
        ) / f_normalization
    }
}

/// Rating with the default parameters.
pub fn trumpfstaerke(slccard_trumpf: &[ECard], b_bock: bool, b_schweinchen: bool, esolo: ESolo) -> f64 {
    STrumpfStaerkeParams::default().trumpfstaerke(slccard_trumpf, b_bock, b_schweinchen, esolo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ECard::*;

    fn assert_approx(f_actual: f64, f_expected: f64) {
        assert!((f_actual-f_expected).abs() < 1e-9, "{} != {}", f_actual, f_expected);
    }

    #[test]
    fn test_fleischlos_is_zero() {
        for b_bock in [false, true] {
            for b_schweinchen in [false, true] {
                assert_eq!(trumpfstaerke(&[HZ, HZ, EO, EO], b_bock, b_schweinchen, ESolo::Fleischlos), 0.);
                assert_eq!(trumpfstaerke(&[], b_bock, b_schweinchen, ESolo::Fleischlos), 0.);
            }
        }
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(trumpfstaerke(&[], false, false, ESolo::Normal), 0.);
        assert_eq!(trumpfstaerke(&[], false, false, ESolo::Ober), 0.);
    }

    #[test]
    fn test_full_double_run_is_capped() {
        let veccard = vec![
            HZ, HZ, EO, EO, BO, BO, HO, HO, SO, SO, EU, EU,
            BU, BU, HU, HU, SU, SU, SA, SA, SZ, SZ, SK, SK,
        ];
        let params = STrumpfStaerkeParams::default();
        assert!(params.trumpfstaerke_uncapped(&veccard, false, false, ESolo::Normal) > 100.);
        assert_eq!(trumpfstaerke(&veccard, false, false, ESolo::Normal), 100.);
    }

    #[test]
    fn test_known_values() {
        // single EO: q = atan(5)+1.5, t = 0 since H10 is missing
        assert_approx(
            trumpfstaerke(&[EO], false, false, ESolo::Normal),
            (5f64.atan() + 1.5) / 2.02,
        );
        // EO H10 H10: t = 2 (H10) + 1 (EO) and then BO is missing
        assert_approx(
            trumpfstaerke(&[EO, HZ, HZ], false, false, ESolo::Normal),
            ((5f64.atan() + 1.5 + 2. * (6f64.atan() + 1.5)) * 3. + 4. * 3.) / 2.02,
        );
        // fallback argument 0 for Herz-Koenig without bock
        assert_approx(
            trumpfstaerke(&[HK], false, false, ESolo::Normal),
            1.5 / 2.02,
        );
    }

    #[test]
    fn test_count_unbeatable_eichel_ober() {
        let slccard_unbeatable = unbeatable_in_descending_order(false, false);
        assert_eq!(count_unbeatable(&[HZ, HZ, EO, BO, BO, HO], slccard_unbeatable), 6);
        assert_eq!(count_unbeatable(&[HZ, HZ, EO, EO, BO, HO, HO], slccard_unbeatable), 5);
        // EO alone is not unbeatable from the top since H10 comes first
        assert_eq!(count_unbeatable(&[EO], slccard_unbeatable), 0);
        // starting right at EO, a single copy continues the walk ...
        assert_eq!(count_unbeatable(&[EO], &slccard_unbeatable[1..]), 1);
        assert_eq!(count_unbeatable(&[EO, BO, BO], &slccard_unbeatable[1..]), 3);
        // ... while any other single copy stops it
        assert_eq!(count_unbeatable(&[BO, HO, HO], &slccard_unbeatable[2..]), 1);
        assert_eq!(count_unbeatable(&[HZ, EO, EO], slccard_unbeatable), 1);
        assert_eq!(count_unbeatable(&[], slccard_unbeatable), 0);
    }

    #[test]
    fn test_unbeatable_lists() {
        assert_eq!(unbeatable_in_descending_order(false, false).len(), 13);
        assert_eq!(unbeatable_in_descending_order(/*b_bock*/true, /*b_schweinchen*/false)[1], HK);
        assert_eq!(unbeatable_in_descending_order(/*b_bock*/false, /*b_schweinchen*/true)[0], SA);
        assert_eq!(unbeatable_in_descending_order(/*b_bock*/false, /*b_schweinchen*/true)[1], HZ);
        assert_eq!(&unbeatable_in_descending_order(true, true)[..3], &[SA, HZ, HK]);
        for b_bock in [false, true] {
            for b_schweinchen in [false, true] {
                let slccard = unbeatable_in_descending_order(b_bock, b_schweinchen);
                assert_eq!(slccard.len(), 13 + usize::from(b_bock));
                assert_eq!(slccard.last(), Some(&S9));
            }
        }
    }

    #[test]
    fn test_quality_argument() {
        let efarbe = EFarbe::Schellen;
        assert_eq!(quality_argument(S9, efarbe, false, false), -6.);
        assert_eq!(quality_argument(SK, efarbe, false, false), -5.);
        assert_eq!(quality_argument(SZ, efarbe, false, false), -4.);
        assert_eq!(quality_argument(SA, efarbe, false, false), -3.);
        assert_eq!(quality_argument(SA, efarbe, false, true), 7.);
        for (card, f_arg) in [(SU, -2.), (HU, -1.), (BU, 0.), (EU, 1.), (SO, 2.), (HO, 3.), (BO, 4.), (EO, 5.)] {
            assert_eq!(quality_argument(card, efarbe, true, true), f_arg);
        }
        assert_eq!(quality_argument(HK, efarbe, true, false), 5.5);
        assert_eq!(quality_argument(HK, efarbe, false, false), 0.);
        assert_eq!(quality_argument(HZ, efarbe, false, false), 6.);
        // Herzsolo
        assert_eq!(quality_argument(HK, EFarbe::Herz, false, false), -5.);
        assert_eq!(quality_argument(HK, EFarbe::Herz, true, false), 5.5);
        assert_eq!(quality_argument(HZ, EFarbe::Herz, false, false), 6.);
        assert_eq!(quality_argument(H9, EFarbe::Herz, false, false), -6.);
        assert_eq!(quality_argument(HA, EFarbe::Herz, false, true), 7.);
        // Blatt-Zehn carries the label S10, which Blattsolo does not know
        assert_eq!(quality_argument(SZ, EFarbe::Blatt, false, false), 0.);
        assert_eq!(quality_argument(EA, EFarbe::Blatt, false, false), 0.);
    }

    #[test]
    fn test_schlagsolo() {
        // blank top trumpf does not count as unbeatable
        assert_eq!(trumpfstaerke(&[EU], false, false, ESolo::Unter), (2. + 1.) / 0.25);
        assert_eq!(trumpfstaerke(&[EU, SU], false, false, ESolo::Unter), (2.25 + 2. + 4.) / 0.25);
        // EO EO BO stops the run after BO since one BO is missing
        assert_eq!(trumpfstaerke(&[EO, EO, BO], false, false, ESolo::Ober), (5. + 3. + 4. * 3.) / 0.25);
        assert_eq!(trumpfstaerke(&[EO, EO, BO, BO, HO], false, false, ESolo::Ober), 100.);
        // labels of the other schlag do not count
        assert_eq!(trumpfstaerke(&[EO, SO], false, false, ESolo::Unter), 2. / 0.25);
        // a full double run exceeds the cap
        let veccard_full = vec![SO, SO, HO, HO, BO, BO, EO, EO];
        let params = STrumpfStaerkeParams::default();
        assert_eq!(params.trumpfstaerke_uncapped(&veccard_full, false, false, ESolo::Ober), 190.);
        assert_eq!(params.trumpfstaerke(&veccard_full, false, false, ESolo::Ober), 100.);
    }

    #[test]
    fn test_bounds() {
        let veccard_all = ECard::values().chain(ECard::values()).collect::<Vec<_>>();
        for esolo in ESolo::values() {
            for b_bock in [false, true] {
                for b_schweinchen in [false, true] {
                    for n_len in 0..=veccard_all.len() {
                        let f = trumpfstaerke(&veccard_all[..n_len], b_bock, b_schweinchen, esolo);
                        assert!((0. ..=100.).contains(&f), "{} {} {} {}: {}", esolo, b_bock, b_schweinchen, n_len, f);
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_params() {
        let params = STrumpfStaerkeParams {
            f_cap: 50.,
            ..STrumpfStaerkeParams::default()
        };
        assert_eq!(params.trumpfstaerke(&[EO, EO, BO, BO, HO], false, false, ESolo::Ober), 50.);
    }
}
