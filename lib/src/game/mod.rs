use crate::primitives::*;
use crate::rating::*;
use crate::rules::ESolo;
use crate::util::*;
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

/// Four hands of twelve cards dealt from a double deck of 24 codes.
#[derive(Clone, Debug, new)]
pub struct SDeal {
    pub mapepivecrawcard: EnumMap<EPlayerIndex, Vec<SRawCard>>,
}

impl SDeal {
    pub const N_CARDS_PER_HAND : usize = 12;

    pub fn new_random(rng: &mut impl Rng) -> SDeal {
        let mut vecrawcard = SRawCard::values()
            .flat_map(|rawcard| itertools::repeat_n(rawcard, 2))
            .collect::<Vec<_>>();
        vecrawcard.shuffle(rng);
        SDeal::new(EPlayerIndex::map_from_fn(|epi| {
            let i_first = epi.to_usize() * Self::N_CARDS_PER_HAND;
            vecrawcard[i_first..i_first+Self::N_CARDS_PER_HAND].iter()
                .copied()
                .sorted()
                .collect()
        }))
    }

    pub fn hand(&self, epi: EPlayerIndex) -> &[SRawCard] {
        &self.mapepivecrawcard[epi]
    }

    fn some_hand_holds_both(&self, card: ECard) -> bool {
        EPlayerIndex::values().any(|epi|
            2==self.hand(epi).iter().filter(|rawcard| rawcard.card()==card).count()
        )
    }

    /// Whether the game is played with the Herz-Koenig as trumpf.
    pub fn bock(&self, esolo: ESolo) -> bool {
        esolo.bock_possible() && self.some_hand_holds_both(ECard::HK)
    }

    pub fn schweinchen(&self, esolo: ESolo) -> bool {
        esolo.schweinchen_card().map_or(false, |card| self.some_hand_holds_both(card))
    }

    pub fn rate(&self, esolo: ESolo, params: &STrumpfStaerkeParams) -> EnumMap<EPlayerIndex, SRating> {
        let b_bock = self.bock(esolo);
        let b_schweinchen = self.schweinchen(esolo);
        EPlayerIndex::map_from_fn(|epi|
            SRatingRequest::new(self.hand(epi).to_vec(), b_bock, b_schweinchen, esolo).evaluate(params)
        )
    }
}
