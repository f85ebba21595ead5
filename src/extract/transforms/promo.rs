//! Random promotional block insertion.

use super::Transform;
use crate::extract::random::RandomSource;

/// Multi-line block inserted as a single line element.
pub const PROMO_BLOCK: &str = "\nFor more Novels like this join us on Novels Republic Channel Today\n\n\
https://whatsapp.com/channel/0029VaALswPCRs1qNr0IJW2e\n";

/// Inserts [`PROMO_BLOCK`] at a random line position with a fixed probability.
///
/// One unit draw decides whether to insert (`draw < probability`); only when it
/// does is a second draw taken for the position in `0..=line_count`.
pub struct InsertPromo<R> {
    probability: f64,
    random: R,
    inserted: usize,
}

impl<R: RandomSource> InsertPromo<R> {
    pub fn new(probability: f64, random: R) -> Self {
        Self {
            probability,
            random,
            inserted: 0,
        }
    }

    pub fn inserted_count(&self) -> usize {
        self.inserted
    }
}

impl<R: RandomSource> Transform for InsertPromo<R> {
    fn transform(&mut self, message: &mut String) {
        if self.random.next_unit() >= self.probability {
            return;
        }

        let mut lines: Vec<&str> = message.split('\n').collect();
        let position = self.random.index_inclusive(lines.len());
        lines.insert(position, PROMO_BLOCK);
        *message = lines.join("\n");
        self.inserted += 1;
    }
}
