//! Content transforms applied to each segmented message.
//!
//! Each transform rewrites a message body in place. [`ContentTransformer`]
//! runs them in the fixed order: phone numbers, links, name substitutions,
//! then the random promotional insertion.

mod promo;
mod redact;

pub use promo::{InsertPromo, PROMO_BLOCK};
pub use redact::{
    RedactLinks, RedactPhoneNumbers, SubstituteNames, CANONICAL_CHANNEL_URL, CANONICAL_PHONE,
};

use super::random::RandomSource;

/// A single in-place rewrite of a message body.
pub trait Transform {
    fn transform(&mut self, message: &mut String);
}

/// The full transform chain for one run.
pub struct ContentTransformer<R> {
    phones: RedactPhoneNumbers,
    links: RedactLinks,
    names: SubstituteNames,
    promo: InsertPromo<R>,
}

impl<R: RandomSource> ContentTransformer<R> {
    /// Create the chain with the given insertion probability and random source.
    pub fn new(insert_probability: f64, random: R) -> Self {
        Self {
            phones: RedactPhoneNumbers,
            links: RedactLinks,
            names: SubstituteNames::default(),
            promo: InsertPromo::new(insert_probability, random),
        }
    }

    /// Rewrite a joined message body and return the transformed text.
    pub fn apply(&mut self, mut message: String) -> String {
        self.phones.transform(&mut message);
        self.links.transform(&mut message);
        self.names.transform(&mut message);
        self.promo.transform(&mut message);
        message
    }

    /// How many messages received the promotional block.
    pub fn promos_inserted(&self) -> usize {
        self.promo.inserted_count()
    }
}
