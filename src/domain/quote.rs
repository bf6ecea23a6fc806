//! Latest observed market state per instrument.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::InstrumentToken;
use super::money::Price;

/// Most recent quote for an instrument. No history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub instrument_token: InstrumentToken,
    pub last_price: Price,
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Create a quote stamped with the current time.
    pub fn new(instrument_token: impl Into<InstrumentToken>, last_price: Price) -> Self {
        Self {
            instrument_token: instrument_token.into(),
            last_price,
            timestamp: Utc::now(),
        }
    }
}

/// Latest quote per instrument, as seen at the start of a pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSnapshot {
    quotes: HashMap<InstrumentToken, Quote>,
}

impl QuoteSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quote, replacing any older one for the same instrument.
    pub fn insert(&mut self, quote: Quote) {
        self.quotes.insert(quote.instrument_token.clone(), quote);
    }

    #[must_use]
    pub fn get(&self, token: &InstrumentToken) -> Option<&Quote> {
        self.quotes.get(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.values()
    }
}

impl FromIterator<Quote> for QuoteSnapshot {
    fn from_iter<I: IntoIterator<Item = Quote>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for quote in iter {
            snapshot.insert(quote);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn later_quote_replaces_earlier_one() {
        let snapshot: QuoteSnapshot = [
            Quote::new("INFY", dec!(1500)),
            Quote::new("TCS", dec!(3900)),
            Quote::new("INFY", dec!(1490)),
        ]
        .into_iter()
        .collect();

        assert_eq!(snapshot.len(), 2);
        let infy = snapshot.get(&InstrumentToken::from("INFY")).unwrap();
        assert_eq!(infy.last_price, dec!(1490));
        assert!(snapshot.get(&InstrumentToken::from("WIPRO")).is_none());
    }
}
