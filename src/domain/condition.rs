//! Trigger conditions.
//!
//! Pure decision functions: no I/O, no mutation. A `BUY` order fires once the
//! market trades at or below its target; a `SELL` order once it trades at or
//! above. Equality fires in both directions.

use super::money::Price;
use super::order::{TargetOrder, TransactionType};
use super::quote::QuoteSnapshot;

/// Result of evaluating one order against a quote snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The order has already left `PENDING`.
    NotPending,
    /// No quote for the order's instrument yet.
    NoQuote,
    /// Quote seen, condition not met.
    Waiting { price: Price },
    /// Condition met at `price`.
    Triggered { price: Price },
}

impl Evaluation {
    #[must_use]
    pub const fn is_triggered(&self) -> bool {
        matches!(self, Self::Triggered { .. })
    }
}

/// Whether `current_price` satisfies the order's condition.
#[must_use]
pub fn should_trigger(
    transaction_type: TransactionType,
    target_price: Price,
    current_price: Price,
) -> bool {
    match transaction_type {
        TransactionType::Buy => current_price <= target_price,
        TransactionType::Sell => current_price >= target_price,
    }
}

/// Evaluate `order` against the latest quote for its instrument.
#[must_use]
pub fn evaluate(order: &TargetOrder, quotes: &QuoteSnapshot) -> Evaluation {
    if !order.is_pending() {
        return Evaluation::NotPending;
    }
    let Some(quote) = quotes.get(order.instrument_token()) else {
        return Evaluation::NoQuote;
    };

    let price = quote.last_price;
    if should_trigger(order.transaction_type(), order.target_price(), price) {
        Evaluation::Triggered { price }
    } else {
        Evaluation::Waiting { price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::domain::quote::Quote;
    use crate::testkit::domain::{buy_limit, sell_market};
    use rust_decimal_macros::dec;

    #[test]
    fn buy_triggers_at_or_below_target() {
        let target = dec!(100);
        assert!(!should_trigger(TransactionType::Buy, target, dec!(100.01)));
        assert!(should_trigger(TransactionType::Buy, target, dec!(100)));
        assert!(should_trigger(TransactionType::Buy, target, dec!(99.99)));
    }

    #[test]
    fn sell_triggers_at_or_above_target() {
        let target = dec!(50);
        assert!(!should_trigger(TransactionType::Sell, target, dec!(49.99)));
        assert!(should_trigger(TransactionType::Sell, target, dec!(50)));
        assert!(should_trigger(TransactionType::Sell, target, dec!(50.01)));
    }

    #[test]
    fn trigger_rule_holds_across_a_price_sweep() {
        let target = dec!(10);
        for cents in 900..=1100 {
            let price = Price::new(cents, 2);
            assert_eq!(
                should_trigger(TransactionType::Buy, target, price),
                price <= target
            );
            assert_eq!(
                should_trigger(TransactionType::Sell, target, price),
                price >= target
            );
        }
    }

    #[test]
    fn missing_quote_is_not_evaluable() {
        let order = buy_limit("INFY", dec!(100));
        let quotes = QuoteSnapshot::new();
        assert_eq!(evaluate(&order, &quotes), Evaluation::NoQuote);
    }

    #[test]
    fn evaluate_reports_observed_price() {
        let order = sell_market("TCS", dec!(50));
        let quotes: QuoteSnapshot = [Quote::new("TCS", dec!(49))].into_iter().collect();
        assert_eq!(
            evaluate(&order, &quotes),
            Evaluation::Waiting { price: dec!(49) }
        );

        let quotes: QuoteSnapshot = [Quote::new("TCS", dec!(50))].into_iter().collect();
        let evaluation = evaluate(&order, &quotes);
        assert_eq!(evaluation, Evaluation::Triggered { price: dec!(50) });
        assert!(evaluation.is_triggered());
    }

    #[test]
    fn non_pending_orders_are_never_evaluated() {
        let mut order = buy_limit("INFY", dec!(100));
        order.advance(OrderStatus::Triggered).unwrap();
        let quotes: QuoteSnapshot = [Quote::new("INFY", dec!(1))].into_iter().collect();
        assert_eq!(evaluate(&order, &quotes), Evaluation::NotPending);
    }
}
