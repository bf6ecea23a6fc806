//! Outcome notification texts.

use crate::domain::{id::BrokerOrderId, money::Price, order::TargetOrder};
use crate::port::outbound::notifier::Notification;

pub const SUBJECT_EXECUTED: &str = "Target Order Executed";
pub const SUBJECT_FAILED: &str = "Target Order Failed";
pub const SUBJECT_NEEDS_VERIFICATION: &str = "Target Order Needs Verification";

fn display_name(order: &TargetOrder) -> &str {
    if order.symbol().trim().is_empty() {
        order.instrument_token().as_str()
    } else {
        order.symbol()
    }
}

/// Success message: what was traded and at which observed price.
pub fn executed(
    order: &TargetOrder,
    trigger_price: Price,
    broker_order_id: &BrokerOrderId,
) -> Notification {
    let body = format!(
        "Your target order for {name} has been executed successfully.\n\
         Instrument: {instrument}\n\
         Transaction Type: {side}\n\
         Quantity: {quantity}\n\
         Trigger Price: {trigger_price}\n\
         Target Price: {target}\n\
         Order Type: {order_type}\n\
         Broker Order ID: {broker_order_id}",
        name = display_name(order),
        instrument = order.instrument_token(),
        side = order.transaction_type(),
        quantity = order.quantity(),
        target = order.target_price(),
        order_type = order.order_type(),
    );
    Notification::new(order.recipient(), SUBJECT_EXECUTED, body)
}

/// Failure message after the broker rejected the order.
pub fn failed(order: &TargetOrder, trigger_price: Price, reason: &str) -> Notification {
    let body = format!(
        "Your target order for {name} failed to execute.\n\
         Transaction Type: {side}\n\
         Quantity: {quantity}\n\
         Trigger Price: {trigger_price}\n\
         Reason: {reason}\n\
         Please check your account or contact support for assistance.",
        name = display_name(order),
        side = order.transaction_type(),
        quantity = order.quantity(),
    );
    Notification::new(order.recipient(), SUBJECT_FAILED, body)
}

/// Message for an order found mid-execution at startup.
pub fn needs_verification(order: &TargetOrder) -> Notification {
    let body = format!(
        "Your target order for {name} ({side} {quantity} @ {target}) was interrupted \
         while being executed and has been marked as failed.\n\
         The order may or may not have reached the broker. \
         Please verify your order book before placing it again.",
        name = display_name(order),
        side = order.transaction_type(),
        quantity = order.quantity(),
        target = order.target_price(),
    );
    Notification::new(order.recipient(), SUBJECT_NEEDS_VERIFICATION, body)
}
