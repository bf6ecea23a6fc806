//! Scheduler cadence against the engine, under paused time.

mod support;

use std::time::Duration;

use rust_decimal_macros::dec;
use tripwire::application::scheduler::Scheduler;
use tripwire::domain::order::OrderStatus;
use tripwire::testkit::domain::{buy_limit, snapshot};
use tripwire::testkit::fakes::ScriptedQuotes;

use support::engine::Rig;

const PERIOD: Duration = Duration::from_millis(5_000);

#[tokio::test(start_paused = true)]
async fn order_triggers_on_the_tick_its_price_arrives() {
    let order = buy_limit("NSE_EQ|INFY", dec!(100));
    let quotes = ScriptedQuotes::new()
        .then(snapshot(&[("NSE_EQ|INFY", dec!(105))]))
        .then(snapshot(&[("NSE_EQ|INFY", dec!(102))]))
        .then(snapshot(&[("NSE_EQ|INFY", dec!(99))]));
    let rig = Rig::new(vec![order.clone()], quotes);
    let scheduler = Scheduler::new(rig.engine.clone(), PERIOD);

    assert!(scheduler.start());

    tokio::time::sleep(PERIOD * 2 + Duration::from_millis(100)).await;
    assert_eq!(rig.quotes.calls(), 2);
    assert_eq!(rig.status(order.id()).await, OrderStatus::Pending);

    tokio::time::sleep(PERIOD).await;
    assert_eq!(rig.quotes.calls(), 3);
    assert_eq!(rig.status(order.id()).await, OrderStatus::Completed);
    assert_eq!(rig.placer.calls(), 1);

    // Nothing pending: later ticks do not ask for quotes.
    tokio::time::sleep(PERIOD * 3).await;
    assert_eq!(rig.quotes.calls(), 3);

    scheduler.shutdown().await;
    assert!(!scheduler.is_running());
}

#[tokio::test(start_paused = true)]
async fn shutdown_before_first_tick_runs_nothing() {
    let order = buy_limit("NSE_EQ|INFY", dec!(100));
    let quotes = ScriptedQuotes::new().then(snapshot(&[("NSE_EQ|INFY", dec!(90))]));
    let rig = Rig::new(vec![order.clone()], quotes);
    let scheduler = Scheduler::new(rig.engine.clone(), PERIOD);

    scheduler.start();
    tokio::time::sleep(PERIOD / 2).await;
    scheduler.shutdown().await;
    tokio::time::sleep(PERIOD * 2).await;

    assert_eq!(rig.quotes.calls(), 0);
    assert_eq!(rig.status(order.id()).await, OrderStatus::Pending);
}
