//! Order book operator implementation.

use std::path::Path;

use crate::domain::order::TargetOrder;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::orders::OrderBookOperator;

use super::entry::Operator;

impl OrderBookOperator for Operator {
    fn load_orders(&self, path: &str) -> Result<Vec<TargetOrder>> {
        bootstrap::load_orders(Path::new(path))
    }
}
