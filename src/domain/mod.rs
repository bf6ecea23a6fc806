//! Exchange-agnostic domain logic: orders, quotes and trigger conditions.

pub mod condition;
pub mod error;
pub mod id;
pub mod money;
pub mod order;
pub mod quote;
