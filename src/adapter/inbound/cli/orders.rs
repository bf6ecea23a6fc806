//! Order file listing.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::command::OrdersArgs;
use super::{config, output};
use crate::domain::order::{OrderStatus, TargetOrder};
use crate::port::inbound::operator::port::OperatorPort;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Type")]
    order_type: &'static str,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&TargetOrder> for OrderRow {
    fn from(order: &TargetOrder) -> Self {
        let symbol = if order.symbol().is_empty() {
            order.instrument_token().to_string()
        } else {
            order.symbol().to_string()
        };
        Self {
            id: order.id().to_string(),
            symbol,
            side: order.transaction_type().as_str(),
            order_type: order.order_type().as_str(),
            quantity: order.quantity(),
            target: order.target_price().to_string(),
            status: paint_status(order.status()),
            created: order.created_at().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn paint_status(status: OrderStatus) -> String {
    let label = status.as_str();
    match status {
        OrderStatus::Pending => label.yellow().to_string(),
        OrderStatus::Triggered => label.cyan().to_string(),
        OrderStatus::Completed => label.green().to_string(),
        OrderStatus::Failed => label.red().to_string(),
    }
}

/// Render the order file as a table.
pub fn execute(operator: &dyn OperatorPort, args: &OrdersArgs) -> miette::Result<()> {
    let orders = operator.load_orders(&config::path_arg(&args.file)).map_err(|e| {
        miette::Report::msg(e.to_string())
            .wrap_err(format!("failed to read orders from {}", args.file.display()))
    })?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("File", args.file.display());

    let total = orders.len();
    let shown: Vec<&TargetOrder> = orders
        .iter()
        .filter(|o| !args.pending || o.is_pending())
        .collect();

    if shown.is_empty() {
        output::warning("No orders to show");
        return Ok(());
    }

    let rows: Vec<OrderRow> = shown.iter().map(|o| OrderRow::from(*o)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    output::section("Orders");
    output::lines(&table.to_string());

    let pending = orders.iter().filter(|o| o.is_pending()).count();
    output::field("Total", total);
    output::field("Pending", output::highlight(pending));
    Ok(())
}
