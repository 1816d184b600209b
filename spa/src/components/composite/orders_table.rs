use shared::Order;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub orders: Vec<Order>,
    pub is_recurring: bool,
}

/// Formats an amount in cents, e.g. `1050, "cad"` as `10.50 CAD`.
pub fn format_currency(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let amount = format!("{sign}{}.{:02}", cents / 100, cents % 100);
    if currency.is_empty() {
        amount
    } else {
        format!("{amount} {}", currency.to_uppercase())
    }
}

pub fn status_badge(status_id: i64) -> Html {
    match status_id {
        1 => html! { <span class="badge bg-success">{"Cleared"}</span> },
        2 => html! { <span class="badge bg-danger">{"Refunded"}</span> },
        3 => html! { <span class="badge bg-warning text-dark">{"Cancelled"}</span> },
        _ => html! { <span class="badge bg-secondary">{"Unknown"}</span> },
    }
}

fn render_order(order: &Order, is_recurring: bool) -> Html {
    let customer = format!("{} {}", order.customer.first_name, order.customer.last_name);
    let amount = format_currency(order.transaction.amount, &order.transaction.currency);
    let amount = if is_recurring {
        format!("{amount}/month")
    } else {
        amount
    };

    html! {
        <tr key={order.id}>
            <td>{order.id.to_string()}</td>
            <td>{customer}</td>
            <td>{&order.widget.name}</td>
            <td>{amount}</td>
            <td>{status_badge(order.status_id)}</td>
        </tr>
    }
}

#[function_component(OrdersTable)]
pub fn orders_table(props: &Props) -> Html {
    let content = if props.orders.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="text-center text-muted">{"No data found"}</td>
            </tr>
        }
    } else {
        let rows = props
            .orders
            .iter()
            .map(|order| render_order(order, props.is_recurring));
        rows.collect::<Html>()
    };

    html! {
        <table class="table table-striped table-hover">
            <thead>
              <tr>
                <th>{"Transaction"}</th>
                <th>{"Customer"}</th>
                <th>{"Product"}</th>
                <th>{"Amount"}</th>
                <th>{"Status"}</th>
              </tr>
            </thead>
            <tbody>
                {content}
            </tbody>
        </table>
    }
}
