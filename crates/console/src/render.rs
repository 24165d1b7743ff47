//! Pure rendering of the filtered order sequence and the aggregate counts.

use core::fmt::Write as _;

use orderdesk_dispatch::{Order, OrderStats};

use crate::escape::{escape_for_display, sanitize_for_terminal};

const EMPTY_STATE: &str = "No orders found";

/// Markup for the order table body plus the empty-state toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMarkup {
    /// `<tr>` rows, one per order. Empty when there is nothing to show.
    pub body: String,
    /// Whether the "no orders" placeholder should be visible.
    pub show_empty_state: bool,
}

/// Render table-body rows for the order widget.
///
/// Every string that came from user input goes through [`escape_for_display`].
pub fn html_rows(orders: &[&Order]) -> TableMarkup {
    if orders.is_empty() {
        return TableMarkup {
            body: String::new(),
            show_empty_state: true,
        };
    }

    let mut body = String::new();
    for order in orders {
        let id = escape_for_display(order.order_id().as_str());
        let (badge_class, badge_text) = if order.is_paid() {
            ("badge-paid", "✓ Paid")
        } else {
            ("badge-unpaid", "✗ Unpaid")
        };

        // Writing to a String cannot fail.
        let _ = write!(
            body,
            concat!(
                "<tr>\n",
                "    <td><strong>{id}</strong></td>\n",
                "    <td>{name}</td>\n",
                "    <td style=\"text-align: center;\">{items}</td>\n",
                "    <td style=\"text-align: center;\">{distance}</td>\n",
                "    <td style=\"text-align: center;\">\n",
                "        <span class=\"badge {badge_class}\">{badge_text}</span>\n",
                "    </td>\n",
                "    <td style=\"text-align: center;\">\n",
                "        <button class=\"icon-btn\" data-order-id=\"{id}\" title=\"Delete\">🗑️</button>\n",
                "    </td>\n",
                "</tr>\n",
            ),
            id = id,
            name = escape_for_display(order.restaurant_name()),
            items = order.item_count(),
            distance = order.delivery_distance(),
            badge_class = badge_class,
            badge_text = badge_text,
        );
    }

    TableMarkup {
        body,
        show_empty_state: false,
    }
}

/// Fixed-width plain-text table for terminals.
pub fn text_table(orders: &[&Order]) -> String {
    if orders.is_empty() {
        return format!("{EMPTY_STATE}\n");
    }

    let headers = ["ORDER ID", "RESTAURANT", "ITEMS", "KM", "STATUS"];
    let rows: Vec<[String; 5]> = orders
        .iter()
        .map(|o| {
            [
                sanitize_for_terminal(o.order_id().as_str()),
                sanitize_for_terminal(o.restaurant_name()),
                o.item_count().to_string(),
                o.delivery_distance().to_string(),
                if o.is_paid() { "Paid" } else { "Unpaid" }.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// One-line summary of the counters panel.
pub fn stats_line(stats: OrderStats) -> String {
    format!(
        "Total: {} | Unpaid: {} | Paid: {}",
        stats.total, stats.unpaid, stats.paid
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_dispatch::{NewOrder, OrderStore};

    fn store_with(rows: &[(&str, &str, bool, f64)]) -> OrderStore {
        let mut store = OrderStore::new();
        for (id, name, paid, dist) in rows {
            store.add(NewOrder::new(*id, *name, 2, *paid, *dist)).unwrap();
        }
        store
    }

    #[test]
    fn empty_sequence_shows_empty_state() {
        let markup = html_rows(&[]);
        assert!(markup.show_empty_state);
        assert!(markup.body.is_empty());
        assert_eq!(text_table(&[]), "No orders found\n");
    }

    #[test]
    fn html_rows_escape_untrusted_text() {
        let store = store_with(&[("<x>", "Tom & Jerry's", false, 1.5)]);
        let orders: Vec<&Order> = store.iter().collect();
        let markup = html_rows(&orders);

        assert!(!markup.show_empty_state);
        assert!(markup.body.contains("<td><strong>&lt;x&gt;</strong></td>"));
        assert!(markup.body.contains("<td>Tom &amp; Jerry&#039;s</td>"));
        assert!(markup.body.contains("data-order-id=\"&lt;x&gt;\""));
        assert!(markup.body.contains("badge badge-unpaid\">✗ Unpaid"));
        assert!(markup.body.contains(">1.5</td>"));
    }

    #[test]
    fn html_rows_follow_input_order() {
        let store = store_with(&[("B", "Burger Barn", true, 2.0), ("A", "Pizza Palace", false, 1.0)]);
        let orders: Vec<&Order> = store.iter().collect();
        let body = html_rows(&orders).body;

        let b = body.find("<strong>B</strong>").unwrap();
        let a = body.find("<strong>A</strong>").unwrap();
        assert!(b < a);
        assert_eq!(body.matches("<tr>").count(), 2);
    }

    #[test]
    fn text_table_aligns_columns() {
        let store = store_with(&[
            ("ORD001", "Pizza Palace", true, 3.5),
            ("ORD2", "Taco Time", false, 12.0),
        ]);
        let orders: Vec<&Order> = store.iter().collect();

        let expected = "\
ORDER ID  RESTAURANT    ITEMS  KM   STATUS
--------  ------------  -----  ---  ------
ORD001    Pizza Palace  2      3.5  Paid
ORD2      Taco Time     2      12   Unpaid
";
        assert_eq!(text_table(&orders), expected);
    }

    #[test]
    fn stats_line_lists_total_unpaid_paid() {
        let line = stats_line(OrderStats {
            total: 4,
            paid: 2,
            unpaid: 2,
        });
        assert_eq!(line, "Total: 4 | Unpaid: 2 | Paid: 2");
    }
}
