//! Cart View Renderer
//!
//! Projects a cart into table rows and the subtotal/tax/grand-total lines.
//! Row markup is built as a string; everything user- or catalog-supplied
//! goes through [`escape_html`] first.

use crate::domain::Cart;

/// Fixed sales tax rate
pub const TAX_RATE: f64 = 0.05;

/// Placeholder shown for a line without a variation
pub const VARIATION_PLACEHOLDER: &str = "-";

/// Class shared by all replaceable summary lines
pub const SUMMARY_LINE_CLASS: &str = "calc-line";

/// Escape the characters that could break out of text or attribute context
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
    out
}

/// `$` amount with two decimals
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One rendered cart line
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub index: usize,
    pub title_html: String,
    pub variation_html: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: f64,
}

impl CartRow {
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<tr>",
                "<td>{title}</td>",
                "<td>{variation}</td>",
                "<td>{price}</td>",
                r#"<td><input type="number" min="1" value="{qty}" data-index="{idx}" class="cart-qty"></td>"#,
                "<td>{total}</td>",
                r#"<td><button class="remove-item" data-index="{idx}">Remove</button></td>"#,
                "</tr>"
            ),
            title = self.title_html,
            variation = self.variation_html,
            price = self.unit_price,
            qty = self.quantity,
            idx = self.index,
            total = format_money(self.line_total),
        )
    }
}

/// Which summary figure a line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Subtotal,
    Tax,
    Grand,
}

/// A replaceable summary line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryLine {
    pub kind: SummaryKind,
    pub amount: f64,
}

impl SummaryLine {
    pub fn class_name(&self) -> String {
        let modifier = match self.kind {
            SummaryKind::Subtotal => "subtotal",
            SummaryKind::Tax => "tax",
            SummaryKind::Grand => "grand",
        };
        format!("{} {}", SUMMARY_LINE_CLASS, modifier)
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            SummaryKind::Subtotal => "Subtotal",
            SummaryKind::Tax => "Tax (5%)",
            SummaryKind::Grand => "Grand Total",
        }
    }

    pub fn inner_html(&self) -> String {
        format!("{}: <strong>{}</strong>", self.label(), format_money(self.amount))
    }
}

/// Subtotal, tax and grand total for a cart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
}

impl CartSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            grand_total: subtotal + tax,
        }
    }

    /// Lines in the order they are inserted at the top of the summary
    /// container: grand total first, subtotal last, so the page reads
    /// subtotal, tax, grand total.
    pub fn insertion_order(&self) -> [SummaryLine; 3] {
        [
            SummaryLine { kind: SummaryKind::Grand, amount: self.grand_total },
            SummaryLine { kind: SummaryKind::Tax, amount: self.tax },
            SummaryLine { kind: SummaryKind::Subtotal, amount: self.subtotal },
        ]
    }
}

/// The element holding the summary lines, alongside whatever else the page
/// put there (the checkout button, typically)
pub trait SummaryContainer {
    /// Drop every child carrying `class`
    fn remove_lines(&mut self, class: &str);

    /// Insert a line ahead of all current children
    fn prepend_line(&mut self, class_name: &str, inner_html: &str);
}

/// Swap the container's summary lines for `summary`'s, leaving other
/// children in place after them
pub fn replace_summary_lines<C: SummaryContainer + ?Sized>(container: &mut C, summary: &CartSummary) {
    container.remove_lines(SUMMARY_LINE_CLASS);
    for line in summary.insertion_order() {
        container.prepend_line(&line.class_name(), &line.inner_html());
    }
}

/// Full projection of a cart: rows plus summary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub summary: CartSummary,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let variation = item
                    .variation
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .unwrap_or(VARIATION_PLACEHOLDER);
                CartRow {
                    index,
                    title_html: escape_html(&item.title),
                    variation_html: escape_html(variation),
                    unit_price: format_money(item.price),
                    quantity: item.quantity,
                    line_total: item.line_total(),
                }
            })
            .collect();
        Self {
            rows,
            summary: CartSummary::from_cart(cart),
        }
    }

    /// Markup for the table body
    pub fn rows_html(&self) -> String {
        self.rows.iter().map(CartRow::to_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, ProductDetails};

    fn line(title: &str, price: f64, quantity: u32) -> CartItem {
        let mut item = CartItem::new(1, ProductDetails::new(title, price, ""));
        item.quantity = quantity;
        item
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_escape_all_eight_characters() {
        assert_eq!(
            escape_html(r#"&<>"'`/="#),
            "&amp;&lt;&gt;&quot;&#39;&#x60;&#x2F;&#x3D;"
        );
        assert_eq!(escape_html("Plain title"), "Plain title");
    }

    #[test]
    fn test_script_title_is_neutralized() {
        let cart = Cart::from_items(vec![line("<script>alert(1)</script>", 1.0, 1)]);
        let view = CartView::from_cart(&cart);
        let title = &view.rows[0].title_html;
        assert!(!title.contains('<'));
        assert!(!title.contains('>'));
        assert!(!view.rows_html().contains("<script>"));
    }

    #[test]
    fn test_summary_figures() {
        let cart = Cart::from_items(vec![line("A", 10.00, 2), line("B", 5.50, 1)]);
        let summary = CartSummary::from_cart(&cart);
        assert!(close(summary.subtotal, 25.50));
        assert!(close(summary.tax, 1.275));
        assert!(close(summary.grand_total, 26.775));
    }

    #[test]
    fn test_empty_cart_summary_is_zero() {
        let summary = CartSummary::from_cart(&Cart::new());
        assert_eq!(summary, CartSummary::default());
        assert_eq!(CartView::from_cart(&Cart::new()).rows_html(), "");
    }

    #[test]
    fn test_insertion_order_puts_grand_total_first() {
        let cart = Cart::from_items(vec![line("A", 10.0, 1)]);
        let order = CartSummary::from_cart(&cart).insertion_order();
        assert_eq!(order[0].kind, SummaryKind::Grand);
        assert_eq!(order[2].kind, SummaryKind::Subtotal);
        assert_eq!(order[0].class_name(), "calc-line grand");
        assert_eq!(order[2].inner_html(), "Subtotal: <strong>$10.00</strong>");
        assert_eq!(order[1].label(), "Tax (5%)");
    }

    /// Children as (class, inner html), in document order
    struct FakeContainer {
        children: Vec<(String, String)>,
    }

    impl SummaryContainer for FakeContainer {
        fn remove_lines(&mut self, class: &str) {
            self.children
                .retain(|(name, _)| !name.split_whitespace().any(|c| c == class));
        }

        fn prepend_line(&mut self, class_name: &str, inner_html: &str) {
            self.children
                .insert(0, (class_name.to_string(), inner_html.to_string()));
        }
    }

    #[test]
    fn test_repeated_summary_renders_replace_lines() {
        let mut container = FakeContainer {
            children: vec![("checkout-btn".to_string(), "Checkout".to_string())],
        };

        let first = Cart::from_items(vec![line("A", 10.0, 1)]);
        replace_summary_lines(&mut container, &CartSummary::from_cart(&first));
        let second = Cart::from_items(vec![line("A", 10.0, 2)]);
        replace_summary_lines(&mut container, &CartSummary::from_cart(&second));

        let classes: Vec<&str> = container.children.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(
            classes,
            ["calc-line subtotal", "calc-line tax", "calc-line grand", "checkout-btn"]
        );
        assert_eq!(container.children[0].1, "Subtotal: <strong>$20.00</strong>");
        assert_eq!(container.children[1].1, "Tax (5%): <strong>$1.00</strong>");
        assert_eq!(container.children[2].1, "Grand Total: <strong>$21.00</strong>");
    }

    #[test]
    fn test_row_markup() {
        let mut item = line("Tee", 12.5, 2);
        item.variation = Some("L / Red".to_string());
        let view = CartView::from_cart(&Cart::from_items(vec![line("Cap", 3.0, 1), item]));
        let row = &view.rows[1];

        assert_eq!(row.variation_html, "L &#x2F; Red");
        assert_eq!(row.unit_price, "$12.50");
        assert_eq!(view.rows[0].variation_html, VARIATION_PLACEHOLDER);

        let html = row.to_html();
        assert!(html.contains(r#"value="2" data-index="1" class="cart-qty""#));
        assert!(html.contains(r#"<button class="remove-item" data-index="1">Remove</button>"#));
        assert!(html.contains("<td>$25.00</td>"));
    }
}
