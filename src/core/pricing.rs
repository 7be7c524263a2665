use crate::models::{BasketQuote, MatchedProduct};

/// Parse a currency-formatted price into cents
///
/// Accepts the formats supermarket catalogs use: "2,49 €", "€2.49",
/// "1.234,56 €", "3 €". The last `,` or `.` followed by one or two digits is
/// the decimal separator, any other separator is digit grouping.
pub fn parse_price(price: &str) -> Option<u64> {
    let cleaned: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == ',' || c == '.');

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let (units, fraction) = match cleaned.rfind([',', '.']) {
        Some(idx) if (1..=2).contains(&(cleaned.len() - idx - 1)) => {
            (&cleaned[..idx], &cleaned[idx + 1..])
        }
        _ => (cleaned, ""),
    };

    let units: String = units.chars().filter(char::is_ascii_digit).collect();
    let units: u64 = if units.is_empty() { 0 } else { units.parse().ok()? };

    let cents: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    units.checked_mul(100)?.checked_add(cents)
}

/// Format cents the way Spanish catalogs do, e.g. "1.234,56 €"
pub fn format_price(cents: u64) -> String {
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{},{:02} €", grouped, cents % 100)
}

impl BasketQuote {
    /// Total a supermarket's matched products
    ///
    /// Products without a parseable price (placeholders) count as unmatched.
    pub fn from_products(supermarket: &str, products: Vec<MatchedProduct>) -> Self {
        let mut total_cents = 0u64;
        let mut matched_items = 0;

        for product in &products {
            if let Some(cents) = parse_price(&product.price) {
                total_cents = total_cents.saturating_add(cents);
                matched_items += 1;
            }
        }

        Self {
            supermarket: supermarket.to_string(),
            total: format_price(total_cents),
            total_cents,
            matched_items,
            unmatched_items: products.len() - matched_items,
            products,
        }
    }
}

/// Rank quotes: most matched items first, then cheapest, then by supermarket id
pub fn rank_quotes(quotes: &mut [BasketQuote]) {
    quotes.sort_by(|a, b| {
        b.matched_items
            .cmp(&a.matched_items)
            .then_with(|| a.total_cents.cmp(&b.total_cents))
            .then_with(|| a.supermarket.cmp(&b.supermarket))
    });
}
