//! Custom Askama template filters.

use std::fmt::Display;

/// Formats a currency amount as dollars with two decimals, e.g. `$79.99`.
///
/// Usage in templates: `{{ product.price|usd }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn usd(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_usd(&amount))
}

fn format_usd(amount: &impl Display) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formats_two_decimals() {
        assert_eq!(format_usd(&79.99_f64), "$79.99");
        assert_eq!(format_usd(&130.0_f64), "$130.00");
    }
}
