//! Price arithmetic and storefront price display.

use rust_decimal::Decimal;

const PERSIAN_GROUP_SEPARATOR: char = '\u{066C}';

/// Price after applying a percentage discount.
///
/// `final_price(1000, 10) == 900`. No rounding is applied; display
/// formatting happens in [`format_toman`].
///
/// Amounts too large to represent fall back to the undiscounted
/// `base_price`.
#[must_use]
pub fn final_price(base_price: Decimal, discount_percent: Decimal) -> Decimal {
    let factor = discount_percent
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|d| Decimal::ONE.checked_sub(d));
    match factor.and_then(|f| base_price.checked_mul(f)) {
        Some(price) => price,
        None => {
            tracing::warn!(
                %base_price,
                %discount_percent,
                "discounted price overflows, using base price"
            );
            base_price
        }
    }
}

/// Formats an amount the way the storefront shows prices: Persian digits,
/// grouped in threes with the Arabic thousands separator. The fractional
/// part is dropped.
#[must_use]
pub fn format_toman(amount: Decimal) -> String {
    let whole = amount.trunc().abs().normalize();
    if whole.is_zero() {
        return to_persian_digits("0");
    }

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(PERSIAN_GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}", to_persian_digits(&grouped))
}

fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            // U+06F0 EXTENDED ARABIC-INDIC DIGIT ZERO
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
