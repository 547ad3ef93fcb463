use std::str::FromStr;

use rust_decimal::Decimal;

use super::ExtractError;

/// Arabic thousands separator used in formatted prices
const THOUSANDS_SEPARATOR: &str = "\u{066C}";

/// Currency unit word (toman) appended to prices
const CURRENCY_UNIT: &str = "تومان";

/// Map Persian and Arabic-Indic digits to ASCII and drop everything that is
/// neither a digit nor a period.
pub fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '۰'..='۹' => char::from_digit(c as u32 - '۰' as u32, 10),
            '٠'..='٩' => char::from_digit(c as u32 - '٠' as u32, 10),
            '0'..='9' | '.' => Some(c),
            _ => None,
        })
        .collect()
}

/// Parse a formatted price such as `۱٬۲۳۴٬۰۰۰ تومان` into an exact decimal.
pub fn parse_currency(field: &'static str, input: &str) -> Result<Decimal, ExtractError> {
    let cleaned = input
        .replace(THOUSANDS_SEPARATOR, "")
        .replace(CURRENCY_UNIT, "");

    parse_decimal(field, &normalize_digits(cleaned.trim()))
}

/// Parse a value with localized digits (area, slider amounts) as a decimal.
pub fn parse_localized_decimal(field: &'static str, input: &str) -> Result<Decimal, ExtractError> {
    parse_decimal(field, &normalize_digits(input))
}

/// Parse a value with localized digits (year, room count) as an integer.
pub fn parse_localized_int(field: &'static str, input: &str) -> Result<i32, ExtractError> {
    let digits = normalize_digits(input);
    digits.parse::<i32>().map_err(|_| ExtractError::InvalidInteger {
        field,
        input: input.to_string(),
    })
}

/// Parse an already plain decimal literal, as the rent slider carries.
/// Exponent forms such as `1.5e8` are accepted too.
pub fn parse_decimal(field: &'static str, input: &str) -> Result<Decimal, ExtractError> {
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| ExtractError::InvalidDecimal {
            field,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_persian_and_arabic_digits() {
        assert_eq!(normalize_digits("۱۴۰۲"), "1402");
        assert_eq!(normalize_digits("٣٥"), "35");
        assert_eq!(normalize_digits("۸۵.۵ متر"), "85.5");
        assert_eq!(normalize_digits("قبل از ۱۳۷۰"), "1370");
    }

    #[test]
    fn currency_strips_separator_and_unit() {
        let value = parse_currency("rent", "۱٬۲۳۴٬۰۰۰ تومان").unwrap();
        assert_eq!(value, Decimal::from(1_234_000));
    }

    #[test]
    fn currency_keeps_fraction_exact() {
        let value = parse_currency("mortgage", "۲۵۰.۵ تومان").unwrap();
        assert_eq!(value, Decimal::new(2505, 1));
    }

    #[test]
    fn currency_rejects_text_without_digits() {
        let err = parse_currency("rent", "تماس بگیرید").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDecimal { field: "rent", .. }));
        assert!(err.to_string().starts_with("rent: not a decimal value"));
    }

    #[test]
    fn integers_parse_after_normalization() {
        assert_eq!(parse_localized_int("rooms", "۳").unwrap(), 3);
        assert!(parse_localized_int("rooms", "").is_err());
    }

    #[test]
    fn plain_decimal_does_not_strip_units() {
        assert_eq!(parse_decimal("credit", "200000000").unwrap(), Decimal::from(200_000_000));
        assert!(parse_decimal("credit", "200000000 تومان").is_err());
    }

    #[test]
    fn plain_decimal_accepts_exponent_form() {
        assert_eq!(parse_decimal("credit", "1e8").unwrap(), Decimal::from(100_000_000));
        assert_eq!(parse_decimal("rent", "1.5e6").unwrap(), Decimal::from(1_500_000));
        assert!(parse_decimal("rent", "e8").is_err());
    }
}
