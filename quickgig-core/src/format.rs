use itertools::Itertools;

use quickgig_entities::price::*;

const CURRENCY_SUFFIX: &str = "원";
const TEN_THOUSAND: Won = 10_000;
const TEN_THOUSAND_SUFFIX: &str = "만";

/// Insert a separator between every group of three digits.
pub fn group_thousands(amount: Won) -> String {
    let digits: Vec<char> = amount.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .join(",")
}

/// `150000` → `150,000원`
pub fn format_price(amount: Won) -> String {
    format!("{}{CURRENCY_SUFFIX}", group_thousands(amount))
}

/// `150000` → `15만원`, `25000` → `2.5만원`
///
/// Amounts below ten thousand are formatted like [`format_price`].
pub fn abbreviate_price(amount: Won) -> String {
    if amount < TEN_THOUSAND {
        return format_price(amount);
    }
    // Rounded to one decimal place
    let tenths = amount.saturating_add(TEN_THOUSAND / 20) / (TEN_THOUSAND / 10);
    let units = group_thousands(tenths / 10);
    match tenths % 10 {
        0 => format!("{units}{TEN_THOUSAND_SUFFIX}{CURRENCY_SUFFIX}"),
        fraction => format!("{units}.{fraction}{TEN_THOUSAND_SUFFIX}{CURRENCY_SUFFIX}"),
    }
}

/// `150000` per job → `150,000원 / 건`
pub fn format_price_with_unit(price: &Price) -> String {
    format!("{} / {}", format_price(price.amount), price.unit.label())
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(25_000), "25,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn full_price() {
        assert_eq!(format_price(150_000), "150,000원");
        assert_eq!(format_price(9_000), "9,000원");
        assert_eq!(
            format_price_with_unit(&Price::new(25_000, PriceUnit::PerHour)),
            "25,000원 / 시간"
        );
    }

    #[test]
    fn abbreviated_price() {
        assert_eq!(abbreviate_price(150_000), "15만원");
        assert_eq!(abbreviate_price(25_000), "2.5만원");
        assert_eq!(abbreviate_price(12_345), "1.2만원");
        assert_eq!(abbreviate_price(9_000), "9,000원");
        assert_eq!(abbreviate_price(100_000_000), "10,000만원");
        assert_eq!(abbreviate_price(10_505_000), "1,050.5만원");
        assert_eq!(abbreviate_price(10_400), "1만원");
    }

    #[test]
    fn rating_with_one_decimal() {
        assert_eq!(format_rating(4.8), "4.8");
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(4.6789), "4.7");
    }
}
