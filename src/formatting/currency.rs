/// Formats an amount in centavos as Brazilian Real, e.g. `150000` -> `R$ 1.500,00`.
pub fn format_price(minor_units: i64) -> String {
    let cents = minor_units.unsigned_abs();
    let reais = group_thousands(cents / 100);
    let sign = if minor_units < 0 { "-" } else { "" };
    format!("{sign}R$ {reais},{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(150_000), "R$ 1.500,00");
        assert_eq!(format_price(0), "R$ 0,00");
        assert_eq!(format_price(5), "R$ 0,05");
        assert_eq!(format_price(99_990), "R$ 999,90");
        assert_eq!(format_price(123_456_789), "R$ 1.234.567,89");
        assert_eq!(format_price(-250), "-R$ 2,50");
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        assert_eq!(format_price(i64::MIN), "-R$ 92.233.720.368.547.758,08");
    }
}
