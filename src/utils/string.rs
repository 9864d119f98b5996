//! String utility functions

/// Format a number with thousands separators
pub fn format_number_with_separators(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let chars: Vec<char> = s.chars().collect();

    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }

    result
}

/// Two decimal places, rounding half up on the shortest decimal form of `value`.
///
/// `{:.2}` rounds 0.125 to "0.12"; this gives "0.13". Meant for non-negative values.
pub fn format_two_decimals(value: f64) -> String {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let digits: String = digits.into_iter().map(char::from).collect();
    format!("{}.{}", &digits[..split], &digits[split..])
}

/// Convert string to title case
pub fn to_title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_separators() {
        assert_eq!(format_number_with_separators(0), "0");
        assert_eq!(format_number_with_separators(999), "999");
        assert_eq!(format_number_with_separators(5000), "5,000");
        assert_eq!(format_number_with_separators(1234567), "1,234,567");
    }

    #[test]
    fn test_format_two_decimals_rounds_half_up() {
        assert_eq!(format_two_decimals(0.125), "0.13");
        assert_eq!(format_two_decimals(0.375), "0.38");
        assert_eq!(format_two_decimals(0.625), "0.63");
        assert_eq!(format_two_decimals(201.0 / 200.0), "1.01");
        assert_eq!(format_two_decimals(0.124), "0.12");
    }

    #[test]
    fn test_format_two_decimals_padding_and_carry() {
        assert_eq!(format_two_decimals(0.0), "0.00");
        assert_eq!(format_two_decimals(5.0), "5.00");
        assert_eq!(format_two_decimals(0.5), "0.50");
        assert_eq!(format_two_decimals(1.0 / 3.0), "0.33");
        assert_eq!(format_two_decimals(0.999), "1.00");
        assert_eq!(format_two_decimals(9.995), "10.00");
        assert_eq!(format_two_decimals(1234.5), "1234.50");
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("BUILD BATTLE"), "Build Battle");
        assert_eq!(to_title_case("quakecraft"), "Quakecraft");
    }
}
