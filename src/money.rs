// Whole-unit currency display

/// Formats an amount the way `en-IN` does: last three digits, then groups of two.
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_indian(&amount.to_string()))
}

pub fn format_usd(amount: u64) -> String {
    format!("${}", amount)
}

pub fn format_amount(currency: &str, amount: u64) -> String {
    match currency {
        "INR" => format_inr(amount),
        "USD" => format_usd(amount),
        other => format!("{} {}", other, amount),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "₹0"; "zero")]
    #[test_case(329, "₹329"; "hundreds")]
    #[test_case(1000, "₹1,000"; "thousand")]
    #[test_case(56700, "₹56,700"; "ten thousands")]
    #[test_case(123456, "₹1,23,456"; "lakh")]
    #[test_case(12345678, "₹1,23,45,678"; "crore")]
    fn test_format_inr(amount: u64, expected: &str) {
        assert_eq!(format_inr(amount), expected);
    }

    #[test]
    fn test_format_amount_by_currency() {
        assert_eq!(format_amount("USD", 510), "$510");
        assert_eq!(format_amount("INR", 1510), "₹1,510");
        assert_eq!(format_amount("EUR", 42), "EUR 42");
    }
}
