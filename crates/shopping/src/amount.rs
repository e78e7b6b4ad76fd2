use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d*)?|\.\d+)").expect("leading number regex"));

/// A free-text amount split into a quantity and whatever text surrounds it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAmount {
    /// "2 cups", "200g", "1.5"
    Numeric { quantity: f64, unit: String },
    /// "as needed", "to taste", ""
    Opaque { text: String },
}

impl ParsedAmount {
    pub fn parse(amount: &str) -> ParsedAmount {
        let quantity = LEADING_NUMBER
            .captures(amount)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());

        match quantity {
            Some(quantity) => ParsedAmount::Numeric {
                quantity,
                unit: strip_quantity(amount),
            },
            None => ParsedAmount::Opaque {
                text: amount.trim().to_owned(),
            },
        }
    }

    pub fn quantity(&self) -> Option<f64> {
        match self {
            ParsedAmount::Numeric { quantity, .. } => Some(*quantity),
            ParsedAmount::Opaque { .. } => None,
        }
    }

    pub fn unit(&self) -> &str {
        match self {
            ParsedAmount::Numeric { unit, .. } => unit,
            ParsedAmount::Opaque { text } => text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ParsedAmount::Numeric { .. })
    }
}

/// Removes every digit and period, then trims: "2.5 cups" -> "cups", "200g" -> "g".
pub fn strip_quantity(amount: &str) -> String {
    amount
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.')
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Shortest decimal form of a quantity: 4.0 -> "4", 2.5 -> "2.5".
pub fn format_quantity(quantity: f64) -> String {
    format!("{quantity}")
}

/// Merges the amounts of two ingredients that share an aggregation key.
///
/// No unit conversion happens. The left unit wins when both sides have one,
/// so "1 cup" + "250 ml" gives "251 cup".
pub fn combine(left: &str, right: &str) -> String {
    if left.trim().is_empty() {
        return right.to_owned();
    }

    if right.trim().is_empty() {
        return left.to_owned();
    }

    let parsed_left = ParsedAmount::parse(left);
    let parsed_right = ParsedAmount::parse(right);
    let total = parsed_left.quantity().unwrap_or(0.0) + parsed_right.quantity().unwrap_or(0.0);

    if total == 0.0 {
        if !parsed_left.is_numeric() && parsed_right.is_numeric() {
            return right.to_owned();
        }

        return left.to_owned();
    }

    let unit = if parsed_left.unit().is_empty() {
        parsed_right.unit()
    } else {
        parsed_left.unit()
    };

    if unit.is_empty() {
        format_quantity(total)
    } else {
        format!("{} {unit}", format_quantity(total))
    }
}
