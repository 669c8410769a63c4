// Utility helpers for field normalization and number formatting.
//
// This module centralizes all the "dirty" text handling so the rest of the
// code can assume clean, typed values. Every normalizer here is total: bad
// input maps to a default score or 0, never to an error.
use num_format::{Locale, ToFormattedString};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d,]+").expect("number pattern"));

/// Map a health/social risk label to a 0-10 score.
///
/// Matching is substring-based, first match wins:
/// - "Extremely High" scores 10 when paired with "Carcinogenic", else 9.
/// - "Very High" or a bare "Carcinogenic" scores 8.
/// - "High" 6, "Moderate" 4, "Low" 2.
/// - Anything else, including a missing value, scores 0.
pub fn risk_to_score(risk: Option<&str>) -> u8 {
    let Some(risk) = risk else {
        return 0;
    };
    if risk.contains("Extremely High") {
        if risk.contains("Carcinogenic") {
            10
        } else {
            9
        }
    } else if risk.contains("Very High") || risk.contains("Carcinogenic") {
        8
    } else if risk.contains("High") {
        6
    } else if risk.contains("Moderate") {
        4
    } else if risk.contains("Low") {
        2
    } else {
        0
    }
}

/// Map a celebrity-influence label to a 0-5 score via exact (trimmed) lookup.
pub fn influence_to_score(influence: Option<&str>) -> u8 {
    match influence.map(str::trim) {
        Some("Extremely High") => 5,
        Some("Very High") => 4,
        Some("High") => 3,
        Some("Medium") | Some("Moderate") => 2,
        Some("Low") => 1,
        _ => 0,
    }
}

/// Parse a contract amount in crores. `"N/A"` (any case), empty, or
/// unparseable values become 0. Thousands separators are stripped.
pub fn parse_amount(amount: Option<&str>) -> f64 {
    let Some(amount) = amount.map(str::trim) else {
        return 0.0;
    };
    if amount.is_empty() || amount.eq_ignore_ascii_case("n/a") {
        return 0.0;
    }
    amount.replace(',', "").parse::<f64>().unwrap_or(0.0)
}

/// Extract the first number from a free-form revenue description like
/// `"₹6,384 crore (FY24)"`. `"Not disclosed"` short-circuits to 0 before
/// any extraction is attempted.
pub fn extract_revenue(revenue: Option<&str>) -> f64 {
    let Some(revenue) = revenue else {
        return 0.0;
    };
    if revenue.contains("Not disclosed") {
        return 0.0;
    }
    match NUMBER_RE.find(revenue) {
        Some(m) => m.as_str().replace(',', "").parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Bucket a 0-10 risk score into a category label.
pub fn risk_category(score: u8) -> &'static str {
    if score >= 8 {
        "Extremely High Risk"
    } else if score >= 6 {
        "High Risk"
    } else if score >= 4 {
        "Moderate Risk"
    } else if score >= 2 {
        "Low Risk"
    } else {
        "Minimal Risk"
    }
}

/// Ordinal social-responsibility score for a celebrity's endorsement risk
/// level. Lower is worse; unknown labels land in the middle at 5.
pub fn responsibility_score(risk_level: &str) -> u8 {
    match risk_level {
        "Very High" => 2,
        "High" => 4,
        "Medium" => 6,
        "Low" => 8,
        _ => 5,
    }
}

/// Round to one decimal place.
pub fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Format a floating-point value with:
    // - a fixed number of decimal places, and
    // - locale-aware thousands separators (e.g., `1,234,567.89`).
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    // First, format to a plain fixed-decimal string like `1234567.89`.
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Use `num-format` to insert commas into the integer portion.
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values, used for row
    // counts in console messages (e.g., `1,024 rows loaded`).
    n.to_formatted_string(&Locale::en)
}
