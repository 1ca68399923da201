//! Formatting helpers for presenting metrics.
//!
//! English groups thousands with `,` and uses `.` for decimals. French groups
//! with a narrow no-break space (U+202F) and uses `,` for decimals.

use crate::i18n::Language;

const NARROW_NBSP: char = '\u{202f}';

fn group_separator(language: Language) -> char {
    match language {
        Language::En => ',',
        Language::Fr => NARROW_NBSP,
    }
}

fn decimal_separator(language: Language) -> char {
    match language {
        Language::En => '.',
        Language::Fr => ',',
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// `8547` → "8,547" / "8 547".
pub fn format_integer(value: u64, language: Language) -> String {
    group_digits(&value.to_string(), group_separator(language))
}

/// Fixed-point number with locale separators. Non-finite values render as "—".
pub fn format_decimal(value: f64, decimals: usize, language: Language) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));

    let mut out = String::new();
    // Avoid "-0.0" after rounding.
    if value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, group_separator(language)));
    if !frac_part.is_empty() {
        out.push(decimal_separator(language));
        out.push_str(frac_part);
    }
    out
}

/// "7.2h" / "7,2 h".
pub fn format_hours(value: f64, language: Language) -> String {
    let number = format_decimal(value, 1, language);
    match language {
        Language::En => format!("{number}h"),
        Language::Fr => format!("{number}\u{a0}h"),
    }
}

pub fn format_bpm(value: u32) -> String {
    format!("{value} BPM")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_group_by_thousands() {
        assert_eq!(format_integer(8547, Language::En), "8,547");
        assert_eq!(format_integer(8547, Language::Fr), "8\u{202f}547");
        assert_eq!(format_integer(1_234_567, Language::En), "1,234,567");
        assert_eq!(format_integer(999, Language::En), "999");
        assert_eq!(format_integer(0, Language::Fr), "0");
    }

    #[test]
    fn decimals_use_locale_separator() {
        assert_eq!(format_decimal(72.24, 1, Language::En), "72.2");
        assert_eq!(format_decimal(7.2, 1, Language::Fr), "7,2");
        assert_eq!(format_decimal(200.0, 0, Language::En), "200");
        assert_eq!(format_decimal(1500.5, 1, Language::En), "1,500.5");
    }

    #[test]
    fn negative_values_keep_sign_unless_rounded_to_zero() {
        assert_eq!(format_decimal(-3.5, 1, Language::En), "-3.5");
        assert_eq!(format_decimal(-0.01, 1, Language::En), "0.0");
    }

    #[test]
    fn non_finite_values_render_placeholder() {
        assert_eq!(format_decimal(f64::NAN, 1, Language::En), "—");
        assert_eq!(format_decimal(f64::INFINITY, 0, Language::Fr), "—");
    }

    #[test]
    fn hours_and_heart_rate() {
        assert_eq!(format_hours(7.2, Language::En), "7.2h");
        assert_eq!(format_hours(7.2, Language::Fr), "7,2\u{a0}h");
        assert_eq!(format_bpm(72), "72 BPM");
    }
}
