//! Template-driven rendering of a parsed stamp.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::stamp::Stamp;

/// Template applied when the caller does not supply one.
pub const DEFAULT_TEMPLATE: &str = "YYYY-MM-DD HH:mm";

/// Render `stamp` through `template`.
///
/// Recognized tokens: `YYYY` `YY` (year), `MM` `M` (month), `DD` `D`
/// (day), `HH` `H` (24-hour), `hh` `h` (12-hour), `mm` `m` (minute),
/// `ss` `s` (second), `A` `a` (meridiem). Everything else passes through
/// literally. The scan is left-to-right, longest token first, and an
/// unpadded single-letter token only substitutes when the next character
/// is not an ASCII letter, so the `M` in `May` stays text while the `M`
/// in `D/M` is the month.
///
/// The invalid sentinel renders as the empty string.
pub fn format(stamp: Stamp, template: &str) -> String {
    match stamp.instant() {
        Some(instant) => render(&instant, template),
        None => String::new(),
    }
}

fn render(instant: &NaiveDateTime, template: &str) -> String {
    let year = instant.year().to_string();
    let month = instant.month();
    let day = instant.day();
    let hour = instant.hour();
    // Both 0 and 12 render as 12 on the 12-hour clock.
    let hour12 = (hour + 11) % 12 + 1;
    let minute = instant.minute();
    let second = instant.second();
    let meridiem = if hour < 12 { "am" } else { "pm" };

    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            out.push_str(&year);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("YY") {
            out.push_str(&year[year.len().saturating_sub(2)..]);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&pad2(month));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            out.push_str(&pad2(day));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("HH") {
            out.push_str(&pad2(hour));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("hh") {
            out.push_str(&pad2(hour12));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("mm") {
            out.push_str(&pad2(minute));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("ss") {
            out.push_str(&pad2(second));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('A') {
            out.push_str(if hour < 12 { "AM" } else { "PM" });
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('a') {
            out.push_str(meridiem);
            rest = tail;
        } else if let Some((token, tail)) = bare_token(rest) {
            let value = match token {
                'M' => month,
                'D' => day,
                'H' => hour,
                'h' => hour12,
                'm' => minute,
                _ => second,
            };
            out.push_str(&value.to_string());
            rest = tail;
        } else {
            // Literal passthrough, one character at a time.
            let mut chars = rest.chars();
            match chars.next() {
                Some(ch) => {
                    out.push(ch);
                    rest = chars.as_str();
                }
                None => break,
            }
        }
    }
    out
}

/// A single-letter token, provided the following character is not an
/// ASCII letter.
fn bare_token(rest: &str) -> Option<(char, &str)> {
    let first = rest.chars().next()?;
    if !matches!(first, 'M' | 'D' | 'H' | 'h' | 'm' | 's') {
        return None;
    }
    let tail = &rest[first.len_utf8()..];
    if tail.chars().next().is_some_and(|next| next.is_ascii_alphabetic()) {
        return None;
    }
    Some((first, tail))
}

fn pad2(value: u32) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Stamp {
        Stamp::from(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap(),
        )
    }

    #[test]
    fn default_template_shape() {
        assert_eq!(
            format(stamp(2025, 6, 8, 9, 5, 0), DEFAULT_TEMPLATE),
            "2025-06-08 09:05"
        );
    }

    #[test]
    fn padded_day_month_year() {
        assert_eq!(format(stamp(2025, 6, 8, 9, 5, 0), "DD/MM/YYYY"), "08/06/2025");
    }

    #[test]
    fn unpadded_tokens() {
        assert_eq!(format(stamp(2025, 6, 8, 9, 5, 3), "D/M/YY H:m:s"), "8/6/25 9:5:3");
    }

    #[test]
    fn twelve_hour_clock_renders_midnight_and_noon_as_twelve() {
        assert_eq!(format(stamp(2025, 6, 8, 0, 0, 0), "h a"), "12 am");
        assert_eq!(format(stamp(2025, 6, 8, 12, 0, 0), "h A"), "12 PM");
        assert_eq!(format(stamp(2025, 6, 8, 15, 30, 0), "hh:mm a"), "03:30 pm");
    }

    #[test]
    fn single_letter_followed_by_a_letter_stays_literal() {
        // The "M" of "Mer" is followed by a letter; the bare "D" is not.
        assert_eq!(format(stamp(2025, 6, 8, 0, 0, 0), "Mer D"), "Mer 8");
        assert_eq!(format(stamp(2025, 6, 8, 0, 0, 0), "le DD"), "le 08");
    }

    #[test]
    fn literal_punctuation_passes_through() {
        assert_eq!(
            format(stamp(2025, 6, 8, 14, 5, 33), "YYYY-MM-DD, HH:mm:ss"),
            "2025-06-08, 14:05:33"
        );
    }

    #[test]
    fn two_digit_year() {
        assert_eq!(format(stamp(1950, 1, 1, 0, 0, 0), "YY"), "50");
        assert_eq!(format(stamp(2003, 1, 1, 0, 0, 0), "YY"), "03");
    }

    #[test]
    fn invalid_renders_empty() {
        assert_eq!(format(Stamp::INVALID, DEFAULT_TEMPLATE), "");
        assert_eq!(format(Stamp::INVALID, "literal text"), "");
    }
}
