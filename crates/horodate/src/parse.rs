//! Free-form date text recognition.
//!
//! The entry points [`parse`] and [`parse_at`] turn locale-specific forum
//! timestamp text into a [`Stamp`]. Recognition is an ordered cascade of
//! regex rules evaluated top-down; the first rule whose match also yields
//! an instant wins. Rule order is load-bearing: several layouts share a
//! textual shape (a day-first and a month-first slash date are
//! indistinguishable) and are told apart only by their position in the
//! table. Text no rule claims goes through a small set of generic layouts
//! before degrading to the invalid sentinel.

use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

use crate::stamp::{apply_meridiem, assemble_fields, at_time, local_midnight, pivot_year, Stamp};

/// Text-extraction boundary: anything the host page can hand over (a post
/// node, a table cell) implements this to expose its text. `None` means
/// the value is not text-bearing; parsing it yields the invalid sentinel.
pub trait TextSource {
    fn text_content(&self) -> Option<String>;
}

/// Accepted parser input: raw text or an already-parsed stamp.
#[derive(Debug, Clone)]
pub enum Input<'a> {
    Text(Cow<'a, str>),
    Stamp(Stamp),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Input<'static> {
    fn from(text: String) -> Self {
        Input::Text(Cow::Owned(text))
    }
}

impl From<Stamp> for Input<'static> {
    fn from(stamp: Stamp) -> Self {
        Input::Stamp(stamp)
    }
}

impl From<NaiveDateTime> for Input<'static> {
    fn from(instant: NaiveDateTime) -> Self {
        Input::Stamp(Stamp::from(instant))
    }
}

impl Input<'_> {
    /// Extract the text of a host-page element. A source that is not
    /// text-bearing parses to the invalid sentinel.
    pub fn element<S: TextSource>(source: &S) -> Input<'static> {
        Input::Text(Cow::Owned(source.text_content().unwrap_or_default()))
    }
}

/// Parse using the local clock for the relative anchors.
pub fn parse<'a>(input: impl Into<Input<'a>>) -> Stamp {
    parse_at(input, Local::now().naive_local())
}

/// Parse with an explicit "now": "aujourd'hui"/"hier" anchor to this
/// instant's date, and the year-less symbolic layout borrows its year.
pub fn parse_at<'a>(input: impl Into<Input<'a>>, now: NaiveDateTime) -> Stamp {
    let text = match input.into() {
        Input::Stamp(stamp) => return stamp,
        Input::Text(text) => text,
    };
    let cleaned = pre_clean(&text);
    for rule in rules() {
        if let Some(caps) = rule.regex.captures(&cleaned) {
            if let Some(instant) = (rule.extract)(&caps, now) {
                return Stamp::from(instant);
            }
        }
    }
    fallback(&cleaned)
}

/// Strip one leading weekday name (French or English, abbreviated or
/// full, optional trailing period/comma) and drop ordinal suffixes
/// ("1st" becomes "1"). Applied once, before the cascade.
fn pre_clean(raw: &str) -> String {
    let (weekday, ordinal) = cleaners();
    let trimmed = raw.trim();
    let without_weekday = weekday.replace(trimmed, "");
    ordinal.replace_all(&without_weekday, "$1").into_owned()
}

fn cleaners() -> &'static (Regex, Regex) {
    static CLEANERS: OnceLock<(Regex, Regex)> = OnceLock::new();
    CLEANERS.get_or_init(|| {
        (
            Regex::new(
                r"(?i)^(?:(?:lun(?:di)?|mar(?:di)?|mer(?:credi)?|jeu(?:di)?|ven(?:dredi)?|sam(?:edi)?|dim(?:anche)?|mon(?:day)?|tue(?:sday)?|wed(?:nesday)?|thu(?:rsday)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?)[.,]?\s+)",
            )
            .unwrap(),
            Regex::new(r"(?i)(\d+)(?:st|nd|rd|th)").unwrap(),
        )
    })
}

/// Zero-based month index for an English or French month token, full or
/// abbreviated, accented or not. Unknown tokens resolve to January: by
/// the time the resolver runs a structural pattern has already matched,
/// so an unrecognized name is an unanticipated spelling, not a non-date.
fn month_index(token: &str) -> i64 {
    match token.to_lowercase().as_str() {
        "jan" | "janv" | "janvier" | "january" => 0,
        "feb" | "february" | "févr" | "fevr" | "février" | "fevrier" => 1,
        "mar" | "march" | "mars" => 2,
        "apr" | "april" | "avr" | "avril" => 3,
        "may" | "mai" => 4,
        "jun" | "june" | "juin" => 5,
        "jul" | "july" | "juil" | "juillet" => 6,
        "aug" | "august" | "août" | "aout" => 7,
        "sep" | "sept" | "september" | "septembre" => 8,
        "oct" | "october" | "octobre" => 9,
        "nov" | "november" | "novembre" => 10,
        "dec" | "december" | "déc" | "décembre" | "decembre" => 11,
        _ => 0,
    }
}

/// One recognizer: a matcher and the extractor that turns its captures
/// into an instant. Extractors receive the caller's "now" for the
/// relative anchors and the year-less layout.
struct Rule {
    regex: Regex,
    extract: Extract,
}

type Extract = fn(&Captures, NaiveDateTime) -> Option<NaiveDateTime>;

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(build_rules)
}

fn int(caps: &Captures, index: usize) -> Option<i64> {
    caps.get(index)?.as_str().parse().ok()
}

fn int_or_zero(caps: &Captures, index: usize) -> i64 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn text_at<'c>(caps: &'c Captures, index: usize) -> Option<&'c str> {
    caps.get(index).map(|m| m.as_str())
}

fn month_at(caps: &Captures, index: usize) -> i64 {
    month_index(text_at(caps, index).unwrap_or(""))
}

/// The recognizer table, in priority order. Order is semantics: the
/// slash families carry a day-first and a month-first reading of the very
/// same shape, and the day-first row wins purely by sitting higher.
fn build_rules() -> Vec<Rule> {
    fn rule(pattern: &str, extract: Extract) -> Rule {
        Rule {
            regex: Regex::new(pattern).unwrap(),
            extract,
        }
    }

    vec![
        // "Aujourd'hui à 12:40", "aujourd’hui 12:40:33", am/pm tolerated
        rule(
            r"(?i)^aujourd['’]hui\s*(?:[, ]+)?\s*(?:a|à)?\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([ap]m)?$",
            |caps: &Captures, now: NaiveDateTime| {
                at_time(
                    local_midnight(now, 0)?,
                    int(caps, 1)?,
                    int(caps, 2)?,
                    int_or_zero(caps, 3),
                    text_at(caps, 4),
                )
            },
        ),
        // "Hier à 08:05", "hier 8:05 pm"
        rule(
            r"(?i)^hier\s*(?:[, ]+)?\s*(?:a|à)?\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([ap]m)?$",
            |caps: &Captures, now: NaiveDateTime| {
                at_time(
                    local_midnight(now, -1)?,
                    int(caps, 1)?,
                    int(caps, 2)?,
                    int_or_zero(caps, 3),
                    text_at(caps, 4),
                )
            },
        ),
        // Bare "aujourd'hui"/"hier": midnight
        rule(r"(?i)^aujourd['’]hui$", |_caps: &Captures, now: NaiveDateTime| {
            local_midnight(now, 0)
        }),
        rule(r"(?i)^hier$", |_caps: &Captures, now: NaiveDateTime| {
            local_midnight(now, -1)
        }),
        // "8 juin 2025 - 14:05" (dash or comma separator)
        rule(
            r"^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4})\s*[-,]\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "8 juin - 14:05" (no year: the reference year applies)
        rule(
            r"^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s*[-,]\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, now: NaiveDateTime| {
                assemble_fields(
                    i64::from(now.year()),
                    month_at(caps, 2),
                    int(caps, 1)?,
                    int(caps, 3)?,
                    int(caps, 4)?,
                    0,
                )
            },
        ),
        // "8 juin 2025 - 14:05:33"
        rule(
            r"^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4})\s*[-,]\s*(\d{1,2}):(\d{2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    int(caps, 6)?,
                )
            },
        ),
        // "8 June 2025 - 2:05:33 pm"
        rule(
            r"(?i)^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4})\s*[-,]\s*(\d{1,2}):(\d{2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 7)),
                    int(caps, 5)?,
                    int(caps, 6)?,
                )
            },
        ),
        // "08.06.25 14:05" (two-digit year, pivot at 50)
        rule(
            r"^(\d{2})\.(\d{2})\.(\d{2})\s+(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    pivot_year(int(caps, 3)?),
                    int(caps, 2)? - 1,
                    int(caps, 1)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "01/03/25, 10:48 pm" (two-digit year, pivot at 50)
        rule(
            r"(?i)^(\d{2})/(\d{2})/(\d{2}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    pivot_year(int(caps, 3)?),
                    int(caps, 2)? - 1,
                    int(caps, 1)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "8 juin 2025, 9:05 pm"
        rule(
            r"(?i)^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "8 juin 2025, 14:05" — the dash-or-comma rule higher up already
        // claims this shape; the row stays so each layout family reads as
        // a with/without-meridiem pair.
        rule(
            r"^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "June 8, 2025 9:05 pm"
        rule(
            r"(?i)^([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{1,2}),\s*(\d{4})\s+(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 1),
                    int(caps, 2)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "June 8 2025, 14:05"
        rule(
            r"^([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{1,2})\s+(\d{4}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 1),
                    int(caps, 2)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "1 st June 2025, 9:05 pm" (detached ordinal suffix)
        rule(
            r"(?i)^(\d{1,2})\s+[a-z]{2}\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "1 st June 2025, 14:05"
        rule(
            r"^(\d{1,2})\s+[a-z]{2}\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 2),
                    int(caps, 1)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "June 1 st 2025, 9:05 pm"
        rule(
            r"(?i)^([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{1,2})\s*[a-z]{2}\s+(\d{4}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 1),
                    int(caps, 2)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "June 1 st 2025, 14:05"
        rule(
            r"^([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{1,2})\s*[a-z]{2}\s+(\d{4}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    month_at(caps, 1),
                    int(caps, 2)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "8/6/2025, 9:05 pm" (day first)
        rule(
            r"(?i)^(\d{1,2})/(\d{1,2})/(\d{4}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    int(caps, 2)? - 1,
                    int(caps, 1)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "8/6/2025, 14:05" (day first)
        rule(
            r"^(\d{1,2})/(\d{1,2})/(\d{4}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    int(caps, 2)? - 1,
                    int(caps, 1)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // month-first reading of the same slash shape; the day-first row
        // above wins by position
        rule(
            r"(?i)^(\d{1,2})/(\d{1,2})/(\d{4}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    int(caps, 1)? - 1,
                    int(caps, 2)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        rule(
            r"^(\d{1,2})/(\d{1,2})/(\d{4}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 3)?,
                    int(caps, 1)? - 1,
                    int(caps, 2)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "2025-06-08, 9:05 pm"
        rule(
            r"(?i)^(\d{4})-(\d{1,2})-(\d{1,2}),\s*(\d{1,2}):(\d{2})\s*([ap]m)$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 1)?,
                    int(caps, 2)? - 1,
                    int(caps, 3)?,
                    apply_meridiem(int(caps, 4)?, text_at(caps, 6)),
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "2025-06-08, 14:05"
        rule(
            r"^(\d{4})-(\d{1,2})-(\d{1,2}),\s*(\d{1,2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 1)?,
                    int(caps, 2)? - 1,
                    int(caps, 3)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    0,
                )
            },
        ),
        // "2025-06-08, 14:05:33"
        rule(
            r"^(\d{4})-(\d{1,2})-(\d{1,2}),\s*(\d{1,2}):(\d{2}):(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    int(caps, 1)?,
                    int(caps, 2)? - 1,
                    int(caps, 3)?,
                    int(caps, 4)?,
                    int(caps, 5)?,
                    int(caps, 6)?,
                )
            },
        ),
        // Date-only layouts: midnight.
        // "8 juin 2025"
        rule(
            r"^(\d{1,2})\s+([A-Za-zéûÀ-ÖØ-öø-ÿ]+)\s+(\d{4})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(int(caps, 3)?, month_at(caps, 2), int(caps, 1)?, 0, 0, 0)
            },
        ),
        // "2025-06-08"
        rule(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(int(caps, 1)?, int(caps, 2)? - 1, int(caps, 3)?, 0, 0, 0)
            },
        ),
        // "08.06.25"
        rule(
            r"^(\d{2})\.(\d{2})\.(\d{2})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(
                    pivot_year(int(caps, 3)?),
                    int(caps, 2)? - 1,
                    int(caps, 1)?,
                    0,
                    0,
                    0,
                )
            },
        ),
        // "08/06/2025" (day first)
        rule(
            r"^(\d{1,2})/(\d{1,2})/(\d{4})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(int(caps, 3)?, int(caps, 2)? - 1, int(caps, 1)?, 0, 0, 0)
            },
        ),
        // month-first reading, in the day-first row's shadow
        rule(
            r"^(\d{1,2})/(\d{1,2})/(\d{4})$",
            |caps: &Captures, _now: NaiveDateTime| {
                assemble_fields(int(caps, 3)?, int(caps, 1)? - 1, int(caps, 2)?, 0, 0, 0)
            },
        ),
    ]
}

/// Last tier: generic layouts the cascade does not claim, tried in order
/// before giving up.
fn fallback(text: &str) -> Stamp {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Stamp::from(instant.naive_local());
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Stamp::from(instant.naive_local());
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, layout) {
            return Stamp::from(instant);
        }
    }
    for layout in ["%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%b %d %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, layout) {
            if let Some(instant) = date.and_hms_opt(0, 0, 0) {
                return Stamp::from(instant);
            }
        }
    }
    Stamp::INVALID
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDateTime {
        // Sunday, June 8, 2025, 14:30:00
        NaiveDate::from_ymd_opt(2025, 6, 8)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn instant(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn parsed(text: &str) -> Option<NaiveDateTime> {
        parse_at(text, anchor()).instant()
    }

    #[test]
    fn french_date_only_is_midnight() {
        assert_eq!(parsed("8 juin 2025"), Some(instant(2025, 6, 8, 0, 0, 0)));
    }

    #[test]
    fn slash_two_digit_year_with_meridiem() {
        assert_eq!(
            parsed("01/03/25, 10:48 pm"),
            Some(instant(2025, 3, 1, 22, 48, 0))
        );
    }

    #[test]
    fn today_with_accented_preposition() {
        assert_eq!(
            parsed("Aujourd'hui à 14:05"),
            Some(instant(2025, 6, 8, 14, 5, 0))
        );
    }

    #[test]
    fn today_with_curly_apostrophe_and_seconds() {
        assert_eq!(
            parsed("Aujourd’hui 12:40:33"),
            Some(instant(2025, 6, 8, 12, 40, 33))
        );
    }

    #[test]
    fn yesterday_with_meridiem() {
        assert_eq!(parsed("hier 8:05 pm"), Some(instant(2025, 6, 7, 20, 5, 0)));
    }

    #[test]
    fn bare_relative_anchors_are_midnight() {
        assert_eq!(parsed("Aujourd'hui"), Some(instant(2025, 6, 8, 0, 0, 0)));
        assert_eq!(parsed("hier"), Some(instant(2025, 6, 7, 0, 0, 0)));
    }

    #[test]
    fn symbolic_month_with_dash_time() {
        assert_eq!(
            parsed("8 juin 2025 - 14:05"),
            Some(instant(2025, 6, 8, 14, 5, 0))
        );
    }

    #[test]
    fn symbolic_month_without_year_uses_reference_year() {
        assert_eq!(parsed("8 juin - 14:05"), Some(instant(2025, 6, 8, 14, 5, 0)));
        assert_eq!(parsed("25 déc, 9:30"), Some(instant(2025, 12, 25, 9, 30, 0)));
    }

    #[test]
    fn symbolic_month_with_seconds() {
        assert_eq!(
            parsed("8 juin 2025 - 14:05:33"),
            Some(instant(2025, 6, 8, 14, 5, 33))
        );
        assert_eq!(
            parsed("8 June 2025 - 2:05:33 pm"),
            Some(instant(2025, 6, 8, 14, 5, 33))
        );
    }

    #[test]
    fn symbolic_month_comma_meridiem() {
        assert_eq!(
            parsed("8 juin 2025, 9:05 pm"),
            Some(instant(2025, 6, 8, 21, 5, 0))
        );
    }

    #[test]
    fn month_first_english_layouts() {
        assert_eq!(
            parsed("June 8, 2025 9:05 pm"),
            Some(instant(2025, 6, 8, 21, 5, 0))
        );
        assert_eq!(
            parsed("June 8 2025, 14:05"),
            Some(instant(2025, 6, 8, 14, 5, 0))
        );
    }

    #[test]
    fn twelve_am_is_midnight_twelve_pm_is_noon() {
        assert_eq!(
            parsed("8 June 2025, 12:00 am"),
            Some(instant(2025, 6, 8, 0, 0, 0))
        );
        assert_eq!(
            parsed("8 June 2025, 12:00 pm"),
            Some(instant(2025, 6, 8, 12, 0, 0))
        );
    }

    #[test]
    fn dotted_two_digit_year_pivots_at_fifty() {
        assert_eq!(parsed("08.06.49 10:00"), Some(instant(2049, 6, 8, 10, 0, 0)));
        assert_eq!(parsed("08.06.50 10:00"), Some(instant(1950, 6, 8, 10, 0, 0)));
        assert_eq!(parsed("08.06.25"), Some(instant(2025, 6, 8, 0, 0, 0)));
    }

    #[test]
    fn slash_shape_resolves_day_first() {
        // "01/03" could be March 1 or January 3; the day-first row sits
        // higher in the table.
        assert_eq!(
            parsed("01/03/2025, 10:48"),
            Some(instant(2025, 3, 1, 10, 48, 0))
        );
        assert_eq!(parsed("01/03/2025"), Some(instant(2025, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn iso_like_layouts() {
        assert_eq!(
            parsed("2025-06-08, 14:05"),
            Some(instant(2025, 6, 8, 14, 5, 0))
        );
        assert_eq!(
            parsed("2025-06-08, 14:05:33"),
            Some(instant(2025, 6, 8, 14, 5, 33))
        );
        assert_eq!(
            parsed("2025-06-08, 9:05 pm"),
            Some(instant(2025, 6, 8, 21, 5, 0))
        );
        assert_eq!(parsed("2025-06-08"), Some(instant(2025, 6, 8, 0, 0, 0)));
    }

    #[test]
    fn leading_weekday_is_stripped() {
        assert_eq!(
            parsed("Lundi, 8 juin 2025 - 14:05"),
            Some(instant(2025, 6, 8, 14, 5, 0))
        );
        assert_eq!(
            parsed("Sun. June 8 2025, 14:05"),
            Some(instant(2025, 6, 8, 14, 5, 0))
        );
    }

    #[test]
    fn ordinal_suffix_is_normalized() {
        assert_eq!(parsed("8th June 2025"), Some(instant(2025, 6, 8, 0, 0, 0)));
        assert_eq!(parsed("1st mars 2025"), Some(instant(2025, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn unknown_month_token_resolves_to_january() {
        assert_eq!(parsed("8 Brumaire 2025"), Some(instant(2025, 1, 8, 0, 0, 0)));
    }

    #[test]
    fn full_french_month_names_resolve() {
        assert_eq!(parsed("1 janvier 2025"), Some(instant(2025, 1, 1, 0, 0, 0)));
        assert_eq!(parsed("14 juillet 2025"), Some(instant(2025, 7, 14, 0, 0, 0)));
        assert_eq!(parsed("3 août 2025"), Some(instant(2025, 8, 3, 0, 0, 0)));
        assert_eq!(
            parsed("25 décembre 2025"),
            Some(instant(2025, 12, 25, 0, 0, 0))
        );
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(parsed("32 janvier 2025"), Some(instant(2025, 2, 1, 0, 0, 0)));
    }

    #[test]
    fn fallback_accepts_rfc3339() {
        assert_eq!(
            parsed("2025-06-08T14:05:33+00:00"),
            Some(instant(2025, 6, 8, 14, 5, 33))
        );
    }

    #[test]
    fn fallback_accepts_english_textual_date() {
        assert_eq!(parsed("June 8, 2025"), Some(instant(2025, 6, 8, 0, 0, 0)));
    }

    #[test]
    fn garbage_degrades_to_the_sentinel() {
        assert_eq!(parse_at("invalid garbage !!", anchor()), Stamp::INVALID);
        assert_eq!(parse_at("", anchor()), Stamp::INVALID);
        assert_eq!(parse_at("12:40", anchor()), Stamp::INVALID);
    }

    #[test]
    fn stamp_input_passes_through() {
        let stamp = Stamp::from(instant(2025, 6, 8, 14, 5, 0));
        assert_eq!(parse_at(stamp, anchor()), stamp);
        assert_eq!(parse_at(Stamp::INVALID, anchor()), Stamp::INVALID);
    }

    #[test]
    fn element_input_uses_extracted_text() {
        struct Node(Option<&'static str>);
        impl TextSource for Node {
            fn text_content(&self) -> Option<String> {
                self.0.map(str::to_string)
            }
        }

        assert_eq!(
            parse_at(Input::element(&Node(Some("  8 juin 2025  "))), anchor()),
            Stamp::from(instant(2025, 6, 8, 0, 0, 0))
        );
        assert_eq!(
            parse_at(Input::element(&Node(None)), anchor()),
            Stamp::INVALID
        );
    }

    #[test]
    fn month_resolver_is_case_insensitive() {
        assert_eq!(month_index("JUIN"), 5);
        assert_eq!(month_index("Août"), 7);
        assert_eq!(month_index("February"), 1);
        assert_eq!(month_index("sept"), 8);
        assert_eq!(month_index("nope"), 0);
    }

    #[test]
    fn pre_clean_strips_one_weekday_and_all_ordinals() {
        assert_eq!(pre_clean("Lundi, 8 juin 2025"), "8 juin 2025");
        assert_eq!(pre_clean("mon 1st June"), "1 June");
        assert_eq!(pre_clean("  8 juin 2025  "), "8 juin 2025");
        // Month names starting like a weekday are left alone.
        assert_eq!(pre_clean("mars 8 2025, 14:05"), "mars 8 2025, 14:05");
    }
}
