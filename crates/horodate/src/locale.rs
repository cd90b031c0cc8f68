//! Locale-aware relative-time phrase rendering.
//!
//! The formatting collaborator behind [`crate::from_now`]: given a signed
//! unit count, it produces the localized phrase. Two locales are carried,
//! Canadian French (the product default) and English. Identifiers resolve
//! by primary subtag ("fr-CA", "fr_FR" and bare "fr" are all French);
//! anything unrecognized falls back to English rather than failing.

use serde::Serialize;

/// Relative-time unit selected by the bucket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    French,
    English,
}

/// Renders "il y a 3 heures" / "3 hours ago" style phrases.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter {
    locale: String,
    language: Language,
}

impl RelativeTimeFormatter {
    /// Resolve a locale identifier ("fr-CA", "fr", "en-US", ...).
    pub fn new(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        let language = if primary == "fr" {
            Language::French
        } else {
            Language::English
        };
        Self {
            locale: locale.to_string(),
            language,
        }
    }

    /// The identifier this formatter was created for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Localized phrase for a signed count of `unit`: negative counts lie
    /// in the past, positive in the future. Counts of -1/0/1 use the
    /// idiomatic forms where the locale has one ("hier", "tomorrow",
    /// "la semaine dernière") instead of a numeric phrase.
    pub fn format(&self, count: i64, unit: Unit) -> String {
        match self.language {
            Language::French => french(count, unit),
            Language::English => english(count, unit),
        }
    }
}

fn french(count: i64, unit: Unit) -> String {
    use Unit::*;
    match (count, unit) {
        (0, Second) => "maintenant".to_string(),
        (0, Minute) => "cette minute-ci".to_string(),
        (0, Hour) => "cette heure-ci".to_string(),
        (-1, Day) => "hier".to_string(),
        (0, Day) => "aujourd'hui".to_string(),
        (1, Day) => "demain".to_string(),
        (-1, Week) => "la semaine dernière".to_string(),
        (0, Week) => "cette semaine".to_string(),
        (1, Week) => "la semaine prochaine".to_string(),
        (-1, Month) => "le mois dernier".to_string(),
        (0, Month) => "ce mois-ci".to_string(),
        (1, Month) => "le mois prochain".to_string(),
        (-1, Year) => "l'an dernier".to_string(),
        (0, Year) => "cette année".to_string(),
        (1, Year) => "l'an prochain".to_string(),
        (n, u) if n < 0 => format!("il y a {} {}", -n, french_unit(-n, u)),
        (n, u) => format!("dans {} {}", n, french_unit(n, u)),
    }
}

fn french_unit(count: i64, unit: Unit) -> &'static str {
    use Unit::*;
    let plural = count != 1;
    match unit {
        Second => {
            if plural {
                "secondes"
            } else {
                "seconde"
            }
        }
        Minute => {
            if plural {
                "minutes"
            } else {
                "minute"
            }
        }
        Hour => {
            if plural {
                "heures"
            } else {
                "heure"
            }
        }
        Day => {
            if plural {
                "jours"
            } else {
                "jour"
            }
        }
        Week => {
            if plural {
                "semaines"
            } else {
                "semaine"
            }
        }
        Month => "mois",
        Year => {
            if plural {
                "ans"
            } else {
                "an"
            }
        }
    }
}

fn english(count: i64, unit: Unit) -> String {
    use Unit::*;
    match (count, unit) {
        (0, Second) => "now".to_string(),
        (0, Minute) => "this minute".to_string(),
        (0, Hour) => "this hour".to_string(),
        (-1, Day) => "yesterday".to_string(),
        (0, Day) => "today".to_string(),
        (1, Day) => "tomorrow".to_string(),
        (-1, Week) => "last week".to_string(),
        (0, Week) => "this week".to_string(),
        (1, Week) => "next week".to_string(),
        (-1, Month) => "last month".to_string(),
        (0, Month) => "this month".to_string(),
        (1, Month) => "next month".to_string(),
        (-1, Year) => "last year".to_string(),
        (0, Year) => "this year".to_string(),
        (1, Year) => "next year".to_string(),
        (n, u) if n < 0 => format!("{} {} ago", -n, english_unit(-n, u)),
        (n, u) => format!("in {} {}", n, english_unit(n, u)),
    }
}

fn english_unit(count: i64, unit: Unit) -> &'static str {
    use Unit::*;
    let plural = count != 1;
    match unit {
        Second => {
            if plural {
                "seconds"
            } else {
                "second"
            }
        }
        Minute => {
            if plural {
                "minutes"
            } else {
                "minute"
            }
        }
        Hour => {
            if plural {
                "hours"
            } else {
                "hour"
            }
        }
        Day => {
            if plural {
                "days"
            } else {
                "day"
            }
        }
        Week => {
            if plural {
                "weeks"
            } else {
                "week"
            }
        }
        Month => {
            if plural {
                "months"
            } else {
                "month"
            }
        }
        Year => {
            if plural {
                "years"
            } else {
                "year"
            }
        }
    }
}
