//! Relative-time phrasing: the bucket table and its calculator.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chrono::{Local, NaiveDateTime};

use crate::locale::{RelativeTimeFormatter, Unit};
use crate::stamp::Stamp;

/// Locale applied when the caller does not supply one.
pub const DEFAULT_LOCALE: &str = "fr-CA";

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const WEEK: i64 = 604_800;
const MONTH: i64 = 2_592_000;
const YEAR: i64 = 31_536_000;

/// One row of the bucket table: elapsed magnitudes under `bound` phrase
/// as `unit`, with the signed count produced by `divisor`.
///
/// The divisor is the unit's own length, not the row's bound, so the
/// transition zones (45–90 s, 45–90 min, 22–36 h) round across the seam:
/// 46 elapsed seconds is "1 minute". That asymmetry is part of the
/// phrasing contract and must not be "corrected".
struct Bucket {
    bound: i64,
    unit: Unit,
    divisor: i64,
}

const BUCKETS: [Bucket; 9] = [
    Bucket { bound: 45, unit: Unit::Second, divisor: 1 },
    Bucket { bound: 90, unit: Unit::Minute, divisor: MINUTE },
    Bucket { bound: 45 * MINUTE, unit: Unit::Minute, divisor: MINUTE },
    Bucket { bound: 90 * MINUTE, unit: Unit::Hour, divisor: HOUR },
    Bucket { bound: 22 * HOUR, unit: Unit::Hour, divisor: HOUR },
    Bucket { bound: 36 * HOUR, unit: Unit::Day, divisor: DAY },
    Bucket { bound: 25 * DAY, unit: Unit::Day, divisor: DAY },
    Bucket { bound: 45 * DAY, unit: Unit::Week, divisor: WEEK },
    Bucket { bound: 345 * DAY, unit: Unit::Month, divisor: MONTH },
];

/// Options for [`from_now_with`].
#[derive(Debug, Clone)]
pub struct FromNowOptions {
    /// Locale identifier handed to the phrase formatter.
    pub locale: String,
    /// Reference instant; `None` reads the local clock.
    pub now: Option<NaiveDateTime>,
}

impl Default for FromNowOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            now: None,
        }
    }
}

/// Phrase the distance between `stamp` and the current instant in the
/// default locale. Empty string for the invalid sentinel.
pub fn from_now(stamp: Stamp) -> String {
    from_now_with(stamp, &FromNowOptions::default())
}

/// Phrase the distance between `stamp` and `options.now` (or the local
/// clock) in `options.locale`. Empty string for the invalid sentinel.
pub fn from_now_with(stamp: Stamp, options: &FromNowOptions) -> String {
    let Some(instant) = stamp.instant() else {
        return String::new();
    };
    let now = options.now.unwrap_or_else(|| Local::now().naive_local());
    let formatter = formatter_for(&options.locale);

    // Negative while the subject lies in the past.
    let elapsed = (instant - now).num_seconds();
    let magnitude = elapsed.abs();

    for bucket in &BUCKETS {
        if magnitude < bucket.bound {
            return formatter.format(round_half_up(elapsed, bucket.divisor), bucket.unit);
        }
    }
    formatter.format(round_half_up(elapsed, YEAR), Unit::Year)
}

/// Process-wide formatter cache: append-only, keyed by the locale
/// identifier, never evicted.
fn formatter_for(locale: &str) -> Arc<RelativeTimeFormatter> {
    static CACHE: OnceLock<Mutex<HashMap<String, Arc<RelativeTimeFormatter>>>> = OnceLock::new();
    let mut cache = CACHE
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        cache
            .entry(locale.to_string())
            .or_insert_with(|| Arc::new(RelativeTimeFormatter::new(locale))),
    )
}

/// Signed division rounding half toward positive infinity: -90 / 60 is
/// -1, not -2. Phrase counts were historically produced with this
/// rounding and past-tense boundary cases depend on it.
fn round_half_up(n: i64, divisor: i64) -> i64 {
    (2 * n + divisor).div_euclid(2 * divisor)
}
