//! # horodate
//!
//! Normalizes the free-form, locale-specific timestamp text a web forum
//! renders ("Aujourd'hui à 14:05", "8 juin 2025", "01/03/25, 10:48 pm")
//! into a single timezone-naive instant, then renders that instant back
//! out as a custom-formatted string or a human relative-time phrase
//! ("il y a 3 heures").
//!
//! Recognition is an ordered cascade of text patterns; the first
//! successful rule wins, and rule order resolves genuinely ambiguous
//! layouts (day-first versus month-first slash dates). Input no tier
//! recognizes becomes the invalid sentinel, which flows through the
//! rendering entry points as empty output rather than an error.
//!
//! ## Modules
//!
//! - [`parse`] — pre-cleaning, the recognizer cascade, and the entry points
//! - [`stamp`] — the point-in-time value and field assembly
//! - [`format`] — template-token rendering
//! - [`relative`] — relative-time bucketing ("3 hours ago")
//! - [`locale`] — localized phrase tables (fr / en)
//! - [`error`] — error types
//!
//! ## Quick use
//!
//! ```
//! use horodate::Horodate;
//!
//! let post = Horodate::new("8 juin 2025");
//! assert_eq!(post.to_format("DD/MM/YYYY"), "08/06/2025");
//! ```

pub mod error;
pub mod format;
pub mod locale;
pub mod parse;
pub mod relative;
pub mod stamp;

pub use error::HorodateError;
pub use format::{format, DEFAULT_TEMPLATE};
pub use locale::{RelativeTimeFormatter, Unit};
pub use parse::{parse, parse_at, Input, TextSource};
pub use relative::{from_now, from_now_with, FromNowOptions, DEFAULT_LOCALE};
pub use stamp::Stamp;

/// Convenience facade binding a parsed stamp to its rendering calls.
///
/// ```
/// use horodate::Horodate;
///
/// let post = Horodate::new("01/03/25, 10:48 pm");
/// assert_eq!(post.to_format("YYYY-MM-DD HH:mm"), "2025-03-01 22:48");
/// ```
#[derive(Debug, Clone)]
pub struct Horodate {
    stamp: Stamp,
    options: FromNowOptions,
}

impl Horodate {
    /// Parse `input` with default options.
    pub fn new<'a>(input: impl Into<Input<'a>>) -> Self {
        Self::with_options(input, FromNowOptions::default())
    }

    /// Parse `input`, keeping `options` for later [`Horodate::from_now`]
    /// calls. When `options.now` is set it also anchors the relative
    /// terms ("aujourd'hui", "hier") during parsing.
    pub fn with_options<'a>(input: impl Into<Input<'a>>, options: FromNowOptions) -> Self {
        let stamp = match options.now {
            Some(now) => parse_at(input, now),
            None => parse(input),
        };
        Self { stamp, options }
    }

    /// The parsed instant, possibly the invalid sentinel.
    pub fn stamp(&self) -> Stamp {
        self.stamp
    }

    /// Render through a format template; empty string when invalid.
    pub fn to_format(&self, template: &str) -> String {
        format(self.stamp, template)
    }

    /// Relative-time phrase against the bound options; empty when invalid.
    pub fn from_now(&self) -> String {
        from_now_with(self.stamp, &self.options)
    }
}
