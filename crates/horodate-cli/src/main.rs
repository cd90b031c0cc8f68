use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use horodate::{format, from_now_with, parse, parse_at, FromNowOptions, Stamp, DEFAULT_LOCALE, DEFAULT_TEMPLATE};

#[derive(Parser)]
#[command(
    name = "horodate",
    version,
    about = "Normalize free-form forum timestamp text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse date text and print the normalized instant
    Parse {
        /// Free-form date text ("8 juin 2025", "01/03/25, 10:48 pm", ...)
        text: String,
        /// Emit a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Render date text through a format template
    Format {
        /// Free-form date text
        text: String,
        /// Template tokens: YYYY YY MM M DD D HH H hh h mm m ss s A a
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,
    },
    /// Print a relative-time phrase for the date text
    FromNow {
        /// Free-form date text
        text: String,
        /// Locale for the phrase ("fr-CA", "en", ...)
        #[arg(short, long, default_value = DEFAULT_LOCALE)]
        locale: String,
        /// Reference instant (YYYY-MM-DDTHH:MM:SS); defaults to the local clock
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Parse { text, json } => {
            let stamp = checked_parse(&text)?;
            if json {
                let value = serde_json::json!({
                    "instant": stamp,
                    "formatted": format(stamp, "YYYY-MM-DD HH:mm:ss"),
                });
                println!("{value}");
            } else {
                println!("{}", format(stamp, "YYYY-MM-DD HH:mm:ss"));
            }
        }
        Command::Format { text, template } => {
            let stamp = checked_parse(&text)?;
            println!("{}", format(stamp, &template));
        }
        Command::FromNow { text, locale, now } => {
            let now = now.as_deref().map(parse_reference).transpose()?;
            let stamp = match now {
                Some(reference) => parse_at(text.as_str(), reference),
                None => parse(text.as_str()),
            };
            if !stamp.is_valid() {
                bail!("unrecognized date text: {text:?}");
            }
            println!("{}", from_now_with(stamp, &FromNowOptions { locale, now }));
        }
    }
    Ok(())
}

fn checked_parse(text: &str) -> Result<Stamp> {
    let stamp = parse(text);
    if !stamp.is_valid() {
        bail!("unrecognized date text: {text:?}");
    }
    Ok(stamp)
}

fn parse_reference(text: &str) -> Result<chrono::NaiveDateTime> {
    for layout in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(instant) = chrono::NaiveDateTime::parse_from_str(text, layout) {
            return Ok(instant);
        }
    }
    bail!("--now must look like 2025-06-08T14:30:00, got {text:?}")
}
