use assert_cmd::Command;
use predicates::prelude::*;

fn horodate() -> Command {
    Command::cargo_bin("horodate").unwrap()
}

#[test]
fn parse_prints_the_normalized_instant() {
    horodate()
        .args(["parse", "8 juin 2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-08 00:00:00"));
}

#[test]
fn parse_json_carries_instant_and_formatted() {
    horodate()
        .args(["parse", "--json", "01/03/25, 10:48 pm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-01T22:48:00"))
        .stdout(predicate::str::contains("2025-03-01 22:48:00"));
}

#[test]
fn format_applies_the_template() {
    horodate()
        .args(["format", "8 juin 2025", "--template", "DD/MM/YYYY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("08/06/2025"));
}

#[test]
fn from_now_with_fixed_reference() {
    horodate()
        .args([
            "from-now",
            "2025-06-08, 13:30",
            "--now",
            "2025-06-08T14:30:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("il y a 1 heure"));
}

#[test]
fn from_now_honors_the_locale() {
    horodate()
        .args([
            "from-now",
            "2025-06-08, 13:30",
            "--locale",
            "en",
            "--now",
            "2025-06-08T14:30:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 hour ago"));
}

#[test]
fn relative_terms_anchor_to_the_reference() {
    horodate()
        .args([
            "from-now",
            "Aujourd'hui à 13:30",
            "--now",
            "2025-06-08T14:30:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("il y a 1 heure"));
}

#[test]
fn unrecognized_text_fails_with_a_diagnostic() {
    horodate()
        .args(["parse", "gobbledygook"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized date text"));
}

#[test]
fn bad_reference_instant_fails() {
    horodate()
        .args(["from-now", "8 juin 2025", "--now", "not-an-instant"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--now"));
}
