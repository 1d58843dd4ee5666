use keydiff_rs::output::{format_report, label_for, OutputFormat, Report};
use keydiff_rs::{compare_keys, KeySet};
use std::path::Path;

fn set(keys: &[&str]) -> KeySet {
    keys.iter().map(|k| k.to_string()).collect()
}

fn report(source: &[&str], target: &[&str]) -> Report {
    Report::new("en.json", "fr.json", compare_keys(&set(source), &set(target)))
}

#[test]
fn test_format_plain_same_keys() {
    let output = format_report(&report(&["a", "a.b"], &["a", "a.b"]), &OutputFormat::Plain).unwrap();
    assert_eq!(output, "Both files have the same keys.");
}

#[test]
fn test_format_plain_missing_in_target() {
    let output = format_report(
        &report(&["a", "a.b", "a.c"], &["a", "a.b"]),
        &OutputFormat::Plain,
    )
    .unwrap();
    assert_eq!(output, "Keys missing in fr.json:\na.c");
}

#[test]
fn test_format_plain_missing_in_source() {
    let output = format_report(&report(&[], &["x"]), &OutputFormat::Plain).unwrap();
    assert_eq!(output, "\nKeys missing in en.json:\nx");
}

#[test]
fn test_format_plain_sorts_lexicographically() {
    let output = format_report(
        &report(&["b.a", "a.z", "a", "B"], &[]),
        &OutputFormat::Plain,
    )
    .unwrap();
    assert_eq!(output, "Keys missing in fr.json:\nB\na\na.z\nb.a");
}

#[test]
fn test_format_json() {
    let output = format_report(&report(&["a", "b"], &["b", "c"]), &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["source"], "en.json");
    assert_eq!(value["target"], "fr.json");
    assert_eq!(value["missing_in_target"], serde_json::json!(["a"]));
    assert_eq!(value["missing_in_source"], serde_json::json!(["c"]));
    assert_eq!(value["stats"]["shared"], 1);
    assert_eq!(value["stats"]["source_keys"], 2);
}

#[test]
fn test_format_terminal_same_keys() {
    colored::control::set_override(false);
    let output = format_report(&report(&["a"], &["a"]), &OutputFormat::Terminal).unwrap();
    assert_eq!(output, "Both files have the same keys.");
}

#[test]
fn test_report_for_paths() {
    let report = Report::for_paths(
        Path::new("languages/en.json"),
        Path::new("languages/fr.json"),
        compare_keys(&set(&["a"]), &set(&[])),
    );
    assert_eq!(report.source_label, "en.json");
    assert_eq!(report.target_label, "fr.json");
}

#[test]
fn test_label_for_falls_back_to_display() {
    assert_eq!(label_for(Path::new("..")), "..");
}
