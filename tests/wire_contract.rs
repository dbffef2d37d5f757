use chrono::{NaiveDate, NaiveDateTime};
use saywhen::wire::{ParseRequest, respond, suggestions_payload};
use saywhen::{Context, suggestions};
use serde_json::Value;

fn context() -> Context {
    let reference: NaiveDateTime =
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
    Context { reference_time: reference }
}

fn respond_value(input: &str) -> Value {
    let request = ParseRequest { input: input.to_string() };
    serde_json::to_value(respond(&request, &context())).expect("response encodes")
}

fn field_names(value: &Value) -> Vec<&str> {
    value.as_object().expect("object response").keys().map(String::as_str).collect()
}

#[test]
fn success_responses_carry_exactly_the_success_fields() {
    let value = respond_value("in 2 hours");
    assert_eq!(field_names(&value), ["confidence", "datetime", "interpretation", "success"]);
    assert_eq!(value["success"], true);
    assert_eq!(value["datetime"], "2024-01-15T12:00:00Z");
    assert_eq!(value["interpretation"], "In 2 hours (12:00 PM)");
    assert_eq!(value["confidence"], 0.85);
}

#[test]
fn failure_responses_carry_error_and_suggestions() {
    let value = respond_value("banana");
    assert_eq!(field_names(&value), ["error", "success", "suggestions"]);
    assert_eq!(value["success"], false);
    let error = value["error"].as_str().expect("error string");
    assert!(error.starts_with("Could not parse the schedule time"), "got: {error}");

    let hinted: Vec<&str> =
        value["suggestions"].as_array().unwrap().iter().map(|s| s.as_str().unwrap()).collect();
    assert_eq!(hinted, suggestions());
}

#[test]
fn empty_input_is_rejected_without_suggestions() {
    for input in ["", "   ", "\n"] {
        let value = respond_value(input);
        assert_eq!(field_names(&value), ["error", "success"]);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Input text is required");
    }
}

#[test]
fn validation_failures_use_the_failure_shape() {
    // Past explicit date: parses at 0.95 yet the window check rejects it.
    let value = respond_value("2024-01-01");
    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "Schedule time must be in the future");
    assert!(value["suggestions"].is_array());

    // "now" resolves to the reference itself, which is not strictly future.
    let value = respond_value("now");
    assert_eq!(value["error"], "Schedule time must be in the future");
}

#[test]
fn window_boundary_is_one_year_inclusive() {
    // 2024 is a leap year: 366 days from Jan 15 lands exactly on the bound.
    let value = respond_value("in 366 days");
    assert_eq!(value["success"], true);
    assert_eq!(value["datetime"], "2025-01-15T10:00:00Z");

    let value = respond_value("in 367 days");
    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "Schedule time cannot be more than 1 year in the future");
}

#[test]
fn every_advertised_suggestion_round_trips_to_a_schedulable_instant() {
    for input in suggestions() {
        let value = respond_value(input);
        assert_eq!(value["success"], true, "suggestion {input:?} should be schedulable");
        assert!(value["datetime"].as_str().unwrap().ends_with('Z'));
    }
}

#[test]
fn suggestions_payload_carries_phrases_and_described_examples() {
    let payload = serde_json::to_value(suggestions_payload()).expect("payload encodes");
    let phrases: Vec<&str> =
        payload["suggestions"].as_array().unwrap().iter().map(|s| s.as_str().unwrap()).collect();
    assert_eq!(phrases, suggestions());

    let examples = payload["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 5);
    for example in examples {
        assert!(example["input"].is_string());
        assert!(example["description"].as_str().unwrap().starts_with("Schedule for"));
    }
}
