//! Tests for config/options

use super::*;

#[test]
fn test_new_uses_component_defaults() {
    let options = MentionsOptions::new('@', TriggerLocation::NewWordOnly, 40);

    assert!(options.horizontal);
    assert_eq!(options.max_visible_row_count, None);
    assert_eq!(options.suggestion_row_height, 40);
    assert_eq!(options.text_input_min_height, 30);
    assert_eq!(options.text_input_max_height, 80);
    assert_eq!(options.loading_text, "Loading...");
    assert_eq!(options.placeholder, "Write a post...");
}

#[test]
fn test_horizontal_without_max_rows_is_valid() {
    let options = MentionsOptions::new('@', TriggerLocation::Anywhere, 1);
    assert!(options.validate().is_ok());
}

#[test]
fn test_vertical_without_max_rows_is_invalid() {
    let options = MentionsOptions::new('@', TriggerLocation::Anywhere, 1).horizontal(false);
    assert_eq!(
        options.validate(),
        Err(MentionsError::MissingMaxVisibleRowCount)
    );
}

#[test]
fn test_vertical_with_zero_max_rows_is_invalid() {
    let options = MentionsOptions::new('@', TriggerLocation::Anywhere, 1)
        .horizontal(false)
        .max_visible_row_count(0);
    assert!(options.validate().is_err());
}

#[test]
fn test_vertical_with_max_rows_is_valid() {
    let options = MentionsOptions::new('@', TriggerLocation::Anywhere, 1)
        .horizontal(false)
        .max_visible_row_count(3);
    assert!(options.validate().is_ok());
}

#[test]
fn test_builder_setters() {
    let options = MentionsOptions::new('#', TriggerLocation::Anywhere, 2)
        .text_input_heights(3, 6)
        .loading_text("Fetching...")
        .placeholder("Say something");

    assert_eq!(options.text_input_min_height, 3);
    assert_eq!(options.text_input_max_height, 6);
    assert_eq!(options.loading_text, "Fetching...");
    assert_eq!(options.placeholder, "Say something");
}

#[test]
fn test_parse_trigger_single_char() {
    assert_eq!(parse_trigger("@"), Ok('@'));
    assert_eq!(parse_trigger("#"), Ok('#'));
}

#[test]
fn test_parse_trigger_rejects_empty_and_multiple() {
    assert_eq!(
        parse_trigger(""),
        Err(MentionsError::InvalidTrigger(String::new()))
    );
    assert_eq!(
        parse_trigger("@@"),
        Err(MentionsError::InvalidTrigger("@@".to_string()))
    );
}
