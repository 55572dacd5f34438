//! Tests for rendering the mentions input

use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::input::MentionsInput;
use crate::test_utils::test_helpers::{
    Person, horizontal_options, people, test_input, type_str, vertical_options,
};

const TEST_WIDTH: u16 = 40;
const TEST_HEIGHT: u16 = 12;

/// Long enough for any panel tween to finish
fn settled() -> Instant {
    Instant::now() + Duration::from_millis(500)
}

fn render_input(input: &mut MentionsInput<Person>, now: Instant) -> (String, Option<Rect>) {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut panel_area = None;

    terminal
        .draw(|f| {
            let area = f.area();
            panel_area = input.render(f, area, now);
        })
        .unwrap();

    (terminal.backend().to_string(), panel_area)
}

#[test]
fn test_idle_input_shows_placeholder_without_panel() {
    let (mut input, _) = test_input(vertical_options());

    let (output, panel_area) = render_input(&mut input, settled());

    assert!(output.contains("Write a post..."));
    assert!(!output.contains("▲"));
    assert_eq!(panel_area, None);
}

#[test]
fn test_tracking_shows_caret_and_loading_text() {
    let (mut input, _) = test_input(vertical_options());
    type_str(&mut input, "@al");

    let (output, panel_area) = render_input(&mut input, settled());

    assert!(output.contains("@al"));
    assert!(output.contains("▲"));
    assert!(output.contains("Loading..."));
    assert_eq!(panel_area, Some(Rect::new(0, 4, TEST_WIDTH, 1)));
}

#[test]
fn test_vertical_panel_lists_visible_rows() {
    let (mut input, _) = test_input(vertical_options());
    type_str(&mut input, "@al");
    input.set_suggestions(people(&[
        ("u1", "alice"),
        ("u2", "alina"),
        ("u3", "albert"),
        ("u4", "alfred"),
    ]));

    let (output, panel_area) = render_input(&mut input, settled());

    assert!(output.contains("alice (u1)"));
    assert!(output.contains("alina (u2)"));
    assert!(output.contains("albert (u3)"));
    assert!(!output.contains("alfred (u4)"));
    assert_eq!(panel_area.map(|area| area.height), Some(3));
}

#[test]
fn test_vertical_panel_scrolls_to_selection() {
    let (mut input, _) = test_input(vertical_options());
    type_str(&mut input, "@al");
    input.set_suggestions(people(&[
        ("u1", "alice"),
        ("u2", "alina"),
        ("u3", "albert"),
        ("u4", "alfred"),
    ]));
    input.select_previous();

    let (output, _) = render_input(&mut input, settled());

    assert!(output.contains("alfred (u4)"));
    assert!(!output.contains("alice (u1)"));
}

#[test]
fn test_horizontal_panel_shows_rows_on_one_line() {
    let (mut input, _) = test_input(horizontal_options());
    type_str(&mut input, "@a");
    input.set_suggestions(people(&[("u1", "ann"), ("u2", "abe")]));

    let (output, panel_area) = render_input(&mut input, settled());

    assert!(output.contains("ann (u1)  │  abe (u2)"));
    assert_eq!(panel_area.map(|area| area.height), Some(1));
}

#[test]
fn test_panel_gone_after_close_settles() {
    let (mut input, _) = test_input(vertical_options());
    type_str(&mut input, "@al ");

    let (output, panel_area) = render_input(&mut input, settled());

    assert!(!output.contains("Loading..."));
    assert_eq!(panel_area, None);
}

#[test]
fn test_desired_height_accounts_for_caret_and_panel() {
    let (mut input, _) = test_input(vertical_options());
    assert_eq!(input.desired_height(settled()), 3);

    type_str(&mut input, "@al");
    input.set_suggestions(people(&[("u1", "alice"), ("u2", "alina")]));

    assert_eq!(input.desired_height(settled()), 3 + 1 + 2);
}

#[test]
fn test_panel_rows_grow_during_animation() {
    let (mut input, _) = test_input(vertical_options());
    type_str(&mut input, "@al");
    input.set_suggestions(people(&[("u1", "a"), ("u2", "b"), ("u3", "c")]));

    let start = Instant::now();
    assert!(input.panel_rows(start) <= 3);
    assert_eq!(input.panel_rows(settled()), 3);
}
