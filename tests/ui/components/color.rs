use ratatui::style::Color;
use taskboard::utils::color::{named_color, tag_color};

#[test]
fn test_named_color() {
    let red_color = named_color("red");
    let blue_color = named_color("blue");
    // Colors should not be the same
    assert_ne!(red_color, blue_color, "Red and blue should be different colors");
    assert_eq!(named_color("not-a-color"), named_color("unknown"));
}

#[test]
fn test_tag_color_is_deterministic() {
    assert_eq!(tag_color("design"), tag_color("design"));
    assert!(matches!(tag_color("design"), Color::Rgb(..)));
}
