use ratatui::style::Color;

/// Palette tags are spread over, in the order they are assigned
const TAG_PALETTE: [&str; 8] = [
    "blue",
    "green",
    "orange",
    "violet",
    "teal",
    "magenta",
    "olive_green",
    "salmon",
];

/// Convert a palette color name to a terminal color
#[must_use]
pub fn named_color(color: &str) -> Color {
    match color.to_lowercase().as_str() {
        "berry_red" => Color::Rgb(184, 37, 95),
        "red" => Color::Rgb(220, 76, 62),
        "orange" => Color::Rgb(199, 113, 0),
        "yellow" => Color::Rgb(178, 145, 4),
        "olive_green" => Color::Rgb(148, 156, 49),
        "green" => Color::Rgb(54, 147, 7),
        "teal" => Color::Rgb(20, 143, 173),
        "blue" => Color::Rgb(65, 128, 255),
        "violet" => Color::Rgb(202, 63, 238),
        "magenta" => Color::Rgb(224, 80, 149),
        "salmon" => Color::Rgb(201, 118, 111),
        "grey" | "gray" => Color::Rgb(153, 153, 153),
        _ => Color::Rgb(65, 128, 255), // Default to blue
    }
}

/// Stable color for a free-form tag
///
/// The same tag text always maps to the same palette entry, independent of
/// letter case.
#[must_use]
pub fn tag_color(tag: &str) -> Color {
    let hash = tag
        .to_lowercase()
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    named_color(TAG_PALETTE[hash as usize % TAG_PALETTE.len()])
}
