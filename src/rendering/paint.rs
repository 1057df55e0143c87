/// Paint command set for plate compositing

/// Opaque black, the plate lettering color.
pub const BLACK: (u8, u8, u8, u8) = (0, 0, 0, 255);

/// Offsets used to fake a bold weight: the exact position plus the four
/// cardinal one-pixel neighbours.
pub const BOLD_OFFSETS: [(i32, i32); 5] = [(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)];

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Text {
        x: i32,
        y: i32,
        text: String,
        rgba: (u8, u8, u8, u8),
    },
}

/// Commands drawing `text` at `(x, y)` in faux bold.
pub fn bold_text(x: i32, y: i32, text: &str, rgba: (u8, u8, u8, u8)) -> Vec<PaintCommand> {
    BOLD_OFFSETS
        .iter()
        .map(|(dx, dy)| PaintCommand::Text {
            x: x + dx,
            y: y + dy,
            text: text.to_string(),
            rgba,
        })
        .collect()
}
