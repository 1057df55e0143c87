/// Placement geometry for plate text

/// Axis-aligned pixel rectangle. For measured text, `x`/`y` are relative to
/// the drawing origin (top-left of the line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn from_extents(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Rect {
            x: min_x,
            y: min_y,
            width: (max_x - min_x).max(0) as u32,
            height: (max_y - min_y).max(0) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Smallest rectangle containing both. Empty rectangles are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::from_extents(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

/// Text top sits at this fraction of the template height.
pub const VERTICAL_FRACTION: f32 = 0.28;

/// Drawing origin that centers `ink` horizontally on a `width`×`height`
/// canvas. The ink's left bearing is compensated so the visible glyphs, not
/// the pen position, end up centered. Text wider than the canvas yields a
/// negative x and is clipped evenly on both sides.
pub fn text_origin(width: u32, height: u32, ink: Rect) -> (i32, i32) {
    let x = (width as i32 - ink.width as i32).div_euclid(2) - ink.x;
    let y = (height as f32 * VERTICAL_FRACTION) as i32;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_ink_horizontally() {
        let ink = Rect { x: 0, y: 10, width: 100, height: 40 };
        assert_eq!(text_origin(520, 110, ink), (210, 30));
    }

    #[test]
    fn compensates_left_bearing() {
        let ink = Rect { x: 6, y: 0, width: 100, height: 40 };
        let (x, _) = text_origin(520, 110, ink);
        assert_eq!(x + ink.x, 210);
    }

    #[test]
    fn oversized_text_goes_negative() {
        let ink = Rect { x: 0, y: 0, width: 601, height: 40 };
        let (x, _) = text_origin(520, 110, ink);
        assert_eq!(x, -41);
    }

    #[test]
    fn union_skips_empty() {
        let a = Rect::default();
        let b = Rect { x: 2, y: 3, width: 4, height: 5 };
        assert_eq!(a.union(&b), b);
        let c = Rect { x: 10, y: 0, width: 2, height: 2 };
        assert_eq!(b.union(&c), Rect { x: 2, y: 0, width: 10, height: 8 });
    }
}
