//! Fonts for plate lettering.
//!
//! The plate is normally lettered with a bold TrueType face. When that face
//! cannot be loaded, rendering continues with a built-in 8x8 bitmap font
//! scaled up by an integer factor.

use std::path::Path;

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use log::warn;

use crate::rendering::layout::Rect;
use crate::{Error, Result};

/// Pixel size used for plate lettering.
pub const DEFAULT_FONT_SIZE: f32 = 130.0;

/// Magnification applied to the 8x8 fallback glyphs.
pub const BUILTIN_SCALE: u32 = 4;

const BUILTIN_CELL: i32 = 8;

#[derive(Clone)]
pub enum PlateFont {
    TrueType { font: FontArc, scale: PxScale },
    Builtin { scale: u32 },
}

impl std::fmt::Debug for PlateFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateFont::TrueType { scale, .. } => write!(f, "PlateFont::TrueType({}px)", scale.y),
            PlateFont::Builtin { scale } => write!(f, "PlateFont::Builtin(x{})", scale),
        }
    }
}

impl PlateFont {
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        let font = FontArc::try_from_vec(data)
            .map_err(|e| Error::AssetError(format!("Invalid font data: {}", e)))?;
        Ok(PlateFont::TrueType {
            font,
            scale: PxScale::from(size),
        })
    }

    pub fn open(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| Error::AssetError(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(data, size)
    }

    pub fn builtin() -> Self {
        PlateFont::Builtin { scale: BUILTIN_SCALE }
    }

    /// Load the TrueType font at `path`, falling back to the built-in font.
    /// The second value is the user-facing warning when the fallback is used.
    pub fn load_or_builtin(path: &Path, size: f32) -> (Self, Option<String>) {
        match Self::open(path, size) {
            Ok(font) => (font, None),
            Err(e) => {
                let msg = format!("Police introuvable, police par défaut utilisée. Erreur : {}", e);
                warn!("Font unavailable, using built-in fallback: {}", e);
                (Self::builtin(), Some(msg))
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, PlateFont::Builtin { .. })
    }

    /// Ink bounding box of `text` drawn with its origin at (0, 0).
    /// Empty or blank text yields an empty rectangle.
    pub fn measure(&self, text: &str) -> Rect {
        let mut ink = Rect::default();
        self.for_each_pixel(text, 0, 0, |x, y, _| {
            ink = ink.union(&Rect { x, y, width: 1, height: 1 });
        });
        ink
    }

    /// Visit every inked pixel of `text` drawn with its origin at `(x, y)`.
    /// The callback receives absolute coordinates and a coverage in `0..=1`.
    pub fn for_each_pixel<F>(&self, text: &str, x: i32, y: i32, mut plot: F)
    where
        F: FnMut(i32, i32, f32),
    {
        match self {
            PlateFont::TrueType { font, scale } => {
                for glyph in layout_glyphs(font, *scale, text, x as f32, y as f32) {
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        let (bx, by) = (bounds.min.x as i32, bounds.min.y as i32);
                        outlined.draw(|gx, gy, coverage| {
                            if coverage > 0.0 {
                                plot(bx + gx as i32, by + gy as i32, coverage.min(1.0));
                            }
                        });
                    }
                }
            }
            PlateFont::Builtin { scale } => {
                let s = *scale as i32;
                let mut pen_x = x;
                for c in text.chars().filter(|c| !c.is_control()) {
                    let rows = builtin_glyph(c);
                    for (row, bits) in rows.iter().enumerate() {
                        for col in 0..BUILTIN_CELL {
                            if bits & (1u8 << col) == 0 {
                                continue;
                            }
                            let px = pen_x + col * s;
                            let py = y + row as i32 * s;
                            for dy in 0..s {
                                for dx in 0..s {
                                    plot(px + dx, py + dy, 1.0);
                                }
                            }
                        }
                    }
                    pen_x += BUILTIN_CELL * s;
                }
            }
        }
    }
}

/// Lay out a single line with the baseline one ascent below `y`.
fn layout_glyphs(font: &FontArc, scale: PxScale, text: &str, x: f32, y: f32) -> Vec<ab_glyph::Glyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = point(x, y + scaled.ascent());
    let mut prev: Option<GlyphId> = None;
    let mut glyphs = Vec::new();
    for c in text.chars().filter(|c| !c.is_control()) {
        let id = scaled.glyph_id(c);
        if let Some(p) = prev {
            caret.x += scaled.kern(p, id);
        }
        glyphs.push(id.with_scale_and_position(scale, caret));
        caret.x += scaled.h_advance(id);
        prev = Some(id);
    }
    glyphs
}

/// Bitmap for `c`; characters outside the basic and Latin-1 sets draw as `?`.
fn builtin_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}
