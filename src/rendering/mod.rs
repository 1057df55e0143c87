//! Plate image rendering
//!
//! A [`PlateRenderer`] holds a blank plate template and a font, and letters
//! normalized plate text onto a copy of the template: centered horizontally,
//! at a fixed fraction of the height, in faux bold black.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::io::Cursor;
use std::path::Path;

use base64::Engine as _;
use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::plate;
use crate::{Error, Result};
use font::PlateFont;

/// Blank plate bitmap, decoded once and copied for every render.
#[derive(Debug, Clone)]
pub struct PlateTemplate {
    image: RgbaImage,
}

impl PlateTemplate {
    /// Open the template; a missing or undecodable file is fatal.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::AssetError(format!(
                "Image introuvable : {}",
                path.display()
            )));
        }
        let image = image::open(path)
            .map_err(|e| Error::AssetError(format!("{}: {}", path.display(), e)))?
            .to_rgba8();
        Ok(Self { image })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// A lettered plate, ready for display.
#[derive(Debug, Clone)]
pub struct RenderedPlate {
    /// Normalized text that was drawn
    pub text: String,
    pub image: RgbaImage,
}

impl RenderedPlate {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// PNG encoded as a `data:` URI for inline `<img>` display.
    pub fn to_data_uri(&self) -> Result<String> {
        let png = self.to_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(png)
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PlateRenderer {
    template: PlateTemplate,
    font: PlateFont,
    font_warning: Option<String>,
}

impl PlateRenderer {
    pub fn new(template: PlateTemplate, font: PlateFont) -> Self {
        Self {
            template,
            font,
            font_warning: None,
        }
    }

    /// Build from asset files. The template is required; the font degrades to
    /// the built-in face with a warning.
    pub fn from_assets(template_path: &Path, font_path: &Path) -> Result<Self> {
        let template = PlateTemplate::open(template_path)?;
        let (font, font_warning) = PlateFont::load_or_builtin(font_path, font::DEFAULT_FONT_SIZE);
        Ok(Self {
            template,
            font,
            font_warning,
        })
    }

    /// Warning to show the user when lettering uses the fallback font.
    pub fn font_warning(&self) -> Option<&str> {
        self.font_warning.as_deref()
    }

    pub fn font(&self) -> &PlateFont {
        &self.font
    }

    /// Letter `plate_text` onto a fresh copy of the template. Never fails:
    /// empty input gives a blank plate and unknown glyphs degrade visually.
    pub fn render(&self, plate_text: &str) -> RenderedPlate {
        let text = plate::normalize(plate_text);
        let mut image = self.template.image.clone();
        let ink = self.font.measure(&text);
        let (x, y) = layout::text_origin(image.width(), image.height(), ink);
        debug!("Lettering {:?} at ({}, {}) ink={:?}", text, x, y, ink);
        let commands = paint::bold_text(x, y, &text, paint::BLACK);
        raster::rasterize(&mut image, &self.font, &commands);
        RenderedPlate { text, image }
    }
}
