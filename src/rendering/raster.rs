/// Rasterizer: composites paint commands onto an RGBA canvas

use image::{Rgba, RgbaImage};

use crate::rendering::font::PlateFont;
use crate::rendering::paint::PaintCommand;

pub fn rasterize(canvas: &mut RgbaImage, font: &PlateFont, commands: &[PaintCommand]) {
    let (w, h) = canvas.dimensions();
    for cmd in commands {
        match cmd {
            PaintCommand::Text { x, y, text, rgba } => {
                font.for_each_pixel(text, *x, *y, |px, py, coverage| {
                    if px < 0 || py < 0 || px as u32 >= w || py as u32 >= h {
                        return;
                    }
                    blend(canvas.get_pixel_mut(px as u32, py as u32), *rgba, coverage);
                });
            }
        }
    }
}

/// Source-over blend of `rgba` at the given coverage.
fn blend(dst: &mut Rgba<u8>, rgba: (u8, u8, u8, u8), coverage: f32) {
    let a = (rgba.3 as f32 / 255.0) * coverage;
    let src = [rgba.0, rgba.1, rgba.2];
    for (i, s) in src.iter().enumerate() {
        let d = dst.0[i] as f32;
        dst.0[i] = (*s as f32 * a + d * (1.0 - a)).round() as u8;
    }
    let da = dst.0[3] as f32 / 255.0;
    dst.0[3] = ((a + da * (1.0 - a)) * 255.0).round() as u8;
}
