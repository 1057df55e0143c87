use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use siv_checker::display;
use siv_checker::lookup::FixtureLookup;
use siv_checker::rendering::font::PlateFont;
use siv_checker::rendering::{PlateRenderer, PlateTemplate};

fn bench_render_plate(c: &mut Criterion) {
    let template = PlateTemplate::from_image(RgbaImage::from_pixel(520, 110, Rgba([255, 255, 255, 255])));
    let renderer = PlateRenderer::new(template, PlateFont::builtin());

    c.bench_function("render_plate_builtin", |b| {
        b.iter(|| renderer.render("AB-123-CD"))
    });

    c.bench_function("render_plate_png", |b| {
        b.iter(|| renderer.render("AB-123-CD").to_png().unwrap())
    });
}

fn bench_display_lines(c: &mut Criterion) {
    let record = FixtureLookup::record();
    c.bench_function("display_lines", |b| b.iter(|| display::lines(&record)));
}

criterion_group!(benches, bench_render_plate, bench_display_lines);
criterion_main!(benches);
