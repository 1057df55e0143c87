use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};
use siv_checker::rendering::font::PlateFont;
use siv_checker::rendering::{PlateRenderer, PlateTemplate};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_plate_matches_fixture() {
    let template = PlateTemplate::from_image(RgbaImage::from_pixel(520, 110, Rgba([255, 255, 255, 255])));
    let renderer = PlateRenderer::new(template, PlateFont::builtin());
    let png = renderer.render("AB-123-CD").to_png().expect("encode");
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");

    // Rendering is deterministic; the golden holds the digest of the PNG
    let digest = hex::encode(Sha256::digest(&png));
    assert_eq!(digest, hex::encode(Sha256::digest(&renderer.render("ab 123 cd").to_png().unwrap())));

    let expected_path = golden_path("plate_ab123cd.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
