//! Contact sheet assembly and rasterization.

mod common;

use common::fixtures;
use graylab::models::SheetConfig;
use graylab::rendering::{ContactSheet, Panel, SheetRenderer};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn photo_panel(title: &str) -> Panel {
    let mut png = Cursor::new(Vec::new());
    fixtures::sample_photo()
        .write_to(&mut png, image::ImageFormat::Png)
        .unwrap();
    Panel::new(title, png.into_inner())
}

#[test]
fn test_sheet_rasterizes_at_its_computed_size() {
    let layout = SheetConfig {
        columns: 2,
        tile_width: 64,
        tile_height: 64,
    };
    let sheet = ContactSheet::new(
        layout,
        vec![
            photo_panel("Original (RGB)"),
            photo_panel("Grayscale"),
            photo_panel("2 levels"),
        ],
    );

    let svg = sheet.to_svg().unwrap();
    let png = SheetRenderer::new()
        .render_png(&svg, sheet.width(), sheet.height())
        .unwrap();

    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), sheet.width());
    assert_eq!(decoded.height(), sheet.height());
}

#[test]
fn test_sheet_panels_actually_paint_pixels() {
    let layout = SheetConfig {
        columns: 1,
        tile_width: 64,
        tile_height: 64,
    };
    let sheet = ContactSheet::new(layout, vec![photo_panel("Only")]);

    let svg = sheet.to_svg().unwrap();
    let png = SheetRenderer::new()
        .render_png(&svg, sheet.width(), sheet.height())
        .unwrap();

    // The embedded photo has a dark gradient region; a blank (all-white)
    // sheet means the data URI was not decoded.
    let rgb = image::load_from_memory(&png).unwrap().to_rgb8();
    let non_white = rgb.pixels().filter(|p| p.0 != [255, 255, 255]).count();
    assert!(non_white > 0, "sheet rendered entirely white");
}
