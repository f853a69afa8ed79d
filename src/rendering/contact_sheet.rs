//! Contact sheet SVG assembly.
//!
//! Lays panels out in a fixed-column grid, a title above each tile, and
//! produces an SVG document with every panel embedded as a base64 PNG
//! data URI. Trailing grid cells of the last row stay empty.

use crate::assets;
use crate::error::RenderError;
use crate::models::SheetConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "contact_sheet.svg";

/// Outer margin and inter-tile gutter, in pixels.
const MARGIN: u32 = 16;
/// Vertical space reserved above each tile for its title.
const TITLE_BAR: u32 = 28;
/// Title font size.
const TITLE_SIZE: u32 = 16;

/// One labeled tile: a title and the PNG bytes shown under it.
pub struct Panel {
    title: String,
    png: Vec<u8>,
}

impl Panel {
    pub fn new(title: impl Into<String>, png: Vec<u8>) -> Self {
        Self {
            title: title.into(),
            png,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A grid of labeled panels, rendered to SVG.
pub struct ContactSheet {
    layout: SheetConfig,
    panels: Vec<Panel>,
}

impl ContactSheet {
    pub fn new(layout: SheetConfig, panels: Vec<Panel>) -> Self {
        Self { layout, panels }
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Effective column count: the configured width, narrowed when there
    /// are fewer panels than columns (a single panel gets a single-tile
    /// sheet, not a row of blanks).
    pub fn columns(&self) -> u32 {
        let n = self.panels.len().max(1) as u32;
        self.layout.columns.clamp(1, n)
    }

    pub fn rows(&self) -> u32 {
        let n = self.panels.len() as u32;
        n.div_ceil(self.columns())
    }

    pub fn width(&self) -> u32 {
        MARGIN + self.columns() * (self.layout.tile_width + MARGIN)
    }

    pub fn height(&self) -> u32 {
        MARGIN + self.rows() * (self.layout.tile_height + TITLE_BAR + MARGIN)
    }

    /// Render the sheet as an SVG document via the embedded template.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let template = assets::template_string(TEMPLATE_NAME)
            .ok_or_else(|| RenderError::TemplateNotFound(TEMPLATE_NAME.to_string()))?;

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &template)?;

        let columns = self.columns();
        let tile_w = self.layout.tile_width;
        let tile_h = self.layout.tile_height;

        let panels: Vec<serde_json::Value> = self
            .panels
            .iter()
            .enumerate()
            .map(|(idx, panel)| {
                let (row, col) = (idx as u32 / columns, idx as u32 % columns);
                let x = MARGIN + col * (tile_w + MARGIN);
                let cell_y = MARGIN + row * (tile_h + TITLE_BAR + MARGIN);
                json!({
                    "title": panel.title,
                    "data": BASE64.encode(&panel.png),
                    "x": x,
                    "y": cell_y + TITLE_BAR,
                    "title_x": x + tile_w / 2,
                    "title_y": cell_y + TITLE_SIZE,
                })
            })
            .collect();

        let data = json!({
            "sheet": {
                "width": self.width(),
                "height": self.height(),
                "tile_width": tile_w,
                "tile_height": tile_h,
                "title_size": TITLE_SIZE,
            },
            "panels": panels,
        });

        let context = Context::from_serialize(&data)?;
        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }
}
