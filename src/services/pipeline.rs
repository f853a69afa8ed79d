//! Study orchestration.
//!
//! [`StudyPipeline`] wires the fetcher, loader, quantizer, edge detector,
//! writer and contact-sheet renderer into the study operations the CLI
//! exposes. Every operation saves its artifacts under the configured
//! output directory and renders a labeled sheet of its panels; `run_all`
//! produces the combined canvas.

use crate::error::{LoadError, StudyError};
use crate::models::AppConfig;
use crate::rendering::{ContactSheet, Panel, SheetRenderer};
use crate::services::fetcher::Fetcher;
use crate::services::loader::{self, Photo};
use crate::services::{vision, writer};
use gray_levels::LevelReducer;
use std::path::{Path, PathBuf};

/// What a study operation produced.
#[derive(Debug)]
pub struct StudyReport {
    /// Distinct gray values in the grayscale view, when the operation
    /// computed the census.
    pub unique_levels: Option<usize>,
    /// Every file written, in creation order.
    pub outputs: Vec<PathBuf>,
}

/// Orchestrates a gray-level study over one photograph.
pub struct StudyPipeline {
    config: AppConfig,
    fetcher: Fetcher,
    renderer: SheetRenderer,
}

impl StudyPipeline {
    pub fn new(config: AppConfig) -> Result<Self, StudyError> {
        Ok(Self {
            fetcher: Fetcher::new()?,
            renderer: SheetRenderer::new(),
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve the source photograph: a local file when given, otherwise
    /// a download-once of the configured sample into the output directory.
    pub fn acquire(&self, local: Option<&Path>) -> Result<Photo, StudyError> {
        let path = match local {
            Some(p) => {
                if !p.exists() {
                    return Err(StudyError::Load(LoadError::NotFound(p.to_path_buf())));
                }
                p.to_path_buf()
            }
            None => {
                let dest = self.config.output_dir.join("original.png");
                self.fetcher.fetch(&self.config.source_url, &dest)?;
                dest
            }
        };
        Ok(loader::load_photo(&path)?)
    }

    /// Save the original photograph in RGB and sheet it.
    pub fn run_original(&self, photo: &Photo) -> Result<StudyReport, StudyError> {
        let mut outputs = Vec::new();
        let panels = vec![self.original_panel(photo, &mut outputs)?];
        outputs.push(self.render_sheet(panels, "original_sheet.png")?);
        Ok(StudyReport {
            unique_levels: None,
            outputs,
        })
    }

    /// Save the grayscale view, report its census, and sheet it.
    pub fn run_gray(&self, photo: &Photo) -> Result<StudyReport, StudyError> {
        let mut outputs = Vec::new();
        let (panel, unique) = self.gray_panel(photo, &mut outputs)?;
        outputs.push(self.render_sheet(vec![panel], "gray_sheet.png")?);
        Ok(StudyReport {
            unique_levels: Some(unique),
            outputs,
        })
    }

    /// Reduce the grayscale view over a level series and sheet the results.
    ///
    /// `series` falls back to the configured level list.
    pub fn run_levels(&self, photo: &Photo, series: Option<&[u16]>) -> Result<StudyReport, StudyError> {
        let mut outputs = Vec::new();
        let panels = self.level_panels(photo, series.unwrap_or(&self.config.levels), &mut outputs)?;
        outputs.push(self.render_sheet(panels, "levels_sheet.png")?);
        Ok(StudyReport {
            unique_levels: None,
            outputs,
        })
    }

    /// Detect edges and sheet the result. Threshold overrides fall back
    /// to the configured values.
    pub fn run_edges(
        &self,
        photo: &Photo,
        low: Option<f32>,
        high: Option<f32>,
    ) -> Result<StudyReport, StudyError> {
        let mut outputs = Vec::new();
        let panel = self.edges_panel(photo, low, high, &mut outputs)?;
        outputs.push(self.render_sheet(vec![panel], "edges_sheet.png")?);
        Ok(StudyReport {
            unique_levels: None,
            outputs,
        })
    }

    /// The full study on one canvas: original, grayscale, the whole
    /// reduction series, and edges.
    pub fn run_all(&self, photo: &Photo) -> Result<StudyReport, StudyError> {
        let mut outputs = Vec::new();
        let mut panels = Vec::new();

        panels.push(self.original_panel(photo, &mut outputs)?);
        let (gray_panel, unique) = self.gray_panel(photo, &mut outputs)?;
        panels.push(gray_panel);
        panels.extend(self.level_panels(photo, &self.config.levels, &mut outputs)?);
        panels.push(self.edges_panel(photo, None, None, &mut outputs)?);

        outputs.push(self.render_sheet(panels, "contact_sheet.png")?);
        Ok(StudyReport {
            unique_levels: Some(unique),
            outputs,
        })
    }

    fn original_panel(&self, photo: &Photo, outputs: &mut Vec<PathBuf>) -> Result<Panel, StudyError> {
        let path = self.out("original_rgb.png");
        writer::save_rgb(&photo.rgb, &path)?;
        outputs.push(path);
        Ok(Panel::new("Original (RGB)", writer::rgb_png_bytes(&photo.rgb)?))
    }

    fn gray_panel(&self, photo: &Photo, outputs: &mut Vec<PathBuf>) -> Result<(Panel, usize), StudyError> {
        let path = self.out("gray.png");
        writer::save_gray(&photo.gray, &path)?;
        outputs.push(path);

        let unique = loader::gray_to_map(&photo.gray).unique_levels();
        tracing::info!(
            unique_levels = unique,
            "The grayscale image has {unique} distinct gray levels"
        );

        Ok((
            Panel::new("Grayscale", writer::gray_png_bytes(&photo.gray)?),
            unique,
        ))
    }

    fn level_panels(
        &self,
        photo: &Photo,
        series: &[u16],
        outputs: &mut Vec<PathBuf>,
    ) -> Result<Vec<Panel>, StudyError> {
        let map = loader::gray_to_map(&photo.gray);
        let mut panels = Vec::with_capacity(series.len());

        for &levels in series {
            let reducer = LevelReducer::new(levels)?;
            let reduced = loader::map_to_gray(reducer.reduce(&map));
            tracing::debug!(levels, factor = reducer.factor(), "Reduced gray levels");

            let path = self.out(&format!("gray_{levels}_levels.png"));
            writer::save_gray(&reduced, &path)?;
            outputs.push(path);

            panels.push(Panel::new(
                format!("{levels} levels"),
                writer::gray_png_bytes(&reduced)?,
            ));
        }
        Ok(panels)
    }

    fn edges_panel(
        &self,
        photo: &Photo,
        low: Option<f32>,
        high: Option<f32>,
        outputs: &mut Vec<PathBuf>,
    ) -> Result<Panel, StudyError> {
        let low = low.unwrap_or(self.config.edge.low_threshold);
        let high = high.unwrap_or(self.config.edge.high_threshold);

        let edges = vision::detect_edges(&photo.gray, low, high);
        tracing::debug!(low, high, "Detected edges");

        let path = self.out("canny_edges.png");
        writer::save_gray(&edges, &path)?;
        outputs.push(path);

        Ok(Panel::new("Edges (Canny)", writer::gray_png_bytes(&edges)?))
    }

    fn render_sheet(&self, panels: Vec<Panel>, file_name: &str) -> Result<PathBuf, StudyError> {
        let sheet = ContactSheet::new(self.config.sheet, panels);
        let svg = sheet.to_svg()?;
        let png = self.renderer.render_png(&svg, sheet.width(), sheet.height())?;

        let path = self.out(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, png)?;

        tracing::info!(
            path = %path.display(),
            panels = sheet.panel_count(),
            "Rendered contact sheet"
        );
        Ok(path)
    }

    fn out(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(name)
    }
}
