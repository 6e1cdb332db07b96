use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::visualize::style::DashStyle;
use crate::Float;

pub const DEFAULT_PALETTE: [&str; 20] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5",
    "#c49c94", "#f7b6d2", "#c7c7c7", "#dbdb8d", "#9edae5",
];

/// Mascot and organisation suffixes removed from legend labels, in removal order.
pub const NAME_SUFFIXES: [&str; 16] = [
    " Crimson Tide", " Volunteers", " Blue Devils", " Spartans", " Cougars",
    " Wildcats", " Red Storm", " Tigers", " Terrapins", " Owls", " Wolverines",
    " Aggies", " Razorbacks", " Rebels", " Red Raiders", " Gators",
];

/// Every constant that shapes the distribution chart.
///
/// The defaults reproduce the reference chart. A YAML file may override any subset
/// of the fields, the rest fall back to [`RenderConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub domain_min: Float,
    pub domain_max: Float,
    pub sample_count: usize,
    pub rescale: Float,
    pub palette: Vec<String>,
    pub group_size: usize,
    pub dash_styles: Vec<DashStyle>,
    pub leader_count: usize,
    pub leader_line_width: Float,
    pub leader_opacity: Float,
    pub line_width: Float,
    pub opacity: Float,
    pub shaded_count: usize,
    pub fill_opacity: Float,
    pub name_suffixes: Vec<String>,
    pub title: Vec<String>,
    pub title_font_size: Float,
    pub x_label: String,
    pub y_label: String,
    pub axis_label_font_size: Float,
    pub legend_title: String,
    pub legend_columns: usize,
    pub legend_font_size: Float,
    pub legend_title_font_size: Float,
    pub legend_opacity: Float,
    pub grid_opacity: Float,
    pub annotation: Vec<String>,
    pub annotation_font_size: Float,
    pub annotation_opacity: Float,
    pub y_headroom: Float,
    pub figure_width: Float,
    pub figure_height: Float,
    pub dpi: Float,
    pub output_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            domain_min: 1200.0,
            domain_max: 2600.0,
            sample_count: 500,
            rescale: 2.5,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            group_size: 10,
            dash_styles: vec![DashStyle::Solid, DashStyle::Dashed, DashStyle::DashDot, DashStyle::Dotted],
            leader_count: 6,
            leader_line_width: 2.5,
            leader_opacity: 0.9,
            line_width: 1.8,
            opacity: 0.7,
            shaded_count: 3,
            fill_opacity: 0.1,
            name_suffixes: NAME_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            title: vec![
                "NCAA Men's Basketball - Bayesian ELO Distributions (2025-26 Season)".to_string(),
                "Top 20 Teams".to_string(),
            ],
            title_font_size: 16.0,
            x_label: "ELO Rating".to_string(),
            y_label: "Probability Density (scaled)".to_string(),
            axis_label_font_size: 14.0,
            legend_title: "Rank. Team".to_string(),
            legend_columns: 2,
            legend_font_size: 9.0,
            legend_title_font_size: 10.0,
            legend_opacity: 0.95,
            grid_opacity: 0.3,
            annotation: vec![
                "Wider distributions = more uncertainty".to_string(),
                "Narrower distributions = more confidence in rating".to_string(),
            ],
            annotation_font_size: 10.0,
            annotation_opacity: 0.8,
            y_headroom: 1.05,
            figure_width: 14.0,
            figure_height: 10.0,
            dpi: 150.0,
            output_path: PathBuf::from(crate::OUTPUT_FILE),
        }
    }
}

impl RenderConfig {

    pub fn load(path: &Path) -> Result<RenderConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config: RenderConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::Config("palette must contain at least one color".to_string()));
        }
        if self.dash_styles.is_empty() {
            return Err(Error::Config("dash_styles must contain at least one style".to_string()));
        }
        if self.group_size == 0 {
            return Err(Error::Config("group_size must be positive".to_string()));
        }
        if !(self.domain_min < self.domain_max) {
            return Err(Error::Config(format!("domain [{}, {}] is empty", self.domain_min, self.domain_max)));
        }
        if self.sample_count < 2 {
            return Err(Error::Config("sample_count must be at least 2".to_string()));
        }
        if self.legend_columns == 0 {
            return Err(Error::Config("legend_columns must be positive".to_string()));
        }
        if !(self.dpi > 0.0) || !(self.figure_width > 0.0) || !(self.figure_height > 0.0) {
            return Err(Error::Config("figure size and dpi must be positive".to_string()));
        }
        Ok(())
    }

    /// Pixel dimensions of the output image.
    pub fn pixel_size(&self) -> (u32, u32) {
        ((self.figure_width*self.dpi).round() as u32, (self.figure_height*self.dpi).round() as u32)
    }

    pub fn pixels(&self, points: Float) -> u32 {
        crate::points_to_pixels(points, self.dpi)
    }
}
