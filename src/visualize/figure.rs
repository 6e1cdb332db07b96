use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::numerics::max_value;
use crate::visualize::style::CurveStyle;
use crate::{float::consts::PI, Float};

/// One labelled curve sampled on the figure's shared domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub samples: Vec<(Float, Float)>,
    pub style: CurveStyle,
}

impl Curve {
    pub fn peak(&self) -> Option<Float> {
        max_value(&self.samples.iter().map(|s| s.1).collect::<Vec<Float>>())
    }

    /// Domain position of the tallest sample.
    pub fn peak_position(&self) -> Option<Float> {
        self.samples.iter().fold(None, |acc: Option<(Float, Float)>, &(x, y)| match acc {
            Some((_, best)) if best >= y => acc,
            _ => Some((x, y))
        }).map(|(x, _)| x)
    }
}

/// A chart under construction.
///
/// Created empty with the decorations of a [`RenderConfig`], filled with curves in
/// draw order and consumed by [`Figure::save`].
#[derive(Debug, Clone)]
pub struct Figure {
    pub config: RenderConfig,
    curves: Vec<Curve>,
}

impl Figure {
    pub fn new(config: RenderConfig) -> Figure {
        Figure {
            config,
            curves: Vec::new()
        }
    }

    pub fn add_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn x_range(&self) -> (Float, Float) {
        (self.config.domain_min, self.config.domain_max)
    }

    /// Upper vertical bound, the tallest curve plus headroom.
    ///
    /// Curves whose mass falls between or outside the samples can be zero everywhere.
    /// The axis then falls back to the peak height every rescaled curve shares.
    pub fn y_upper(&self) -> Result<Float> {
        let peaks = self.curves.iter().filter_map(Curve::peak).collect::<Vec<Float>>();
        match max_value(&peaks) {
            Some(peak) if peak > 0.0 => Ok(peak*self.config.y_headroom),
            Some(_) => Ok(self.nominal_peak()*self.config.y_headroom),
            None => Err(Error::EmptyInput)
        }
    }

    fn nominal_peak(&self) -> Float {
        self.config.rescale/(2.0*PI).sqrt()
    }

    pub fn leader_count(&self) -> usize {
        self.curves.iter().filter(|c| c.style.leader).count()
    }

    pub fn shaded_count(&self) -> usize {
        self.curves.iter().filter(|c| c.style.fill_opacity.is_some()).count()
    }

    /// Draws the figure and moves the finished image to `path`.
    ///
    /// The image is first written next to the target so that a failure part way
    /// through never leaves a truncated file at `path`.
    pub fn save(self, path: &Path) -> Result<()> {
        let y_upper = self.y_upper()?;
        let staging = staging_path(path);

        let drawn = super::plot::draw_figure(&self, y_upper, &staging).map_err(|e| Error::Drawing(e.to_string()));
        if let Err(err) = drawn {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }

        fs::rename(&staging, path)?;
        tracing::debug!("moved {} to {}", staging.display(), path.display());
        Ok(())
    }
}

/// Sibling of `path` whose name keeps the extension, which selects the encoder.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| crate::OUTPUT_FILE.to_string());
    path.with_file_name(format!(".partial-{}", file_name))
}
