use std::path::Path;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::io::team_record::{validate_records, TeamRecord};
use crate::numerics::{linspace, scaled_density};
use crate::visualize::figure::{Curve, Figure};
use crate::visualize::style::{legend_label, StyleRules};
use crate::Float;

/// Turns ranked records into the overlaid distribution chart.
pub struct DistributionRenderer {
    config: RenderConfig,
    rules: StyleRules,
    samples: Vec<Float>,
}

impl DistributionRenderer {
    pub fn new(config: RenderConfig) -> Result<DistributionRenderer> {
        let rules = StyleRules::from_config(&config)?;
        let samples = linspace(config.domain_min, config.domain_max, config.sample_count);
        Ok(DistributionRenderer { config, rules, samples })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn samples(&self) -> &[Float] {
        &self.samples
    }

    pub fn curve(&self, index: usize, record: &TeamRecord) -> Curve {
        let density = scaled_density(&self.samples, record.mean_elo, record.std_dev, self.config.rescale);
        Curve {
            label: legend_label(record.rank, &record.team_name, self.config.name_suffixes.as_slice()),
            samples: self.samples.iter().cloned().zip(density.into_iter()).collect(),
            style: self.rules.style(index)
        }
    }

    /// Validates every record, then lays out one curve per record in rank order.
    pub fn build_figure(&self, records: &[TeamRecord]) -> Result<Figure> {
        validate_records(records)?;
        let mut figure = Figure::new(self.config.clone());
        for (index, record) in records.iter().enumerate() {
            figure.add_curve(self.curve(index, record));
        }
        Ok(figure)
    }

    /// Renders `records` to `path`. Nothing is written when the records are rejected.
    pub fn render_to(&self, records: &[TeamRecord], path: &Path) -> Result<()> {
        let figure = self.build_figure(records)?;
        tracing::info!("rendering {} distributions ({} leading, {} shaded)", figure.curves().len(), figure.leader_count(), figure.shaded_count());
        figure.save(path)
    }

    /// Renders to the configured output path.
    pub fn render(&self, records: &[TeamRecord]) -> Result<()> {
        self.render_to(records, &self.config.output_path)
    }
}
