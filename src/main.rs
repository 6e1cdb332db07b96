extern crate color_eyre;

use std::path::Path;
use color_eyre::eyre::Result;

use elo_dist::io::load_team_records;
use elo_dist::logging::{init_logging, DEFAULT_FILTER};
use elo_dist::{DistributionRenderer, RenderConfig, INPUT_FILE};

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging(DEFAULT_FILTER);

    let records = load_team_records(Path::new(INPUT_FILE))?;
    let renderer = DistributionRenderer::new(RenderConfig::default())?;
    renderer.render(&records)?;

    println!("Saved {}", renderer.config().output_path.display());
    Ok(())
}
