
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod numerics;
pub mod rating;
pub mod visualize;

pub use self::config::RenderConfig;
pub use self::error::{Error, Result};
pub use self::io::team_record::TeamRecord;
pub use self::visualize::renderer::DistributionRenderer;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub const INPUT_FILE: &str = "top20.json";
pub const OUTPUT_FILE: &str = "elo_distributions.png";
pub const GAMES_FILE: &str = "games.json";

/// Converts a size given in typographic points into pixels at `dpi`.
pub fn points_to_pixels(points: Float, dpi: Float) -> u32 {
    (points*dpi/72.0).round().max(1.0) as u32
}
