pub mod figure;
pub mod plot;
pub mod renderer;
pub mod style;
