//! Bayesian ELO ratings computed from game results.
//!
//! The engine produces the ranked mean and spread records that the chart renders.

pub mod bayesian_elo;
pub mod distribution;
pub mod game;
pub mod report;

pub use self::bayesian_elo::BayesianElo;
pub use self::distribution::Distribution;
