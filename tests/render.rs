use std::fs;
use std::path::Path;
use std::process::Command;
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal, Uniform};

use elo_dist::config::NAME_SUFFIXES;
use elo_dist::io::write_json;
use elo_dist::{DistributionRenderer, Error, Float, RenderConfig, TeamRecord};

const TEAMS: [&str; 20] = [
    "Auburn Tigers", "Duke Blue Devils", "Houston Cougars", "Florida Gators", "Alabama Crimson Tide",
    "Tennessee Volunteers", "Michigan State Spartans", "Iowa State Cyclones", "Texas Tech Red Raiders", "Kentucky Wildcats",
    "St. John's Red Storm", "Maryland Terrapins", "Wisconsin Badgers", "Arizona Wildcats", "Purdue Boilermakers",
    "Texas A&M Aggies", "Michigan Wolverines", "Ole Miss Rebels", "Missouri Tigers", "Arkansas Razorbacks",
];

fn top20() -> Vec<TeamRecord> {
    TEAMS.iter().enumerate().map(|(i, name)| {
        let mean = 2400.0 - 1000.0*i as Float/19.0;
        TeamRecord::new(i as u32 + 1, name, mean, 80.0)
    }).collect()
}

#[test]
fn test_render_top20_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elo_distributions.png");
    let renderer = DistributionRenderer::new(RenderConfig::default()).unwrap();

    renderer.render_to(&top20(), &path).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (2100, 1500));
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(image.get_pixel(2099, 1499).0, [255, 255, 255]);
    assert!(image.pixels().any(|p| p.0 != [255, 255, 255]));

    let leftovers = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_render_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elo_distributions.png");
    fs::write(&path, b"stale").unwrap();

    let renderer = DistributionRenderer::new(RenderConfig::default()).unwrap();
    renderer.render_to(&top20()[..4], &path).unwrap();
    assert!(image::open(&path).is_ok());
}

#[test]
fn test_random_rankings_keep_style_invariants() {
    let mut rng = SmallRng::seed_from_u64(7);
    let means = Normal::new(1900.0, 200.0).unwrap();
    let spreads = Uniform::new(20.0, 250.0);
    let renderer = DistributionRenderer::new(RenderConfig::default()).unwrap();

    for _ in 0..20 {
        let n: usize = rng.gen_range(1..45);
        let records = (0..n).map(|i| {
            let name = format!("{}{}", TEAMS[rng.gen_range(0..TEAMS.len())], NAME_SUFFIXES[rng.gen_range(0..NAME_SUFFIXES.len())]);
            TeamRecord::new(i as u32 + 1, &name, means.sample(&mut rng), spreads.sample(&mut rng))
        }).collect::<Vec<TeamRecord>>();

        let figure = renderer.build_figure(&records).unwrap();
        assert_eq!(figure.shaded_count(), n.min(3));
        assert_eq!(figure.leader_count(), n.min(6));

        for (i, curve) in figure.curves().iter().enumerate() {
            assert!(curve.label.starts_with(&format!("{}. ", i + 1)));
            assert!(NAME_SUFFIXES.iter().all(|s| !curve.label.contains(s)), "label {}", curve.label);
            assert_eq!(curve.style.color, figure.curves()[i % 20].style.color);
        }

        let tallest = figure.curves().iter().filter_map(|c| c.peak()).fold(0.0, Float::max);
        assert!((figure.y_upper().unwrap() - 1.05*tallest).abs() < 1e-12);
    }
}

#[test]
fn test_invalid_records_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elo_distributions.png");
    let renderer = DistributionRenderer::new(RenderConfig::default()).unwrap();

    assert!(matches!(renderer.render_to(&[], &path), Err(Error::EmptyInput)));

    let zero_spread = vec!(TeamRecord::new(1, "Auburn Tigers", 2100.0, 0.0));
    assert!(matches!(renderer.render_to(&zero_spread, &path), Err(Error::InvalidParameter { .. })));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_render_narrow_and_offscale_spreads() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = DistributionRenderer::new(RenderConfig::default()).unwrap();

    // Mass between two samples, and mass far above the axis.
    let narrow = vec!(TeamRecord::new(1, "Auburn Tigers", 1201.4, 0.01));
    let offscale = vec!(TeamRecord::new(1, "Auburn Tigers", 9000.0, 40.0), TeamRecord::new(2, "Duke Blue Devils", 1201.4, 0.01));

    for (i, records) in [narrow, offscale].iter().enumerate() {
        let path = dir.path().join(format!("chart_{}.png", i));
        renderer.render_to(records, &path).unwrap();
        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (2100, 1500));
    }
}

fn run_binary(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_elo_dist")).current_dir(dir).output().unwrap()
}

#[test]
fn test_binary_saves_chart() {
    let dir = tempfile::tempdir().unwrap();
    write_json(&top20(), &dir.path().join("top20.json")).unwrap();

    let output = run_binary(dir.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Saved elo_distributions.png"));
    assert!(dir.path().join("elo_distributions.png").exists());
}

#[test]
fn test_binary_fails_on_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("top20.json"), "[]").unwrap();

    let output = run_binary(dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no records"));
    assert!(!dir.path().join("elo_distributions.png").exists());
}

#[test]
fn test_binary_fails_on_zero_spread() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("top20.json"), r#"[{"rank": 1, "team_name": "Auburn Tigers", "mean_elo": 2100.0, "std_dev": 0.0}]"#).unwrap();

    let output = run_binary(dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid spread"));
    assert!(!dir.path().join("elo_distributions.png").exists());
}

#[test]
fn test_binary_fails_without_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_binary(dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not read input file"));
}
