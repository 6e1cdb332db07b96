use plotters::style::RGBColor;
use serde::{Serialize, Deserialize};

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

/// Everything that decides how one curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    pub color: RGBColor,
    pub dash: DashStyle,
    /// Stroke width in points
    pub line_width: Float,
    pub opacity: Float,
    /// Opacity of the area under the curve, `None` when unshaded
    pub fill_opacity: Option<Float>,
    pub leader: bool,
}

pub fn parse_hex_color(hex: &str) -> Result<RGBColor> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(Error::Config(format!("invalid color '{}'", hex)));
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i+2], 16).map_err(|_| Error::Config(format!("invalid color '{}'", hex)));
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Assigns styles by position in the ranking.
///
/// Color cycles through the palette, the dash pattern changes every `group_size`
/// entries, the first `leader_count` entries are drawn heavier and the first
/// `shaded_count` entries get a filled area.
pub struct StyleRules {
    palette: Vec<RGBColor>,
    dash_styles: Vec<DashStyle>,
    group_size: usize,
    leader_count: usize,
    leader_line_width: Float,
    leader_opacity: Float,
    line_width: Float,
    opacity: Float,
    shaded_count: usize,
    fill_opacity: Float,
}

impl StyleRules {
    pub fn from_config(config: &RenderConfig) -> Result<StyleRules> {
        config.validate()?;
        let palette = config.palette.iter().map(|c| parse_hex_color(c)).collect::<Result<Vec<RGBColor>>>()?;
        Ok(StyleRules {
            palette,
            dash_styles: config.dash_styles.clone(),
            group_size: config.group_size,
            leader_count: config.leader_count,
            leader_line_width: config.leader_line_width,
            leader_opacity: config.leader_opacity,
            line_width: config.line_width,
            opacity: config.opacity,
            shaded_count: config.shaded_count,
            fill_opacity: config.fill_opacity
        })
    }

    pub fn color(&self, index: usize) -> RGBColor {
        self.palette[index % self.palette.len()]
    }

    pub fn dash(&self, index: usize) -> DashStyle {
        self.dash_styles[(index / self.group_size) % self.dash_styles.len()]
    }

    pub fn style(&self, index: usize) -> CurveStyle {
        let leader = index < self.leader_count;
        let (line_width, opacity) = match leader {
            true => (self.leader_line_width, self.leader_opacity),
            false => (self.line_width, self.opacity)
        };
        CurveStyle {
            color: self.color(index),
            dash: self.dash(index),
            line_width,
            opacity,
            fill_opacity: match index < self.shaded_count {
                true => Some(self.fill_opacity),
                false => None
            },
            leader
        }
    }
}

/// Removes every known suffix token from `name`.
///
/// Tokens are removed as literal substrings in list order. The pass repeats until
/// nothing changes, since a removal can join two fragments into a new token.
pub fn shorten_name<S: AsRef<str>>(name: &str, suffixes: &[S]) -> String {
    let mut short = name.to_string();
    loop {
        let before = short.len();
        for suffix in suffixes.iter().map(|s| s.as_ref()).filter(|s| !s.is_empty()) {
            short = short.replace(suffix, "");
        }
        if short.len() == before {
            return short;
        }
    }
}

pub fn legend_label<S: AsRef<str>>(rank: u32, name: &str, suffixes: &[S]) -> String {
    format!("{}. {}", rank, shorten_name(name, suffixes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAME_SUFFIXES;

    fn rules() -> StyleRules {
        StyleRules::from_config(&RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#1f77b4").unwrap(), RGBColor(0x1f, 0x77, 0xb4));
        assert!(parse_hex_color("#1f77").is_err());
        assert!(parse_hex_color("#zz77b4").is_err());
    }

    #[test]
    fn test_color_period() {
        let rules = rules();
        for i in 0..60 {
            assert_eq!(rules.color(i), rules.color(i + 20));
        }
        assert_ne!(rules.color(0), rules.color(1));
    }

    #[test]
    fn test_dash_period_and_groups() {
        let rules = rules();
        for i in 0..80 {
            assert_eq!(rules.dash(i), rules.dash(i + 40));
        }
        assert_eq!(rules.dash(0), DashStyle::Solid);
        assert_eq!(rules.dash(9), DashStyle::Solid);
        assert_eq!(rules.dash(10), DashStyle::Dashed);
        assert_eq!(rules.dash(25), DashStyle::DashDot);
        assert_eq!(rules.dash(39), DashStyle::Dotted);
    }

    #[test]
    fn test_leader_and_fill_thresholds() {
        let rules = rules();
        let styles = (0..20).map(|i| rules.style(i)).collect::<Vec<CurveStyle>>();
        assert_eq!(styles.iter().filter(|s| s.leader).count(), 6);
        assert_eq!(styles.iter().filter(|s| s.fill_opacity.is_some()).count(), 3);
        assert_eq!(styles[5].line_width, 2.5);
        assert_eq!(styles[5].opacity, 0.9);
        assert_eq!(styles[6].line_width, 1.8);
        assert_eq!(styles[6].opacity, 0.7);
        assert_eq!(styles[2].fill_opacity, Some(0.1));
    }

    #[test]
    fn test_shorten_name() {
        assert_eq!(shorten_name("Alabama Crimson Tide", &NAME_SUFFIXES), "Alabama");
        assert_eq!(shorten_name("Texas Tech Red Raiders", &NAME_SUFFIXES), "Texas Tech");
        assert_eq!(shorten_name("Gonzaga Bulldogs", &NAME_SUFFIXES), "Gonzaga Bulldogs");
        assert_eq!(legend_label(4, "Michigan State Spartans", &NAME_SUFFIXES), "4. Michigan State");
    }

    #[test]
    fn test_shorten_removes_exposed_tokens() {
        // Removing " Owls" joins " Cou" and "gars" into " Cougars", which comes earlier in the list.
        let name = "Houston Cou Owlsgars";
        let short = shorten_name(name, &NAME_SUFFIXES);
        assert_eq!(short, "Houston");
        for suffix in NAME_SUFFIXES.iter() {
            assert!(!short.contains(suffix));
        }
    }
}
