use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::Float;

/// One ranked entity together with the normal distribution of its rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub team_name: String,
    pub mean_elo: Float,
    pub std_dev: Float,
    #[serde(flatten)]
    pub percentiles: Option<Percentiles>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub percentile_5: Float,
    pub percentile_25: Float,
    pub median: Float,
    pub percentile_75: Float,
    pub percentile_95: Float,
}

impl TeamRecord {
    pub fn new(rank: u32, team_name: &str, mean_elo: Float, std_dev: Float) -> TeamRecord {
        TeamRecord {
            rank,
            team_id: None,
            team_name: team_name.to_string(),
            mean_elo,
            std_dev,
            percentiles: None
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.std_dev {
            s if s > 0.0 && s.is_finite() && self.mean_elo.is_finite() => Ok(()),
            s => Err(Error::InvalidParameter { rank: self.rank, name: self.team_name.clone(), spread: s })
        }
    }
}

/// Checks the whole sequence before anything is drawn.
pub fn validate_records(records: &[TeamRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }
    records.iter().try_for_each(TeamRecord::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_parses() {
        let json = r#"{"rank": 1, "team_name": "Houston Cougars", "mean_elo": 2010.5, "std_dev": 75.2}"#;
        let record: TeamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, TeamRecord::new(1, "Houston Cougars", 2010.5, 75.2));
    }

    #[test]
    fn test_full_record_parses() {
        let json = r#"{"rank": 2, "team_id": "150", "team_name": "Duke Blue Devils", "mean_elo": 1990.0,
            "std_dev": 70.0, "percentile_5": 1875.0, "percentile_25": 1945.0, "median": 1990.0,
            "percentile_75": 2035.0, "percentile_95": 2105.0}"#;
        let record: TeamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.team_id.as_deref(), Some("150"));
        assert_eq!(record.percentiles.map(|p| p.median), Some(1990.0));
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"rank": 1, "team_name": "Houston Cougars", "mean_elo": 2010.5}"#;
        assert!(serde_json::from_str::<TeamRecord>(json).is_err());
    }

    #[test]
    fn test_validate_records() {
        assert!(matches!(validate_records(&[]), Err(Error::EmptyInput)));
        let records = vec!(TeamRecord::new(1, "A", 1500.0, 80.0), TeamRecord::new(2, "B", 1500.0, -1.0));
        match validate_records(&records) {
            Err(Error::InvalidParameter { rank, spread, .. }) => {
                assert_eq!(rank, 2);
                assert_eq!(spread, -1.0);
            },
            other => panic!("unexpected result {:?}", other)
        }
    }
}
