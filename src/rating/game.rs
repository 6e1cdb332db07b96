use serde::{Serialize, Deserialize};

/// A single game result as read from the games file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// ISO date (`YYYY-MM-DD`), which orders lexicographically.
    pub date: String,
    pub home_team_id: String,
    pub home_team: String,
    pub away_team_id: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default)]
    pub neutral_site: bool,
    #[serde(default = "completed_default")]
    pub completed: bool,
}

fn completed_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeAdvantage {
    /// Winner played at home
    #[serde(rename = "H")]
    Home,
    /// Winner played away
    #[serde(rename = "A")]
    Away,
    #[serde(rename = "N")]
    Neutral,
}

/// Winner and loser of a game, borrowed from the game itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<'a> {
    pub winner_id: &'a str,
    pub winner_name: &'a str,
    pub loser_id: &'a str,
    pub loser_name: &'a str,
    pub home_advantage: HomeAdvantage,
}

impl Game {

    /// `None` for unfinished games and ties, which carry no rating information.
    pub fn outcome(&self) -> Option<Outcome<'_>> {
        if !self.completed || self.home_score == self.away_score {
            return None;
        }

        let home_won = self.home_score > self.away_score;
        let home_advantage = match (self.neutral_site, home_won) {
            (true, _) => HomeAdvantage::Neutral,
            (false, true) => HomeAdvantage::Home,
            (false, false) => HomeAdvantage::Away
        };

        Some(match home_won {
            true => Outcome {
                winner_id: &self.home_team_id,
                winner_name: &self.home_team,
                loser_id: &self.away_team_id,
                loser_name: &self.away_team,
                home_advantage
            },
            false => Outcome {
                winner_id: &self.away_team_id,
                winner_name: &self.away_team,
                loser_id: &self.home_team_id,
                loser_name: &self.home_team,
                home_advantage
            }
        })
    }
}

#[cfg(test)]
pub(crate) fn game(date: &str, home: &str, away: &str, home_score: u32, away_score: u32) -> Game {
    Game {
        date: date.to_string(),
        home_team_id: home.to_string(),
        home_team: format!("{} Team", home),
        away_team_id: away.to_string(),
        away_team: format!("{} Team", away),
        home_score,
        away_score,
        neutral_site: false,
        completed: true
    }
}
