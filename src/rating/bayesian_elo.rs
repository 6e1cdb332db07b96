use std::collections::BTreeMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::io::team_record::{Percentiles, TeamRecord};
use crate::rating::distribution::{Distribution, ELO_STEP};
use crate::rating::game::{Game, HomeAdvantage};
use crate::Float;

/// K factor of the win likelihood, tuned by cross-validation on past seasons.
pub const OPTIMAL_K_FACTOR: Float = 0.90;

#[derive(Debug, Clone)]
pub struct TeamRating {
    pub team_id: String,
    pub team_name: String,
    pub dist: Distribution,
}

/// Pre-game state of one processed game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub date: String,
    pub winner_name: String,
    pub winner_id: String,
    pub loser_name: String,
    pub loser_id: String,
    pub winner_elo: Float,
    pub loser_elo: Float,
    pub win_prob: Float,
    pub home_advantage: HomeAdvantage,
}

/// Bayesian ELO over a discretized rating grid.
///
/// Every team starts from the same normal prior. Each game multiplies the joint
/// distribution of both teams by the likelihood of the observed winner and
/// marginalizes the result back onto each team.
pub struct BayesianElo {
    pub teams: BTreeMap<String, TeamRating>,
    pub k_factor: Float,
    pub game_log: Vec<GameResult>,
    prior: Distribution,
    likelihood: Vec<Float>,
}

impl BayesianElo {

    pub fn new() -> BayesianElo {
        BayesianElo::with_k_factor(OPTIMAL_K_FACTOR)
    }

    pub fn with_k_factor(k_factor: Float) -> BayesianElo {
        let prior = Distribution::normal_prior();
        let n = prior.len() as isize;
        // All distributions share the prior's uniform grid, so the likelihood only
        // depends on the index offset between the two ratings.
        let likelihood = (-(n-1)..n).map(|offset| win_probability(offset as Float*ELO_STEP, k_factor)).collect();
        BayesianElo {
            teams: BTreeMap::new(),
            k_factor,
            game_log: Vec::new(),
            prior,
            likelihood
        }
    }

    fn likelihood_at(&self, winner_idx: usize, loser_idx: usize) -> Float {
        self.likelihood[winner_idx + self.prior.len() - 1 - loser_idx]
    }

    fn get_or_create_team(&mut self, team_id: &str, team_name: &str) {
        if !self.teams.contains_key(team_id) {
            let team = TeamRating {
                team_id: team_id.to_string(),
                team_name: team_name.to_string(),
                dist: self.prior.clone()
            };
            self.teams.insert(team_id.to_string(), team);
        }
    }

    pub fn process_game(&mut self, game: &Game) {
        let outcome = match game.outcome() {
            Some(outcome) => outcome,
            None => return
        };

        self.get_or_create_team(outcome.winner_id, outcome.winner_name);
        self.get_or_create_team(outcome.loser_id, outcome.loser_name);

        let winner_probs = self.teams[outcome.winner_id].dist.probs.clone();
        let loser_probs = self.teams[outcome.loser_id].dist.probs.clone();
        let winner_pre_mean = self.teams[outcome.winner_id].dist.mean();
        let loser_pre_mean = self.teams[outcome.loser_id].dist.mean();
        let pre_win_prob = win_probability(winner_pre_mean - loser_pre_mean, self.k_factor);

        let n = winner_probs.len();
        let mut new_winner_probs = vec![0.0; n];
        let mut new_loser_probs = vec![0.0; n];
        let mut total = 0.0;

        for i in 0..n {
            let p_winner = winner_probs[i];
            if p_winner == 0.0 {
                continue;
            }
            for j in 0..n {
                let joint = p_winner*loser_probs[j]*self.likelihood_at(i, j);
                new_winner_probs[i] += joint;
                new_loser_probs[j] += joint;
                total += joint;
            }
        }

        // Marginals of the normalized joint are the marginals divided by its mass.
        if total > 0.0 {
            new_winner_probs.iter_mut().for_each(|p| *p /= total);
            new_loser_probs.iter_mut().for_each(|p| *p /= total);
        }

        if let Some(winner) = self.teams.get_mut(outcome.winner_id) {
            winner.dist.probs = new_winner_probs;
            winner.dist.normalize();
        }
        if let Some(loser) = self.teams.get_mut(outcome.loser_id) {
            loser.dist.probs = new_loser_probs;
            loser.dist.normalize();
        }

        self.game_log.push(GameResult {
            date: game.date.clone(),
            winner_name: outcome.winner_name.to_string(),
            winner_id: outcome.winner_id.to_string(),
            loser_name: outcome.loser_name.to_string(),
            loser_id: outcome.loser_id.to_string(),
            winner_elo: winner_pre_mean,
            loser_elo: loser_pre_mean,
            win_prob: pre_win_prob,
            home_advantage: outcome.home_advantage
        });
    }

    /// Processes games in date order. Games on the same date keep their input order.
    pub fn process_games(&mut self, games: &[Game]) {
        let mut ordered = games.iter().collect::<Vec<&Game>>();
        ordered.sort_by(|a, b| a.date.cmp(&b.date));
        for game in ordered {
            self.process_game(game);
        }
        tracing::info!("processed {} games for {} teams", self.game_log.len(), self.teams.len());
    }

    /// Teams by descending mean rating, ties broken by team id.
    pub fn rankings(&self) -> Vec<&TeamRating> {
        let mut rankings = self.teams.values().map(|t| (t.dist.mean(), t)).collect::<Vec<(Float, &TeamRating)>>();
        rankings.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.1.team_id.cmp(&b.1.team_id)));
        rankings.into_iter().map(|(_, t)| t).collect()
    }

    pub fn top_records(&self, count: usize) -> Vec<TeamRecord> {
        self.rankings().into_iter().take(count).enumerate().map(|(i, team)| {
            let dist = &team.dist;
            TeamRecord {
                rank: (i + 1) as u32,
                team_id: Some(team.team_id.clone()),
                team_name: team.team_name.clone(),
                mean_elo: dist.mean(),
                std_dev: dist.std(),
                percentiles: Some(Percentiles {
                    percentile_5: dist.percentile(5.0),
                    percentile_25: dist.percentile(25.0),
                    median: dist.percentile(50.0),
                    percentile_75: dist.percentile(75.0),
                    percentile_95: dist.percentile(95.0)
                })
            }
        }).collect()
    }

    /// Probability that `team_a` beats `team_b`, integrated over both distributions.
    pub fn predict_matchup(&self, team_a: &str, team_b: &str) -> Result<Float> {
        let a = self.teams.get(team_a).ok_or_else(|| Error::UnknownTeam(team_a.to_string()))?;
        let b = self.teams.get(team_b).ok_or_else(|| Error::UnknownTeam(team_b.to_string()))?;

        let mut win_prob = 0.0;
        for (i, p_a) in a.dist.probs.iter().enumerate() {
            for (j, p_b) in b.dist.probs.iter().enumerate() {
                win_prob += p_a*p_b*self.likelihood_at(i, j);
            }
        }
        Ok(win_prob)
    }
}

impl Default for BayesianElo {
    fn default() -> Self {
        BayesianElo::new()
    }
}

/// Probability that the higher rated side wins given a rating difference.
pub fn win_probability(diff: Float, k_factor: Float) -> Float {
    1.0/(1.0 + (10.0 as Float).powf(-diff*k_factor/400.0))
}
