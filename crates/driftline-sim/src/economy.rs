//! Funds, score, and high-score bookkeeping.

use driftline_core::config::EconomyConfig;

/// Running economy and score totals for a session.
#[derive(Debug, Clone, Default)]
pub struct EconomyState {
    pub money: u32,
    pub score: u64,
    /// High watermark of `score` this session.
    pub high_score: u64,
}

impl EconomyState {
    pub fn new(cfg: &EconomyConfig) -> Self {
        Self {
            money: cfg.starting_money,
            score: 0,
            high_score: 0,
        }
    }

    /// Deduct `cost` if affordable. Returns false without mutating
    /// anything when funds are short.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        if self.money < cost {
            return false;
        }
        self.money -= cost;
        true
    }

    /// Credit a kill: currency plus score.
    pub fn award_kill(&mut self, cfg: &EconomyConfig) {
        self.money += cfg.kill_reward;
        self.score += cfg.kill_score;
        self.update_high_score();
    }

    /// Debit a leak. Score floors at zero.
    pub fn penalize_leak(&mut self, cfg: &EconomyConfig) {
        self.score = self.score.saturating_sub(cfg.leak_penalty);
        self.update_high_score();
    }

    fn update_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
