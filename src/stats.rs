//! Per-game play statistics
//!
//! One JSON blob per game in LocalStorage, loaded at mount and rewritten
//! wholesale on every game over. A missing or malformed record silently
//! becomes zeroed stats; the worst failure mode is starting from zero.

use serde::{Deserialize, Serialize};

/// Aggregate play-history record, independent of any single session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameStats {
    pub games_played: u32,
    pub high_score: u32,
    pub total_score: u64,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished session into the aggregate
    pub fn record_game(&mut self, score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(score);
        self.total_score += u64::from(score);
    }

    /// LocalStorage key for a game, e.g. `mini_arcade_stats_breakout`
    pub fn storage_key(game: &str) -> String {
        format!("mini_arcade_stats_{game}")
    }

    /// Load stats for a game from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(game: &str) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(&Self::storage_key(game)) {
                if let Ok(stats) = serde_json::from_str::<GameStats>(&json) {
                    log::info!("Loaded stats for {game}: {} plays", stats.games_played);
                    return stats;
                }
            }
        }

        log::info!("No stats for {game}, starting from zero");
        Self::new()
    }

    /// Overwrite the stored record for a game (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, game: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(&Self::storage_key(game), &json);
                log::info!("Stats saved for {game}");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(_game: &str) -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, _game: &str) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_game_updates_aggregates() {
        let mut stats = GameStats {
            games_played: 4,
            high_score: 250,
            total_score: 600,
        };
        stats.record_game(300);
        assert_eq!(stats.games_played, 5);
        assert_eq!(stats.high_score, 300);
        assert_eq!(stats.total_score, 900);
    }

    #[test]
    fn test_high_score_keeps_max() {
        let mut stats = GameStats::new();
        stats.record_game(500);
        stats.record_game(120);
        assert_eq!(stats.high_score, 500);
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_json_round_trip() {
        let stats = GameStats {
            games_played: 12,
            high_score: 4400,
            total_score: 31_000,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: GameStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn test_malformed_record_defaults_to_zero() {
        // Mirrors the load() fallback: garbage parses to None, callers
        // substitute the zeroed default
        let parsed = serde_json::from_str::<GameStats>("{not json").ok();
        assert_eq!(parsed.unwrap_or_default(), GameStats::new());
    }

    #[test]
    fn test_storage_keys_are_per_game() {
        assert_eq!(
            GameStats::storage_key("breakout"),
            "mini_arcade_stats_breakout"
        );
        assert_ne!(
            GameStats::storage_key("breakout"),
            GameStats::storage_key("flappy")
        );
    }
}
