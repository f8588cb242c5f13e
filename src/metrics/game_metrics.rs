use std::time::Duration;

/// Per-session statistics shown in the header
///
/// Play time only accumulates while a round is running, so pauses and the
/// game-over screen do not count.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMetrics {
    pub play_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            play_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Add wall-clock time spent in a running round
    pub fn record_play(&mut self, elapsed: Duration) {
        self.play_time += elapsed;
    }

    pub fn on_game_start(&mut self) {
        self.play_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
