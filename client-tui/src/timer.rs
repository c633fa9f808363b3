use chess_rules::Player;
use std::time::{Duration, Instant};

/// Two chess clocks counting the time each player has spent thinking.
pub struct ChessClock {
    white_elapsed: Duration,
    black_elapsed: Duration,
    active_side: Option<Player>,
    last_tick: Instant,
}

impl ChessClock {
    /// Both clocks at zero, paused.
    pub fn new() -> Self {
        Self::with_elapsed(Duration::ZERO, Duration::ZERO)
    }

    /// Clocks restored from a saved game, paused.
    pub fn with_elapsed(white: Duration, black: Duration) -> Self {
        Self {
            white_elapsed: white,
            black_elapsed: black,
            active_side: None,
            last_tick: Instant::now(),
        }
    }

    /// Add the time since the last tick to the running clock.
    /// Call this once per frame in the game loop.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        self.tick_with_elapsed(elapsed);
    }

    /// Tick with a specific elapsed duration (useful for testing).
    pub fn tick_with_elapsed(&mut self, elapsed: Duration) {
        match self.active_side {
            Some(Player::White) => self.white_elapsed += elapsed,
            Some(Player::Black) => self.black_elapsed += elapsed,
            None => {}
        }
    }

    /// Start or switch the clock to the given side.
    pub fn switch_to(&mut self, side: Player) {
        self.last_tick = Instant::now();
        self.active_side = Some(side);
    }

    /// Stop both clocks, keeping the time already spent.
    pub fn pause(&mut self) {
        self.tick();
        self.active_side = None;
    }

    /// Restart the clock of the side to move.
    pub fn resume(&mut self, turn: Player) {
        self.switch_to(turn);
    }

    pub fn elapsed(&self, side: Player) -> Duration {
        match side {
            Player::White => self.white_elapsed,
            Player::Black => self.black_elapsed,
        }
    }

    /// Get which side's clock is currently running, if any.
    pub fn active_side(&self) -> Option<Player> {
        self.active_side
    }

    /// Format a duration as `M:SS`.
    pub fn format_time(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for ChessClock {
    fn default() -> Self {
        Self::new()
    }
}
