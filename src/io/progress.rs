//! Multi-room progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display while rooms are searched
///
/// Each room gets a spinner that reports solutions found and nodes visited.
/// For large batches a single overall bar is added on top and only the most
/// recent rooms keep a spinner.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    room_bars: Vec<ProgressBar>,
    room_count: usize,
    /// Stores (`room name`, `solutions`, `nodes`, `done`) for rolling window display
    room_states: Vec<(String, usize, u64, bool)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Rooms: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            room_bars: Vec::new(),
            room_count: 0,
            room_states: Vec::new(),
        }
    }

    /// Initialize progress display based on room count
    pub fn initialize(&mut self, room_count: usize) {
        self.room_count = room_count;

        // Switch to batch mode for large room sets to avoid terminal spam
        if room_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(room_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = room_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(SPINNER_STYLE.clone());
            spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
            self.room_bars.push(self.multi_progress.add(spinner));
        }
    }

    /// Number of rooms the display was initialised for
    pub const fn room_count(&self) -> usize {
        self.room_count
    }

    /// Start tracking a room
    pub fn start_room(&mut self, index: usize, name: &str) {
        if index >= self.room_states.len() {
            self.room_states
                .resize(index + 1, (String::new(), 0, 0, false));
        }
        if let Some(state) = self.room_states.get_mut(index) {
            *state = (name.to_string(), 0, 0, false);
        }
        self.update_bars();
    }

    /// Report solutions found and nodes visited so far
    pub fn update_search(&mut self, index: usize, solutions: usize, nodes: u64) {
        if let Some(state) = self.room_states.get_mut(index) {
            state.1 = solutions;
            state.2 = nodes;
        }
        self.update_bars();
    }

    /// Mark room as searched and update batch progress
    pub fn complete_room(&mut self, index: usize, solutions: usize, _elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.room_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = solutions;
            state.3 = true;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All rooms searched");
        }
        for bar in &self.room_bars {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all spinners to show the last N active rooms
    fn update_bars(&self) {
        let active_rooms: Vec<_> = self
            .room_states
            .iter()
            .filter(|(name, ..)| !name.is_empty())
            .collect();

        let start_idx = active_rooms
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_rooms = active_rooms.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, solutions, nodes, done)) in visible_rooms.iter().enumerate() {
            if let Some(bar) = self.room_bars.get(bar_idx) {
                bar.set_prefix(name.clone());
                if *done {
                    bar.set_message(format!("{solutions} solutions"));
                } else {
                    bar.set_message(format!("{solutions} solutions, {nodes} nodes"));
                }
            }
        }

        // Clear any unused spinners
        for bar_idx in visible_rooms.len()..self.room_bars.len() {
            if let Some(bar) = self.room_bars.get(bar_idx) {
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
