//! Boot animation as an explicit phase machine driven by an external tick.
//!
//! The owner advances the sequence with elapsed time; the machine never schedules anything itself,
//! so tearing down the owning timer is all the cleanup there is.

use crate::model::BootConfig;

/// How long the logo shows before the progress bar appears.
pub const LOGO_PHASE_MS: u64 = 500;
/// Fade-out after `Complete` before the completion signal is raised.
pub const FADE_OUT_MS: u64 = 500;
const PROGRESS_TICKS: u64 = 50;
const PROGRESS_PER_TICK: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Logo,
    Loading,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootSignal {
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSequence {
    duration_ms: u64,
    elapsed_ms: u64,
    progress: u8,
    phase: BootPhase,
    completion_sent: bool,
}

impl BootSequence {
    pub fn new(config: BootConfig) -> Self {
        Self {
            duration_ms: config.duration_ms,
            elapsed_ms: 0,
            progress: 0,
            phase: BootPhase::Logo,
            completion_sent: false,
        }
    }

    /// Period of the progress timer: one progress step every `duration / 50` ms.
    pub fn tick_interval_ms(&self) -> u64 {
        (self.duration_ms / PROGRESS_TICKS).max(1)
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Progress in percent, `0..=100`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.completion_sent
    }

    pub fn tick(&mut self, delta_ms: u64) -> Option<BootSignal> {
        self.advance_to(self.elapsed_ms.saturating_add(delta_ms))
    }

    /// Moves the clock to `elapsed_ms` (never backwards) and returns the completion signal once.
    pub fn advance_to(&mut self, elapsed_ms: u64) -> Option<BootSignal> {
        self.elapsed_ms = self.elapsed_ms.max(elapsed_ms);

        let steps = self.elapsed_ms / self.tick_interval_ms();
        self.progress = steps.saturating_mul(PROGRESS_PER_TICK).min(100) as u8;

        self.phase = if self.elapsed_ms >= self.duration_ms {
            self.progress = 100;
            BootPhase::Complete
        } else if self.elapsed_ms >= LOGO_PHASE_MS {
            BootPhase::Loading
        } else {
            BootPhase::Logo
        };

        let fade_done = self.elapsed_ms >= self.duration_ms.saturating_add(FADE_OUT_MS);
        if self.phase == BootPhase::Complete && fade_done && !self.completion_sent {
            self.completion_sent = true;
            return Some(BootSignal::Completed);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sequence(duration_ms: u64) -> BootSequence {
        BootSequence::new(BootConfig { duration_ms })
    }

    #[test]
    fn default_duration_completes_exactly_once_after_full_progress() {
        let mut boot = sequence(3000);
        let interval = boot.tick_interval_ms();
        assert_eq!(interval, 60);

        let mut signals = 0;
        let mut saw_full_progress_before_signal = false;
        for _ in 0..200 {
            let before = boot.progress();
            if boot.tick(interval).is_some() {
                signals += 1;
                saw_full_progress_before_signal = before == 100;
            }
        }

        assert_eq!(signals, 1);
        assert!(saw_full_progress_before_signal);
        assert_eq!(boot.phase(), BootPhase::Complete);
        assert!(boot.is_finished());
    }

    #[test]
    fn phases_progress_linearly() {
        let mut boot = sequence(3000);
        assert_eq!(boot.phase(), BootPhase::Logo);

        boot.advance_to(499);
        assert_eq!(boot.phase(), BootPhase::Logo);
        assert_eq!(boot.progress(), 16);

        boot.advance_to(1500);
        assert_eq!(boot.phase(), BootPhase::Loading);
        assert_eq!(boot.progress(), 50);

        assert_eq!(boot.advance_to(3000), None);
        assert_eq!(boot.phase(), BootPhase::Complete);
        assert_eq!(boot.progress(), 100);

        assert_eq!(boot.advance_to(3500), Some(BootSignal::Completed));
        assert_eq!(boot.advance_to(9000), None);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut boot = sequence(1000);
        boot.advance_to(800);
        boot.advance_to(100);
        assert_eq!(boot.progress(), 80);
        assert_eq!(boot.phase(), BootPhase::Loading);
    }

    #[test]
    fn zero_duration_still_fades_out_before_signalling() {
        let mut boot = sequence(0);
        assert_eq!(boot.tick_interval_ms(), 1);
        assert_eq!(boot.advance_to(0), None);
        assert_eq!(boot.phase(), BootPhase::Complete);
        assert_eq!(boot.advance_to(FADE_OUT_MS), Some(BootSignal::Completed));
    }
}
