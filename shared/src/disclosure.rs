//! Open/close lifecycle of the transaction detail modal.
//!
//! The modal is rendered first and revealed a moment later, and fades out
//! before it is unmounted. Those delays are not performed here: every
//! transition that needs one hands back a [`PendingTransition`] which the UI
//! turns into a timer. Only the most recent pending transition is honoured;
//! a timer that fires with an older token is ignored, which is how a new
//! request cancels the previously scheduled one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Delays of the reveal and fade-out animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureTiming {
    pub reveal_delay_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for DisclosureTiming {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 10,
            fade_out_ms: 300,
        }
    }
}

/// A delayed phase change waiting for its timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub token: u64,
    pub target: ModalPhase,
    pub delay_ms: u32,
}

/// Modal state for one modal instance
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure<R> {
    phase: ModalPhase,
    active_record: Option<R>,
    pending: Option<PendingTransition>,
    next_token: u64,
    timing: DisclosureTiming,
}

impl<R> Default for Disclosure<R> {
    fn default() -> Self {
        Self::new(DisclosureTiming::default())
    }
}

impl<R> Disclosure<R> {
    pub fn new(timing: DisclosureTiming) -> Self {
        Self {
            phase: ModalPhase::Closed,
            active_record: None,
            pending: None,
            next_token: 0,
            timing,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn active_record(&self) -> Option<&R> {
        self.active_record.as_ref()
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn timing(&self) -> DisclosureTiming {
        self.timing
    }

    /// Whether the modal should be in the DOM at all
    pub fn is_mounted(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Whether the modal should be drawn fully visible
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Shows `record`. Returns the transition that now needs a timer, if any.
    pub fn open(&mut self, record: R) -> Option<PendingTransition> {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {
                self.active_record = Some(record);
                self.phase = ModalPhase::Opening;
                Some(self.schedule(ModalPhase::Open, self.timing.reveal_delay_ms))
            }
            // Swap the record without restarting the reveal
            ModalPhase::Opening | ModalPhase::Open => {
                self.active_record = Some(record);
                None
            }
        }
    }

    /// Starts the fade-out. No-op while already closing or closed.
    pub fn close(&mut self) -> Option<PendingTransition> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                Some(self.schedule(ModalPhase::Closed, self.timing.fade_out_ms))
            }
            ModalPhase::Closing | ModalPhase::Closed => None,
        }
    }

    /// Applies the pending transition if `token` is still the current one.
    /// Returns whether the phase changed.
    pub fn elapse(&mut self, token: u64) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.phase = pending.target;
                if self.phase == ModalPhase::Closed {
                    self.active_record = None;
                }
                true
            }
            _ => false,
        }
    }

    fn schedule(&mut self, target: ModalPhase, delay_ms: u32) -> PendingTransition {
        self.next_token += 1;
        let pending = PendingTransition {
            token: self.next_token,
            target,
            delay_ms,
        };
        self.pending = Some(pending);
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fires pending transitions once enough simulated time has passed
    struct ManualClock {
        now_ms: u64,
        timers: Vec<(u64, u64)>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self { now_ms: 0, timers: Vec::new() }
        }

        fn track(&mut self, pending: Option<PendingTransition>) {
            if let Some(pending) = pending {
                self.timers.push((self.now_ms + u64::from(pending.delay_ms), pending.token));
            }
        }

        fn advance(&mut self, ms: u64, machine: &mut Disclosure<&'static str>) {
            self.now_ms += ms;
            let now = self.now_ms;
            let (due, waiting): (Vec<_>, Vec<_>) = self.timers.drain(..).partition(|(at, _)| *at <= now);
            self.timers = waiting;
            for (_, token) in due {
                machine.elapse(token);
            }
        }
    }

    fn assert_invariant(machine: &Disclosure<&'static str>) {
        assert_eq!(machine.active_record().is_none(), machine.phase() == ModalPhase::Closed);
    }

    #[test]
    fn test_open_reveals_after_delay() {
        let mut machine = Disclosure::default();
        let mut clock = ManualClock::new();

        clock.track(machine.open("r1"));
        assert_eq!(machine.phase(), ModalPhase::Opening);
        assert!(machine.is_mounted());
        assert!(!machine.is_visible());

        clock.advance(10, &mut machine);
        assert_eq!(machine.phase(), ModalPhase::Open);
        assert_eq!(machine.active_record(), Some(&"r1"));
        assert!(machine.pending().is_none());
        assert_invariant(&machine);
    }

    #[test]
    fn test_open_close_close_ends_closed_without_pending() {
        let mut machine = Disclosure::default();
        let mut clock = ManualClock::new();

        clock.track(machine.open("r"));
        clock.track(machine.close());
        assert_eq!(machine.phase(), ModalPhase::Closing);
        assert!(machine.close().is_none());

        clock.advance(300, &mut machine);
        assert_eq!(machine.phase(), ModalPhase::Closed);
        assert_eq!(machine.active_record(), None);
        assert!(machine.pending().is_none());
        assert_invariant(&machine);
    }

    #[test]
    fn test_reopen_while_opening_replaces_record() {
        let mut machine = Disclosure::default();
        let mut clock = ManualClock::new();

        clock.track(machine.open("r1"));
        let first_token = machine.pending().map(|p| p.token);
        assert!(machine.open("r2").is_none());
        assert_eq!(machine.pending().map(|p| p.token), first_token);

        clock.advance(10, &mut machine);
        assert_eq!(machine.phase(), ModalPhase::Open);
        assert_eq!(machine.active_record(), Some(&"r2"));
    }

    #[test]
    fn test_close_cancels_pending_reveal() {
        let mut machine = Disclosure::default();
        let mut clock = ManualClock::new();

        clock.track(machine.open("r1"));
        clock.track(machine.close());

        // the stale reveal timer fires first and must not reopen the modal
        clock.advance(10, &mut machine);
        assert_eq!(machine.phase(), ModalPhase::Closing);
        assert_eq!(machine.active_record(), Some(&"r1"));

        clock.advance(290, &mut machine);
        assert_eq!(machine.phase(), ModalPhase::Closed);
        assert_invariant(&machine);
    }

    #[test]
    fn test_open_during_fade_out_reopens() {
        let mut machine = Disclosure::default();
        let mut clock = ManualClock::new();

        clock.track(machine.open("r1"));
        clock.advance(10, &mut machine);
        clock.track(machine.close());
        clock.advance(100, &mut machine);
        clock.track(machine.open("r2"));
        assert_eq!(machine.phase(), ModalPhase::Opening);

        clock.advance(300, &mut machine);
        assert_eq!(machine.phase(), ModalPhase::Open);
        assert_eq!(machine.active_record(), Some(&"r2"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut machine: Disclosure<&'static str> = Disclosure::default();
        assert!(machine.close().is_none());
        assert_eq!(machine.phase(), ModalPhase::Closed);
        assert!(!machine.elapse(1));
    }

    #[test]
    fn test_rapid_toggling_keeps_single_pending_transition() {
        let mut machine = Disclosure::new(DisclosureTiming {
            reveal_delay_ms: 5,
            fade_out_ms: 50,
        });
        let mut clock = ManualClock::new();

        for record in ["a", "b", "c", "d"] {
            clock.track(machine.open(record));
            clock.advance(1, &mut machine);
            clock.track(machine.close());
            clock.advance(1, &mut machine);
            assert_invariant(&machine);
        }
        clock.track(machine.open("e"));
        clock.advance(100, &mut machine);

        assert_eq!(machine.phase(), ModalPhase::Open);
        assert_eq!(machine.active_record(), Some(&"e"));
        assert!(machine.pending().is_none());
    }
}
