//! Typing animation for the hero tagline, driven by a fixed tick.

pub const TICK_MS: u64 = 50;

const TYPE_TICKS: u32 = 2;
const DELETE_TICKS: u32 = 1;
const HOLD_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types a phrase one char at a time, holds it, deletes it, then moves on
/// to the next phrase. One char every 100ms typing, every 50ms deleting,
/// with a 2s hold on the full phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: Phase,
    wait: u32,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            wait: TYPE_TICKS,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    /// Visible prefix of the current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.current();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// Advance by one `TICK_MS` step.
    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        self.wait = self.wait.saturating_sub(1);
        if self.wait > 0 {
            return;
        }
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                    self.wait = HOLD_TICKS;
                } else {
                    self.wait = TYPE_TICKS;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.wait = DELETE_TICKS;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.wait = TYPE_TICKS;
                } else {
                    self.wait = DELETE_TICKS;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PHRASES: [&str; 2] = ["Rust", "Go"];

    fn run(tw: &mut Typewriter, ticks: u32) {
        for _ in 0..ticks {
            tw.tick();
        }
    }

    #[test]
    fn test_types_one_char_per_two_ticks() {
        let mut tw = Typewriter::new(&PHRASES);
        assert_eq!(tw.text(), "");
        run(&mut tw, 1);
        assert_eq!(tw.text(), "");
        run(&mut tw, 1);
        assert_eq!(tw.text(), "R");
        run(&mut tw, 6);
        assert_eq!(tw.text(), "Rust");
        assert!(!tw.is_deleting());
    }

    #[test]
    fn test_holds_then_deletes_then_advances() {
        let mut tw = Typewriter::new(&PHRASES);
        run(&mut tw, 8);
        assert_eq!(tw.text(), "Rust");

        // two second hold
        run(&mut tw, HOLD_TICKS - 1);
        assert_eq!(tw.text(), "Rust");
        assert!(!tw.is_deleting());
        run(&mut tw, 1);
        assert!(tw.is_deleting());

        run(&mut tw, 1);
        assert_eq!(tw.text(), "Rus");
        run(&mut tw, 3);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert!(!tw.is_deleting());

        run(&mut tw, 4);
        assert_eq!(tw.text(), "Go");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(&PHRASES);
        // "Rust": 8 type + 40 hold + 4 delete, "Go": 4 type + 40 hold + 2 delete
        run(&mut tw, 8 + HOLD_TICKS + 4 + 4 + HOLD_TICKS + 2);
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_prefix() {
        static ACCENTED: [&str; 1] = ["café"];
        let mut tw = Typewriter::new(&ACCENTED);
        run(&mut tw, 8);
        assert_eq!(tw.text(), "café");
    }

    #[test]
    fn test_no_phrases_is_inert() {
        static NONE: [&str; 0] = [];
        let mut tw = Typewriter::new(&NONE);
        run(&mut tw, 100);
        assert_eq!(tw.text(), "");
    }
}
