//! Slide change animation
//!
//! A change plays in two phases of `duration_secs` each: the slide that was
//! on screen exits, then the new slide enters. Time is passed in explicitly
//! (egui's `input.time`), so the state machine is testable without a context.

use deck_core::{TransitionKind, TransitionSettings};

/// Which half of the animation is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Exiting,
    Entering,
    Settled,
}

/// What to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Registry index of the slide to draw
    pub slide: usize,
    pub phase: TransitionPhase,
    /// Linear progress through the current phase (0..=1)
    pub progress: f32,
    pub opacity: f32,
    /// Horizontal displacement in points
    pub offset_x: f32,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: usize,
    to: usize,
    started: f64,
}

/// Animation state for the slide area
#[derive(Debug, Clone)]
pub struct SlideTransition {
    settings: TransitionSettings,
    settled: usize,
    active: Option<ActiveTransition>,
}

impl SlideTransition {
    pub fn new(settings: TransitionSettings, initial: usize) -> Self {
        Self {
            settings,
            settled: initial,
            active: None,
        }
    }

    /// The slide the animation is heading for
    pub fn target(&self) -> usize {
        self.active.map_or(self.settled, |t| t.to)
    }

    /// Begin animating towards `to`
    ///
    /// Whatever is on screen at `now` becomes the exiting slide, so a change
    /// that arrives mid-animation always ends on the newest target.
    pub fn start(&mut self, to: usize, now: f64) {
        let frame = self.frame(now);
        let duration = self.phase_duration();
        if self.settings.kind == TransitionKind::None || duration <= 0.0 {
            self.settled = to;
            self.active = None;
            return;
        }

        // Continue fading from the current opacity instead of popping back to full
        let exit_progress = match frame.phase {
            TransitionPhase::Settled if frame.slide == to => {
                self.settled = to;
                self.active = None;
                return;
            }
            TransitionPhase::Settled => 0.0,
            TransitionPhase::Entering if frame.slide == to => return,
            TransitionPhase::Entering => 1.0 - frame.progress,
            TransitionPhase::Exiting if frame.slide == to => {
                // Back to the slide that is leaving: it enters again from its current opacity
                let enter_progress = 1.0 - frame.progress;
                self.active = Some(ActiveTransition {
                    from: to,
                    to,
                    started: now - (1.0 + f64::from(enter_progress)) * duration,
                });
                return;
            }
            TransitionPhase::Exiting => frame.progress,
        };

        self.active = Some(ActiveTransition {
            from: frame.slide,
            to,
            started: now - f64::from(exit_progress) * duration,
        });
    }

    /// Drop a finished animation
    pub fn settle(&mut self, now: f64) {
        if let Some(active) = self.active {
            if now - active.started >= 2.0 * self.phase_duration() {
                self.settled = active.to;
                self.active = None;
            }
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.frame(now).phase != TransitionPhase::Settled
    }

    /// Compute what to draw at `now`
    pub fn frame(&self, now: f64) -> TransitionFrame {
        let Some(active) = self.active else {
            return Self::settled_frame(self.settled);
        };

        let duration = self.phase_duration();
        let elapsed = (now - active.started).max(0.0);
        if duration <= 0.0 || elapsed >= 2.0 * duration {
            return Self::settled_frame(active.to);
        }

        let offset = match self.settings.kind {
            TransitionKind::Slide => self.settings.offset,
            TransitionKind::Fade | TransitionKind::None => 0.0,
        };

        if elapsed < duration {
            let progress = (elapsed / duration) as f32;
            let eased = ease_in_out(progress);
            TransitionFrame {
                slide: active.from,
                phase: TransitionPhase::Exiting,
                progress,
                opacity: 1.0 - eased,
                offset_x: -offset * eased,
            }
        } else {
            let progress = ((elapsed - duration) / duration) as f32;
            let eased = ease_in_out(progress);
            TransitionFrame {
                slide: active.to,
                phase: TransitionPhase::Entering,
                progress,
                opacity: eased,
                offset_x: offset * (1.0 - eased),
            }
        }
    }

    fn phase_duration(&self) -> f64 {
        f64::from(self.settings.duration_secs)
    }

    fn settled_frame(slide: usize) -> TransitionFrame {
        TransitionFrame {
            slide,
            phase: TransitionPhase::Settled,
            progress: 1.0,
            opacity: 1.0,
            offset_x: 0.0,
        }
    }
}

/// Symmetric smoothstep easing
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
