// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::error::PlaybackError;
use crate::host::MediaElement;

/// What the simulated host lets `play()` do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AutoplayPolicy {
    /// Any playback request succeeds.
    #[default]
    Allowed,
    /// Only muted playback may start without a user gesture.
    MutedOnly,
    /// Every request is refused.
    Blocked,
}

/// A media element driven by an explicit clock.
#[derive(Clone, Debug)]
pub struct SimulatedMedia {
    duration: f64,
    position: f64,
    playing: bool,
    muted: bool,
    policy: AutoplayPolicy,
    seeks: Vec<f64>,
    play_requests: usize,
}

impl SimulatedMedia {
    /// Paused, unmuted media of the given length in seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            position: 0.0,
            playing: false,
            muted: false,
            policy: AutoplayPolicy::Allowed,
            seeks: Vec::new(),
            play_requests: 0,
        }
    }

    /// Replace the autoplay policy.
    pub fn with_policy(mut self, policy: AutoplayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Let `dt` of wall time pass. Returns `true` when playback reached the
    /// end during this step; the host then delivers
    /// [`Signal::MediaEnded`](crate::signal::Signal::MediaEnded).
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.playing {
            return false;
        }
        self.position += dt.as_secs_f64();
        if self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            return true;
        }
        false
    }

    /// Whether the media is advancing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the media is muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Every position set through [`MediaElement::set_current_time`], in order.
    pub fn seeks(&self) -> &[f64] {
        &self.seeks
    }

    /// Number of `play()` calls, accepted or not.
    pub fn play_requests(&self) -> usize {
        self.play_requests
    }
}

impl MediaElement for SimulatedMedia {
    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.play_requests += 1;
        match self.policy {
            AutoplayPolicy::Blocked => return Err(PlaybackError::NotAllowed),
            AutoplayPolicy::MutedOnly if !self.muted => return Err(PlaybackError::NotAllowed),
            _ => {}
        }
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
        self.seeks.push(self.position);
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_to_the_end_once() {
        let mut m = SimulatedMedia::new(2.0);
        m.play().unwrap();
        assert!(!m.advance(Duration::from_millis(1500)));
        assert!(m.advance(Duration::from_millis(600)));
        assert_eq!(m.current_time(), 2.0);
        assert!(!m.is_playing());
        assert!(!m.advance(Duration::from_secs(1)));
    }

    #[test]
    fn muted_only_policy() {
        let mut m = SimulatedMedia::new(2.0).with_policy(AutoplayPolicy::MutedOnly);
        assert_eq!(m.play(), Err(PlaybackError::NotAllowed));
        m.set_muted(true);
        assert_eq!(m.play(), Ok(()));
        assert_eq!(m.play_requests(), 2);
    }

    #[test]
    fn seeks_are_clamped_and_logged() {
        let mut m = SimulatedMedia::new(2.0);
        m.set_current_time(5.0);
        m.set_current_time(-1.0);
        assert_eq!(m.seeks(), [2.0, 0.0]);
    }
}
