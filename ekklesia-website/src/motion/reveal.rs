/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::motion::transition::transition_style;

pub const REVEAL_DURATION_MS: u32 = 500;
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Whether a reveal plays back when its element leaves the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Hide again whenever visibility drops below the threshold.
    Repeat,
    /// Stay visible once shown.
    Once,
}

/// A single intersection observation for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl Intersection {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    pub fn visible(ratio: f64) -> Self {
        Self::new(ratio > 0.0, ratio)
    }

    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }
}

/// Fixed parameters of one reveal, chosen when the element is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub mode: RevealMode,
    /// Fraction of the element that must be visible to count as in view.
    pub threshold: f64,
    /// Vertical offset in pixels while hidden.
    pub offset_y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl RevealConfig {
    /// Feature grid card at position `index`.
    pub fn feature_card(index: usize) -> Self {
        Self {
            mode: RevealMode::Repeat,
            threshold: 0.1,
            offset_y: 50,
            duration_ms: REVEAL_DURATION_MS,
            delay_ms: stagger(index),
        }
    }

    /// Testimonial or pricing card at position `index`. Hides again once
    /// less than half of it is on screen.
    pub fn card(index: usize) -> Self {
        Self {
            mode: RevealMode::Repeat,
            threshold: 0.5,
            offset_y: 20,
            duration_ms: REVEAL_DURATION_MS,
            delay_ms: stagger(index),
        }
    }

    pub fn in_view(&self, observation: Intersection) -> bool {
        observation.is_intersecting && observation.ratio >= self.threshold
    }

    /// Inline style for the given visibility. The stagger delay only applies
    /// on the way in.
    pub fn style(&self, visible: bool) -> String {
        if visible {
            transition_style(1, 0, self.duration_ms, self.delay_ms)
        } else {
            transition_style(0, self.offset_y, self.duration_ms, 0)
        }
    }
}

fn stagger(index: usize) -> u32 {
    REVEAL_STAGGER_MS * index as u32
}

/// Visibility state of one revealed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    config: RevealConfig,
    visible: bool,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visible: false,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies one observation; returns whether visibility changed.
    pub fn observe(&mut self, observation: Intersection) -> bool {
        let in_view = self.config.in_view(observation);
        let next = match self.config.mode {
            RevealMode::Repeat => in_view,
            RevealMode::Once => self.visible || in_view,
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn style(&self) -> String {
        self.config.style(self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let reveal = Reveal::new(RevealConfig::feature_card(0));
        assert!(!reveal.is_visible());
        assert!(reveal.style().starts_with("opacity: 0; transform: translateY(50px);"));
    }

    #[test]
    fn repeat_follows_the_last_observation() {
        let mut reveal = Reveal::new(RevealConfig::feature_card(2));

        assert!(!reveal.observe(Intersection::visible(0.05)));
        assert!(!reveal.is_visible());

        assert!(reveal.observe(Intersection::visible(0.1)));
        assert!(reveal.is_visible());

        assert!(!reveal.observe(Intersection::visible(0.8)));
        assert!(reveal.is_visible());

        assert!(reveal.observe(Intersection::hidden()));
        assert!(!reveal.is_visible());

        assert!(reveal.observe(Intersection::visible(1.0)));
        assert!(reveal.observe(Intersection::visible(0.02)));
        assert!(!reveal.is_visible());
    }

    #[test]
    fn once_never_reverts() {
        let mut reveal = Reveal::new(RevealConfig {
            mode: RevealMode::Once,
            ..RevealConfig::card(1)
        });

        reveal.observe(Intersection::visible(0.3));
        assert!(!reveal.is_visible());

        assert!(reveal.observe(Intersection::visible(0.5)));
        for observation in [
            Intersection::hidden(),
            Intersection::visible(0.1),
            Intersection::new(false, 0.9),
            Intersection::visible(1.0),
        ] {
            assert!(!reveal.observe(observation));
            assert!(reveal.is_visible());
        }
    }

    #[test]
    fn cards_hide_after_leaving_the_viewport() {
        let mut reveal = Reveal::new(RevealConfig::card(0));

        assert!(reveal.observe(Intersection::visible(0.6)));
        assert!(reveal.observe(Intersection::hidden()));
        assert!(!reveal.is_visible());

        assert!(reveal.observe(Intersection::visible(0.5)));
        assert!(reveal.observe(Intersection::visible(0.4)));
        assert!(!reveal.is_visible());
        assert!(reveal.style().starts_with("opacity: 0; transform: translateY(20px);"));
    }

    #[test]
    fn non_intersecting_reports_are_out_of_view() {
        let config = RevealConfig::card(0);
        assert!(!config.in_view(Intersection::new(false, 1.0)));
        assert!(config.in_view(Intersection::new(true, 0.5)));
    }

    #[test]
    fn delay_is_staggered_by_index_on_the_way_in() {
        let config = RevealConfig::feature_card(3);
        assert_eq!(config.delay_ms, 300);
        assert!(config.style(true).contains("opacity 500ms ease-out 300ms"));
        assert!(config.style(false).contains("opacity 500ms ease-out 0ms"));
        assert!(config.style(true).contains("translateY(0px)"));
    }

    #[test]
    fn card_configs_use_the_half_visible_threshold() {
        let config = RevealConfig::card(2);
        assert_eq!(config.mode, RevealMode::Repeat);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.offset_y, 20);
        assert_eq!(config.delay_ms, 200);
    }
}
