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

//! Inline styles for the fade-and-slide motion used across the page.
//!
//! Entrances play once on mount through the `ekklesia-enter` keyframes
//! declared in [`crate::theme::GLOBAL_CSS`]; reveals are plain CSS
//! transitions toggled by [`crate::motion::reveal`]. Both collapse to
//! nothing under `prefers-reduced-motion`.

/// Keyframes name shared with the global stylesheet.
pub const ENTER_KEYFRAMES: &str = "ekklesia-enter";

/// Custom property carrying the starting vertical offset of an entrance.
pub const ENTER_OFFSET_VAR: &str = "--ekklesia-enter-offset";

const EASING: &str = "ease-out";

/// Delay schedule for a group of children that enter one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_ms: u32,
}

impl Stagger {
    /// Desktop navigation links.
    pub const NAV: Stagger = Stagger {
        delay_children_ms: 200,
        stagger_ms: 100,
    };

    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_ms * index as u32
    }
}

/// One-shot fade in from a vertical offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    /// Starting offset in pixels; negative slides down from above.
    pub offset_y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    pub const NAV: Entrance = Entrance {
        offset_y: -20,
        duration_ms: 300,
        delay_ms: 0,
    };

    pub const HERO: Entrance = Entrance {
        offset_y: 20,
        duration_ms: 500,
        delay_ms: 0,
    };

    pub const MOBILE_MENU: Entrance = Entrance {
        offset_y: -20,
        duration_ms: 200,
        delay_ms: 0,
    };

    pub fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn style(&self) -> String {
        format!(
            "{ENTER_OFFSET_VAR}: {}px; animation: {ENTER_KEYFRAMES} {}ms {EASING} {}ms both;",
            self.offset_y, self.duration_ms, self.delay_ms
        )
    }
}

/// Style of an element resting at `offset_y` with the given opacity, moving
/// there over `duration_ms` after `delay_ms`.
pub fn transition_style(opacity: u8, offset_y: i32, duration_ms: u32, delay_ms: u32) -> String {
    format!(
        "opacity: {opacity}; transform: translateY({offset_y}px); \
         transition: opacity {duration_ms}ms {EASING} {delay_ms}ms, transform {duration_ms}ms {EASING} {delay_ms}ms;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_staggered_after_the_container() {
        let delays: Vec<u32> = (0..4).map(|i| Stagger::NAV.delay_for(i)).collect();
        assert_eq!(delays, vec![200, 300, 400, 500]);
    }

    #[test]
    fn entrance_style_carries_offset_and_timing() {
        let style = Entrance::NAV.delayed(300).style();
        assert_eq!(
            style,
            "--ekklesia-enter-offset: -20px; animation: ekklesia-enter 300ms ease-out 300ms both;"
        );
    }

    #[test]
    fn transition_style_formats_whole_milliseconds() {
        assert_eq!(
            transition_style(0, 50, 500, 300),
            "opacity: 0; transform: translateY(50px); \
             transition: opacity 500ms ease-out 300ms, transform 500ms ease-out 300ms;"
        );
    }
}
