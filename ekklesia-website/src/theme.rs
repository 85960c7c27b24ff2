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

//! Design tokens and the page-wide stylesheet.

pub const BACKGROUND: &str = "#fbf8fa";
pub const FOREGROUND: &str = "#302f2e";

/// Injected once into the document head. Declares the entrance keyframes and
/// collapses every animation and transition when the user asks for reduced
/// motion.
pub const GLOBAL_CSS: &str = r#"
@keyframes ekklesia-enter {
  from {
    opacity: 0;
    transform: translateY(var(--ekklesia-enter-offset, 0px));
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

html {
  scroll-behavior: smooth;
}

@media (prefers-reduced-motion: reduce) {
  *,
  ::before,
  ::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::transition::{ENTER_KEYFRAMES, ENTER_OFFSET_VAR};

    #[test]
    fn global_css_declares_entrance_keyframes() {
        assert!(GLOBAL_CSS.contains(&format!("@keyframes {ENTER_KEYFRAMES}")));
        assert!(GLOBAL_CSS.contains(ENTER_OFFSET_VAR));
    }

    #[test]
    fn reduced_motion_overrides_all_timing() {
        let (_, reduced) = GLOBAL_CSS
            .split_once("@media (prefers-reduced-motion: reduce)")
            .expect("reduced motion block");
        for rule in [
            "animation-duration: 0.01ms !important",
            "animation-iteration-count: 1 !important",
            "transition-duration: 0.01ms !important",
            "scroll-behavior: auto !important",
        ] {
            assert!(reduced.contains(rule), "missing {rule}");
        }
    }
}
