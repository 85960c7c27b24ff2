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

//! Scroll, menu and visibility state behind the page's interactive parts.
//!
//! Everything here is plain data and runs without a browser; the components
//! feed it DOM measurements and render whatever it decides.

pub mod menu;
pub mod reveal;
pub mod section;
pub mod transition;

pub use menu::MobileMenu;
pub use reveal::{Intersection, Reveal, RevealConfig, RevealMode};
pub use section::{ScrollTracker, Section, SectionBox};
pub use transition::{Entrance, Stagger};
