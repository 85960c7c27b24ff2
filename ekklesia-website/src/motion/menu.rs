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

use crate::content::NavItem;
use crate::motion::section::Section;

/// Open/closed state of the full-screen navigation overlay shown on narrow
/// viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the overlay after a link in it was activated. Navigation itself
    /// is left to the browser's anchor jump, so this only returns the target.
    pub fn select(&mut self, item: &NavItem) -> Section {
        self.open = false;
        item.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    #[test]
    fn starts_closed() {
        assert!(!MobileMenu::new().is_open());
    }

    #[test]
    fn toggling_parity_decides_state() {
        for count in 0..8 {
            let mut menu = MobileMenu::new();
            for _ in 0..count {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), count % 2 == 1, "{count} toggles");
        }
    }

    #[test]
    fn selecting_an_item_always_closes() {
        for item in NAV_ITEMS.iter() {
            let mut open = MobileMenu::new();
            open.toggle();
            assert_eq!(open.select(item), item.target);
            assert!(!open.is_open());

            let mut closed = MobileMenu::new();
            closed.select(item);
            assert!(!closed.is_open());
        }
    }
}
