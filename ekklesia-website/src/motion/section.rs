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

/// Distance from the viewport top, in CSS pixels, of the line a section must
/// straddle to count as the one being read.
pub const ACTIVATION_LINE: f64 = 100.0;

/// Scroll offset past which the fixed header switches to its solid style.
pub const SCROLLED_HEADER_OFFSET: f64 = 50.0;

/// Anchor-addressable sections of the landing page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Features,
    Testimonials,
    Pricing,
}

impl Section {
    /// Candidate order for the active-section scan.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::Testimonials,
        Section::Pricing,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::Testimonials => "testimonials",
            Section::Pricing => "pricing",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Vertical extent of an element relative to the viewport top, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Box of an element laid out at `offset` in the document with the given
    /// `height`, seen with the window scrolled to `scroll_y`.
    pub fn at_scroll(offset: f64, height: f64, scroll_y: f64) -> Self {
        let top = offset - scroll_y;
        Self::new(top, top + height)
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom > line
    }
}

/// First section, in list order, whose box straddles the activation line.
/// Sections the lookup cannot find never match.
pub fn locate_active<F>(mut bounds: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBox>,
{
    Section::ALL.into_iter().find(|section| {
        bounds(*section)
            .map(|rect| rect.straddles(ACTIVATION_LINE))
            .unwrap_or(false)
    })
}

/// Scroll-derived header state: which section is highlighted and whether the
/// page has scrolled away from the top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    active: Section,
    scroll_y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_HEADER_OFFSET
    }

    /// Applies one scroll event. Runs on every raw event; when no section
    /// straddles the activation line the previous one stays active.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, bounds: F) -> Section
    where
        F: FnMut(Section) -> Option<SectionBox>,
    {
        self.scroll_y = scroll_y;
        if let Some(section) = locate_active(bounds) {
            self.active = section;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Document offset and height of each section in a synthetic layout.
    fn layout(section: Section) -> (f64, f64) {
        match section {
            Section::Home => (64.0, 600.0),
            Section::Features => (664.0, 1200.0),
            Section::Testimonials => (1864.0, 500.0),
            Section::Pricing => (2364.0, 700.0),
        }
    }

    fn bounds_at(scroll_y: f64) -> impl FnMut(Section) -> Option<SectionBox> {
        move |section| {
            let (offset, height) = layout(section);
            Some(SectionBox::at_scroll(offset, height, scroll_y))
        }
    }

    #[test]
    fn home_is_active_at_page_top() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.on_scroll(0.0, bounds_at(0.0)), Section::Home);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn active_section_follows_scroll_offset() {
        let mut tracker = ScrollTracker::new();
        let expectations = [
            (0.0, Section::Home),
            (563.0, Section::Home),
            (564.0, Section::Features),
            (1700.0, Section::Features),
            (1764.0, Section::Testimonials),
            (2264.0, Section::Pricing),
            (2900.0, Section::Pricing),
        ];
        for (scroll_y, expected) in expectations {
            assert_eq!(
                tracker.on_scroll(scroll_y, bounds_at(scroll_y)),
                expected,
                "scroll_y = {scroll_y}"
            );
        }
    }

    #[test]
    fn first_match_in_list_order_wins() {
        // Overlapping boxes: both straddle the line, the earlier one wins.
        let active = locate_active(|section| match section {
            Section::Features => Some(SectionBox::new(0.0, 400.0)),
            Section::Pricing => Some(SectionBox::new(50.0, 200.0)),
            _ => None,
        });
        assert_eq!(active, Some(Section::Features));
    }

    #[test]
    fn boundaries_are_top_inclusive_bottom_exclusive() {
        assert!(SectionBox::new(100.0, 101.0).straddles(ACTIVATION_LINE));
        assert!(!SectionBox::new(0.0, 100.0).straddles(ACTIVATION_LINE));
        assert!(!SectionBox::new(100.5, 300.0).straddles(ACTIVATION_LINE));
    }

    #[test]
    fn previous_section_is_retained_without_a_match() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(2300.0, bounds_at(2300.0));
        assert_eq!(tracker.active(), Section::Pricing);

        // Past the end of the document nothing straddles the line.
        assert_eq!(tracker.on_scroll(5000.0, bounds_at(5000.0)), Section::Pricing);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut tracker = ScrollTracker::new();
        let mut seen = Vec::new();
        let active = tracker.on_scroll(700.0, |section| {
            seen.push(section);
            match section {
                Section::Features => None,
                other => {
                    let (offset, height) = layout(other);
                    Some(SectionBox::at_scroll(offset, height, 700.0))
                }
            }
        });
        assert_eq!(active, Section::Home);
        assert_eq!(seen, Section::ALL.to_vec());
    }

    #[test]
    fn header_reports_scrolled_past_offset() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(50.0, |_| None);
        assert!(!tracker.is_scrolled());
        tracker.on_scroll(51.0, |_| None);
        assert!(tracker.is_scrolled());
        assert_eq!(tracker.scroll_y(), 51.0);
    }

    #[test]
    fn section_ids_round_trip_through_anchors() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(&section.anchor()), Some(section));
        }
        assert_eq!(Section::from_id("about"), None);
    }
}
