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

use crate::content::{NavItem, NAV_ITEMS, PRODUCT_NAME};
use crate::icons::{Icon, IconSvg};
use crate::motion::{Entrance, MobileMenu, ScrollTracker, Section, SectionBox, Stagger};
use leptos::*;

// The overlay shares the toggle's breakpoint so it can never stay open on a
// layout that has no control to close it.
const MENU_TOGGLE_CLASS: &str = "ml-auto md:hidden inline-flex items-center justify-center h-10 w-10 rounded-md hover:bg-[#302f2e]/10 transition-colors";
const MENU_OVERLAY_CLASS: &str = "fixed inset-0 z-40 bg-[#fbf8fa] pt-16 md:hidden";

/// Fixed header with scroll-tracked navigation and the mobile overlay.
#[island]
pub fn SiteHeader() -> impl IntoView {
    let tracker = create_rw_signal(ScrollTracker::new());
    let menu = create_rw_signal(MobileMenu::new());
    track_scroll(tracker);

    let active = create_memo(move |_| tracker.with(ScrollTracker::active));
    let scrolled = create_memo(move |_| tracker.with(ScrollTracker::is_scrolled));
    let menu_open = move || menu.with(MobileMenu::is_open);

    view! {
        <header class=move || {
            format!(
                "px-4 lg:px-6 h-16 flex items-center fixed w-full z-50 transition-colors duration-300 {}",
                if scrolled.get() { "bg-[#fbf8fa]/80 backdrop-blur-md shadow-md" } else { "" },
            )
        }>
            <a class="flex items-center justify-center" href=Section::Home.anchor()>
                <IconSvg icon=Icon::Layers class="h-6 w-6 text-[#302f2e]"/>
                <span class="ml-2 text-xl font-bold text-[#302f2e]">{PRODUCT_NAME}</span>
            </a>

            // Desktop navigation
            <nav class="ml-auto hidden md:flex gap-4 sm:gap-6">
                <div class="flex gap-4" style=Entrance::NAV.style()>
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let entrance = Entrance::NAV.delayed(Stagger::NAV.delay_for(index));
                            view! { <NavLink item=*item active=active style=entrance.style()/> }
                        })
                        .collect_view()}
                </div>
            </nav>

            <button
                type="button"
                class=MENU_TOGGLE_CLASS
                on:click=move |_| menu.update(|menu| {
                    menu.toggle();
                })
                aria-label="Toggle navigation menu"
                aria-expanded=move || menu_open().to_string()
            >
                {move || {
                    let icon = if menu_open() { Icon::Close } else { Icon::Menu };
                    view! { <IconSvg icon=icon class="h-6 w-6"/> }
                }}
            </button>
        </header>

        // Mobile navigation overlay
        {move || {
            menu_open()
                .then(|| {
                    view! {
                        <div
                            class=MENU_OVERLAY_CLASS
                            style=Entrance::MOBILE_MENU.style()
                        >
                            <nav class="flex flex-col items-center gap-4 p-4">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|item| {
                                        let item = *item;
                                        view! {
                                            <MobileNavLink
                                                item=item
                                                active=active
                                                on_click=move || menu.update(|menu| {
                                                    menu.select(&item);
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </div>
                    }
                })
        }}
    }
}

fn link_class(size: &str, is_active: bool) -> String {
    format!(
        "{size} font-medium hover:text-[#302f2e]/70 transition-colors {}",
        if is_active { "text-[#302f2e]" } else { "text-[#302f2e]/80" }
    )
}

#[component]
fn NavLink(
    item: NavItem,
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] style: String,
) -> impl IntoView {
    view! {
        <a
            href=item.href()
            class=move || link_class("text-sm", active.get() == item.target)
            style=style
        >
            {item.name}
        </a>
    }
}

#[component]
fn MobileNavLink<F>(item: NavItem, #[prop(into)] active: Signal<Section>, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <a
            href=item.href()
            class=move || link_class("text-lg", active.get() == item.target)
            on:click=move |_| on_click()
        >
            {item.name}
        </a>
    }
}

/// Feeds scroll offsets into `tracker` for as long as the current owner
/// lives. `listen` installs the offset source and returns its remover, which
/// runs when the owner is disposed.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn track_scroll_with<B, L, R>(tracker: RwSignal<ScrollTracker>, bounds: B, listen: L)
where
    B: Fn(Section) -> Option<SectionBox> + 'static,
    L: FnOnce(Box<dyn Fn(f64)>) -> R,
    R: FnOnce() + 'static,
{
    let remove = listen(Box::new(move |scroll_y| {
        tracker.update(|tracker| {
            tracker.on_scroll(scroll_y, &bounds);
        });
    }));
    on_cleanup(remove);
}

#[cfg(not(feature = "ssr"))]
fn track_scroll(tracker: RwSignal<ScrollTracker>) {
    fn section_bounds(section: Section) -> Option<SectionBox> {
        let rect = document()
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(SectionBox::new(rect.top(), rect.bottom()))
    }

    track_scroll_with(tracker, section_bounds, |on_scroll| {
        let handle = window_event_listener(ev::scroll, move |_| {
            on_scroll(window().scroll_y().unwrap_or_default());
        });
        move || handle.remove()
    });
}

#[cfg(feature = "ssr")]
fn track_scroll(_tracker: RwSignal<ScrollTracker>) {}
