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

use leptos::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Calendar,
    CreditCard,
    MessageCircle,
    Video,
    Globe,
    FileText,
    BarChart,
    Shield,
    Smartphone,
    Layers,
    Menu,
    Close,
    Check,
}

impl Icon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Icon::CreditCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            Icon::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22z"],
            Icon::Video => &[
                "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5",
                "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Icon::Globe => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::FileText => &[
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "M10 9H8",
                "M16 13H8",
                "M16 17H8",
            ],
            Icon::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Icon::Shield => &["M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Check => &["M5 13l4 4L19 7"],
        }
    }
}

#[component]
pub fn IconSvg(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_draws_something() {
        let all = [
            Icon::Users,
            Icon::Calendar,
            Icon::CreditCard,
            Icon::MessageCircle,
            Icon::Video,
            Icon::Globe,
            Icon::FileText,
            Icon::BarChart,
            Icon::Shield,
            Icon::Smartphone,
            Icon::Layers,
            Icon::Menu,
            Icon::Close,
            Icon::Check,
        ];
        for icon in all {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?}");
            assert!(
                paths.iter().all(|d| d.starts_with(['M', 'm'])),
                "{icon:?} paths must start with a move"
            );
        }
    }
}
