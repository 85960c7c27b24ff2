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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid foreground fill.
    Primary,
    /// Transparent with a foreground border.
    Outline,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-[#302f2e] text-[#fbf8fa] hover:bg-[#302f2e]/90",
            ButtonVariant::Outline => {
                "border border-[#302f2e] text-[#302f2e] bg-transparent hover:bg-[#302f2e]/10"
            }
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center h-10 px-4 py-2 rounded-md text-sm font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-[#302f2e]/40 focus:ring-offset-2";

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = String::new())] class: String,
    #[prop(default = None)] href: Option<String>,
) -> impl IntoView {
    let combined_class = format!("{} {} {}", BASE_CLASSES, variant.classes(), class);
    let content = children();

    match href {
        Some(href) => view! {
            <a href=href class=combined_class>
                {content}
            </a>
        }
        .into_view(),
        None => view! {
            <button type="button" class=combined_class>
                {content}
            </button>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{BACKGROUND, FOREGROUND};

    #[test]
    fn variants_use_the_design_tokens() {
        let primary = ButtonVariant::Primary.classes();
        assert!(primary.contains(&format!("bg-[{FOREGROUND}]")));
        assert!(primary.contains(&format!("text-[{BACKGROUND}]")));
        assert!(ButtonVariant::Outline
            .classes()
            .contains(&format!("border-[{FOREGROUND}]")));
    }
}
