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

use crate::content::PRODUCT_NAME;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full py-6 bg-[#fbf8fa] border-t border-[#302f2e]">
            <div class="container mx-auto px-4 md:px-6 flex flex-col md:flex-row justify-between items-center">
                <p class="text-sm text-[#302f2e]/80">
                    {format!("© 2024 {PRODUCT_NAME}. All rights reserved.")}
                </p>
                <nav class="flex gap-4 sm:gap-6 mt-4 md:mt-0">
                    <FooterLink text="Terms of Service"/>
                    <FooterLink text="Privacy Policy"/>
                </nav>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(text: &'static str) -> impl IntoView {
    view! {
        <a
            href="#"
            class="text-sm text-[#302f2e]/80 hover:text-[#302f2e] transition-colors"
        >
            {text}
        </a>
    }
}
