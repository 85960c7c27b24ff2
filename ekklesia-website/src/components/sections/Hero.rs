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

use crate::components::CTAButton::{ButtonVariant, CTAButton};
use crate::content::PRODUCT_NAME;
use crate::motion::{Entrance, Section};
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="w-full py-12 md:py-24 lg:py-32 xl:py-48">
            <div class="container mx-auto px-4 md:px-6">
                <div
                    class="flex flex-col items-center space-y-4 text-center"
                    style=Entrance::HERO.style()
                >
                    <div class="space-y-2">
                        <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl lg:text-6xl/none">
                            {format!("Empower Your Church with {PRODUCT_NAME}")}
                        </h1>
                        <p class="mx-auto max-w-[700px] text-[#302f2e]/80 md:text-xl">
                            "The all-in-one SaaS solution for modern churches. Manage members, events, donations, and more with ease."
                        </p>
                    </div>
                    <div class="space-x-4">
                        <CTAButton href=Some(Section::Pricing.anchor())>"Get Started"</CTAButton>
                        <CTAButton variant=ButtonVariant::Outline href=Some(Section::Features.anchor())>
                            "Learn More"
                        </CTAButton>
                    </div>
                </div>
            </div>
        </section>
    }
}
