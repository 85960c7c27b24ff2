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

use crate::components::CTAButton::CTAButton;
use crate::components::RevealOnScroll::*;
use crate::content::{PricingPlan, PRICING_PLANS};
use crate::icons::{Icon, IconSvg};
use crate::motion::{RevealConfig, Section};
use leptos::*;

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id=Section::Pricing.id() class="w-full py-12 md:py-24 lg:py-32 bg-[#302f2e]">
            <div class="container mx-auto px-4 md:px-6">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl text-center mb-12 text-[#fbf8fa]">
                    "Pricing Plans"
                </h2>
                <PricingGrid/>
            </div>
        </section>
    }
}

#[island]
fn PricingGrid() -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {PRICING_PLANS
                .iter()
                .enumerate()
                .map(|(index, plan)| view! { <PricingCard plan=*plan index=index/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PricingCard(plan: PricingPlan, index: usize) -> impl IntoView {
    view! {
        <RevealOnScroll config=RevealConfig::card(index)>
            <div class="rounded-lg bg-[#fbf8fa] hover:shadow-xl transition-shadow duration-300 border-2 border-[#302f2e]">
                <div class="p-6">
                    <h3 class="text-2xl font-bold text-[#302f2e]">{plan.title}</h3>
                </div>
                <div class="p-6 pt-0">
                    <p class="text-4xl font-bold mb-4 text-[#302f2e]">{plan.price}</p>
                    <ul class="space-y-2 mb-6">
                        {plan
                            .features
                            .iter()
                            .map(|feature| view! {
                                <li class="flex items-center text-[#302f2e]/80">
                                    <IconSvg icon=Icon::Check class="w-4 h-4 mr-2 text-[#302f2e]"/>
                                    {*feature}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <CTAButton class="w-full".to_string()>{plan.call_to_action()}</CTAButton>
                </div>
            </div>
        </RevealOnScroll>
    }
}
