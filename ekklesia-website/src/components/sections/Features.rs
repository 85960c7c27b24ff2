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

use crate::components::RevealOnScroll::*;
use crate::content::{Feature, FEATURES};
use crate::icons::IconSvg;
use crate::motion::{RevealConfig, Section};
use leptos::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="w-full py-12 md:py-24 lg:py-32 bg-[#302f2e]">
            <div class="container mx-auto px-4 md:px-6">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl text-center mb-12 text-[#fbf8fa]">
                    "Core Features"
                </h2>
                <FeatureGrid/>
            </div>
        </section>
    }
}

#[island]
fn FeatureGrid() -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {FEATURES
                .iter()
                .enumerate()
                .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <RevealOnScroll config=RevealConfig::feature_card(index) class="h-full">
            <div class="h-full rounded-lg bg-[#fbf8fa] hover:shadow-lg transition-shadow duration-300 border-2 border-[#302f2e]">
                <div class="flex flex-col space-y-1.5 p-6">
                    <IconSvg icon=feature.icon class="h-8 w-8 mb-2 text-[#302f2e]"/>
                    <h3 class="text-xl font-semibold text-[#302f2e]">{feature.title}</h3>
                </div>
                <div class="p-6 pt-0">
                    <p class="text-[#302f2e]">{feature.description}</p>
                </div>
            </div>
        </RevealOnScroll>
    }
}
