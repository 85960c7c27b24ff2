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
use crate::content::{Testimonial, TESTIMONIALS};
use crate::motion::{RevealConfig, Section};
use leptos::*;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id=Section::Testimonials.id() class="w-full py-12 md:py-24 lg:py-32">
            <div class="container mx-auto px-4 md:px-6">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl text-center mb-12 text-[#302f2e]">
                    "What Churches Say"
                </h2>
                <TestimonialGrid/>
            </div>
        </section>
    }
}

#[island]
fn TestimonialGrid() -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {TESTIMONIALS
                .iter()
                .enumerate()
                .map(|(index, testimonial)| {
                    view! { <TestimonialCard testimonial=*testimonial index=index/> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    view! {
        <RevealOnScroll config=RevealConfig::card(index)>
            <div class="rounded-lg bg-[#fbf8fa] hover:shadow-lg transition-shadow duration-300 border-2 border-[#302f2e]">
                <div class="p-6">
                    <h3 class="text-xl font-semibold text-[#302f2e]">{testimonial.church}</h3>
                </div>
                <div class="p-6 pt-0">
                    <p class="text-[#302f2e]/80 italic">{format!("“{}”", testimonial.quote)}</p>
                </div>
            </div>
        </RevealOnScroll>
    }
}
