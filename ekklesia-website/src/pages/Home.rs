use crate::components::sections::Features::*;
use crate::components::sections::Hero::*;
use crate::components::sections::Pricing::*;
use crate::components::sections::Testimonials::*;
use crate::components::Page::*;
use crate::components::SiteHeader::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Church management made simple"/>
        <Page>
            <SiteHeader/>
            <main class="flex-1 pt-16">
                <HeroSection/>
                <FeaturesSection/>
                <TestimonialsSection/>
                <PricingSection/>
            </main>
        </Page>
    }
}
