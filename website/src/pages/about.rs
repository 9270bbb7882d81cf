// Tech stack page - blurb, GitHub action, "Why Limiinal?" feature cards
use crate::sections::{ABOUT_ACTIONS, Features, Footer, Hero};
use crate::site::{ABOUT_BLURB, ABOUT_HEADING};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="bg-gray-900 text-white">
            <Hero heading=ABOUT_HEADING actions=&ABOUT_ACTIONS>
                <p class="text-3xl text-gray mb-8 outfit-mid">{ABOUT_BLURB}</p>
            </Hero>
            <Features />
            <Footer />
        </div>
    }
}
