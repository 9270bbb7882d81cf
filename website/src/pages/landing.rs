// Landing page - typed product name, tagline, GitHub and About actions
use crate::sections::{Footer, Hero, LANDING_ACTIONS};
use crate::site::{LANDING_HEADING, LANDING_SUBTAGLINE, LANDING_TAGLINE};
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="bg-gray-900 text-white">
            <Hero heading=LANDING_HEADING actions=&LANDING_ACTIONS>
                <p class="text-3xl text-gray mb-1 outfit-mid">{LANDING_TAGLINE}</p>
                <p class="text-xl text-gray mb-8 outfit-light">{LANDING_SUBTAGLINE}</p>
            </Hero>
            <Footer />
        </div>
    }
}
