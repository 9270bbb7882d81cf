use super::actions::{Action, ActionBar};
use crate::typed::TypedText;
use leptos::prelude::*;

/// Full-height opening section: typed heading, free-form copy, action row.
#[component]
pub fn Hero(
    heading: &'static str,
    actions: &'static [Action],
    children: Children,
) -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center px-6 md:px-20">
            <div class="text-center max-w-3xl">
                <h1 class="text-4xl md:text-6xl outfit-bold mb-6">
                    <TypedText text=heading />
                </h1>
                {children()}
                <ActionBar actions=actions />
            </div>
        </section>
    }
}
