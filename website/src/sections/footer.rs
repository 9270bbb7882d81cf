use crate::site::COPYRIGHT;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-5 px-6 md:px-20 bg-gray-800 text-center">
            <p class="text-gray-500 outfit-light">{COPYRIGHT}</p>
        </footer>
    }
}
