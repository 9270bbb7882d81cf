// Limiinal website, Leptos 0.8 edition
// The Limiinal Team (c)2024

mod links;
pub mod logging;
mod pages;
pub mod routes;
mod sections;
pub mod site;
mod typed;

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use pages::{AboutPage, LandingPage};
use routes::RouteTracker;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <Router>
                <RouteTracker />
                // Unknown paths go back to the landing page
                <Routes fallback=|| view! { <Redirect path=routes::Route::Landing.path() /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </Router>
        </div>
    }
}
