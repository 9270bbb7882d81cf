use crate::links::{ExternalLink, open_external};
use crate::routes::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open a page outside the site in a new, isolated tab.
    External(ExternalLink),
    /// Client-side transition, no reload.
    Navigate(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Primary,
    Secondary,
}

impl ActionStyle {
    pub const fn class(self) -> &'static str {
        match self {
            ActionStyle::Primary => {
                "bg-indigo-600 hover:bg-indigo-700 px-8 py-3 rounded-lg outfit-bold transition"
            }
            ActionStyle::Secondary => {
                "bg-slate-500 hover:bg-slate-600 px-8 py-3 rounded-lg outfit-bold transition"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub kind: ActionKind,
    pub style: ActionStyle,
}

pub const LANDING_ACTIONS: [Action; 2] = [
    Action {
        label: "GitHub",
        kind: ActionKind::External(ExternalLink::repository()),
        style: ActionStyle::Primary,
    },
    Action {
        label: "About",
        kind: ActionKind::Navigate(Route::About),
        style: ActionStyle::Secondary,
    },
];

pub const ABOUT_ACTIONS: [Action; 1] = [Action {
    label: "Try now on GitHub",
    kind: ActionKind::External(ExternalLink::repository()),
    style: ActionStyle::Primary,
}];

#[component]
pub fn ActionBar(actions: &'static [Action]) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row justify-center gap-4">
            {actions
                .iter()
                .map(|action| view! { <ActionButton action=*action /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ActionButton(action: Action) -> impl IntoView {
    let navigate = use_navigate();

    let on_click = move |_| match action.kind {
        ActionKind::External(link) => {
            if let Err(e) = open_external(&link) {
                tracing::warn!(error = %e, url = link.url, "could not open external link");
            }
        }
        ActionKind::Navigate(route) => {
            tracing::debug!(label = action.label, to = route.path(), "navigating");
            navigate(route.path(), Default::default());
        }
    };

    view! {
        <button class=action.style.class() on:click=on_click>
            {action.label}
        </button>
    }
}
