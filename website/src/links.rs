//! External links.
//!
//! Outbound links open in a fresh browsing context that cannot reach back
//! into this page: the new window gets no `opener` and no referrer.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::site::REPOSITORY_URL;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("no global window (not running in a browser)")]
    NoWindow,
    #[error("window.open failed: {0}")]
    Open(String),
    #[error("could not clear opener on new window: {0}")]
    Opener(String),
}

impl LinkError {
    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: &'static str,
    pub target: &'static str,
    pub noopener: bool,
    pub noreferrer: bool,
}

impl ExternalLink {
    /// Isolated new-tab link.
    pub const fn isolated(url: &'static str) -> Self {
        Self {
            url,
            target: "_blank",
            noopener: true,
            noreferrer: true,
        }
    }

    /// The product's source repository.
    pub const fn repository() -> Self {
        Self::isolated(REPOSITORY_URL)
    }

    /// Feature string for `window.open`, e.g. `noopener,noreferrer`.
    pub fn window_features(&self) -> String {
        [
            (self.noopener, "noopener"),
            (self.noreferrer, "noreferrer"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect::<Vec<_>>()
        .join(",")
    }
}

/// Open `link` in a new browsing context.
///
/// With `noopener` set browsers hand back `null`, so a missing handle is not
/// an error. When one does come back its `opener` is cleared by hand.
pub fn open_external(link: &ExternalLink) -> Result<(), LinkError> {
    let window = web_sys::window().ok_or(LinkError::NoWindow)?;
    let opened = window
        .open_with_url_and_target_and_features(link.url, link.target, &link.window_features())
        .map_err(|e| LinkError::Open(LinkError::describe(&e)))?;

    match opened {
        Some(new_window) if link.noopener => {
            new_window
                .set_opener(&JsValue::NULL)
                .map_err(|e| LinkError::Opener(LinkError::describe(&e)))?;
            tracing::debug!(url = link.url, "opened external link, opener cleared");
        }
        Some(_) => tracing::debug!(url = link.url, "opened external link"),
        None => tracing::debug!(url = link.url, "opened external link (no handle)"),
    }
    Ok(())
}
