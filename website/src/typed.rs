//! Typed-text animation.
//!
//! [`Typewriter`] is the clock-free model: how much of a string is visible
//! after N keystrokes or after some elapsed time. [`TypedText`] drives it
//! with a browser interval and renders the visible prefix plus a blinking
//! cursor.

use std::time::Duration;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    speed: Duration,
}

impl Typewriter {
    pub const fn new(text: &'static str, speed: Duration) -> Self {
        Self { text, speed }
    }

    /// Number of keystrokes needed to type the whole text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Prefix shown after `typed` keystrokes. Never splits a character.
    pub fn visible(&self, typed: usize) -> &'static str {
        match self.text.char_indices().nth(typed) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    /// Keystrokes completed after `elapsed`, clamped to the text length.
    pub fn typed_after(&self, elapsed: Duration) -> usize {
        if self.speed.is_zero() {
            return self.len();
        }
        let ticks = elapsed.as_millis() / self.speed.as_millis().max(1);
        usize::try_from(ticks).map_or(self.len(), |t| t.min(self.len()))
    }

    pub fn total_duration(&self) -> Duration {
        self.speed * u32::try_from(self.len()).unwrap_or(u32::MAX)
    }

    pub fn is_complete(&self, typed: usize) -> bool {
        typed >= self.len()
    }
}

/// Heading text that types itself out, one character per `speed`.
#[component]
pub fn TypedText(
    text: &'static str,
    #[prop(default = crate::site::TYPE_SPEED)] speed: Duration,
) -> impl IntoView {
    let typewriter = Typewriter::new(text, speed);
    let (elapsed, set_elapsed) = signal(Duration::ZERO);
    let typed = move || typewriter.typed_after(elapsed.get());

    if !typewriter.is_complete(typed()) {
        tracing::debug!(
            text,
            total_ms = u64::try_from(typewriter.total_duration().as_millis()).unwrap_or(u64::MAX),
            "typing heading"
        );
        match set_interval_with_handle(
            move || set_elapsed.update(|e| *e += typewriter.speed()),
            typewriter.speed(),
        ) {
            Ok(handle) => {
                Effect::new(move || {
                    if typewriter.is_complete(typed()) {
                        handle.clear();
                    }
                });
                on_cleanup(move || handle.clear());
            }
            Err(e) => {
                tracing::warn!(?e, text, "typing interval unavailable, showing full text");
                set_elapsed.set(typewriter.total_duration());
            }
        }
    }

    view! {
        <span class="typed">{move || typewriter.visible(typed())}</span>
        <span class="typed-cursor" aria-hidden="true">"|"</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPEED: Duration = Duration::from_millis(100);

    #[test]
    fn types_one_character_per_keystroke() {
        let tw = Typewriter::new("Limiinal.", SPEED);
        assert_eq!(tw.len(), 9);
        assert_eq!(tw.visible(0), "");
        assert_eq!(tw.visible(3), "Lim");
        assert_eq!(tw.visible(9), "Limiinal.");
        assert_eq!(tw.visible(42), "Limiinal.");
    }

    #[test]
    fn never_splits_multibyte_characters() {
        let tw = Typewriter::new("🦀 Rust", SPEED);
        assert_eq!(tw.len(), 6);
        assert_eq!(tw.visible(1), "🦀");
        assert_eq!(tw.visible(2), "🦀 ");

        let accented = Typewriter::new("Décentralisé", SPEED);
        assert_eq!(accented.visible(2), "Dé");
    }

    #[test]
    fn elapsed_time_maps_to_keystrokes() {
        let tw = Typewriter::new("Tech Stack", SPEED);
        assert_eq!(tw.typed_after(Duration::ZERO), 0);
        assert_eq!(tw.typed_after(Duration::from_millis(99)), 0);
        assert_eq!(tw.typed_after(Duration::from_millis(100)), 1);
        assert_eq!(tw.typed_after(Duration::from_millis(450)), 4);
        assert_eq!(tw.typed_after(Duration::from_secs(60)), 10);
    }

    #[test]
    fn total_duration_covers_every_character() {
        let tw = Typewriter::new("Why Limiinal?", SPEED);
        assert_eq!(tw.total_duration(), Duration::from_millis(1300));
        assert!(tw.is_complete(tw.typed_after(tw.total_duration())));
        assert!(!tw.is_complete(tw.typed_after(tw.total_duration() - SPEED)));
    }

    #[test]
    fn zero_speed_shows_everything_at_once() {
        let tw = Typewriter::new("instant", Duration::ZERO);
        assert_eq!(tw.typed_after(Duration::ZERO), 7);
        assert_eq!(tw.total_duration(), Duration::ZERO);
    }

    #[test]
    fn empty_text_is_complete_immediately() {
        let tw = Typewriter::new("", SPEED);
        assert_eq!(tw.len(), 0);
        assert!(tw.is_complete(0));
        assert_eq!(tw.visible(0), "");
    }
}
