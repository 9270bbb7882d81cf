use crate::site::WHY_HEADING;
use crate::typed::TypedText;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Rendered in this order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔒",
        title: "End-to-End Encryption",
        description: "Your messages are secured and always only accessible to you and the recipient.",
    },
    Feature {
        icon: "🧩",
        title: "Decentralised Network",
        description: "We use libp2p for secure peer to peer networking. This means your data is never stored on any external servers.",
    },
    Feature {
        icon: "🦀",
        title: "Rust Language",
        description: "We developed Limiinal entirely in Rust. This ensures memory safety and you can be sure memory exploits will not happen. (Touch wood, hey?)",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="py-20 px-6 md:px-20 bg-gray-800">
            <h2 class="text-3xl md:text-5xl outfit-bold text-center mb-10">
                <TypedText text=WHY_HEADING />
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="text-center p-6 bg-gray-700 rounded-lg shadow-lg">
            <div class="text-4xl mb-4">{feature.icon}</div>
            <h3 class="text-xl outfit-mid mb-2">{feature.title}</h3>
            <p class="text-gray-400 outfit-mid">{feature.description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_cards_in_fixed_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["End-to-End Encryption", "Decentralised Network", "Rust Language"]
        );
    }

    #[test]
    fn every_card_has_icon_and_sentence() {
        let icons: Vec<_> = FEATURES.iter().map(|f| f.icon).collect();
        assert_eq!(icons, vec!["🔒", "🧩", "🦀"]);
        for feature in FEATURES {
            assert!(feature.description.ends_with('.') || feature.description.ends_with(')'));
        }
    }

    #[test]
    fn network_card_mentions_libp2p() {
        assert!(FEATURES[1].description.contains("libp2p"));
    }
}
