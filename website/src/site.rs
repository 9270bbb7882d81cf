// Site-wide copy and settings (single source of truth for both pages)

use std::time::Duration;

pub const PRODUCT_NAME: &str = "Limiinal";

/// Public source repository, target of every "GitHub" action.
pub const REPOSITORY_URL: &str = "https://github.com/limiinal/limiinal";

pub const COPYRIGHT: &str = "© 2024 Limiinal. All rights reserved.";

/// Delay between two typed characters in the animated headings.
pub const TYPE_SPEED: Duration = Duration::from_millis(100);

pub const LANDING_HEADING: &str = "Limiinal.";
pub const LANDING_TAGLINE: &str = "Chat seamlessly and safely.";
pub const LANDING_SUBTAGLINE: &str = "Decentralised. Open-source. Privacy focused.";

pub const ABOUT_HEADING: &str = "Tech Stack";
pub const ABOUT_BLURB: &str =
    "Modern languages and secure communication protocols. Scroll to learn more.";
pub const WHY_HEADING: &str = "Why Limiinal?";
