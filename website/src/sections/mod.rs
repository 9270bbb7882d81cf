// Page sections shared by the landing and tech stack pages
// The Limiinal Team (c)2024

mod actions;
mod features;
mod footer;
mod hero;

pub use actions::{ABOUT_ACTIONS, LANDING_ACTIONS};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
