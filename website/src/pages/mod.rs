// Routed pages
// The Limiinal Team (c)2024

mod about;
mod landing;

pub use about::AboutPage;
pub use landing::LandingPage;
