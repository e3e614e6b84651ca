pub mod constants;
pub mod content;
pub mod copy;
pub mod landing_state;
pub mod nav_state;
pub mod site_config;

pub use landing_state::{LandingMsg, LandingState, UserType};
