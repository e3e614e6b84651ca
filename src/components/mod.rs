pub mod button;
pub mod feature_card;
pub mod footer;
pub mod navbar;
pub mod section_header;
pub mod trending_card;
pub mod wordmark;

pub use button::{Button, ButtonVariant};
pub use feature_card::FeatureCard;
pub use footer::PageFooter;
pub use navbar::NavBar;
pub use section_header::SectionHeader;
pub use trending_card::TrendingCard;
