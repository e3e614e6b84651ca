pub mod hero;
pub mod home_page;
pub mod success_stories;
pub mod trending_section;
pub mod trusted_brands;
pub mod why_section;

pub use home_page::HomePage;
