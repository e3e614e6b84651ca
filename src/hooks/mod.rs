pub mod use_nav_scroll;

pub use use_nav_scroll::use_nav_scroll;
