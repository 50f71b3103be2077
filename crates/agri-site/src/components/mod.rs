//! Site components

mod cards;
mod carousel;
mod footer;
pub mod form;
mod nav;

pub use cards::*;
pub use carousel::{BackgroundBanners, BannerCarousel};
pub use footer::Footer;
pub use form::{InputField, SelectField, TextAreaField};
pub use nav::Navigation;
