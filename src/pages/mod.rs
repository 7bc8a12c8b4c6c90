pub mod cards;
pub mod form;
pub mod home;
pub mod listing;

pub use cards::PropertyCard;
pub use form::FilterForm;
pub use home::{HeroView, HomePage};
pub use listing::{ListingPage, ListingView};
