pub mod carousel;
pub mod dropdown;
pub mod gallery;
pub mod price;

pub use carousel::HeroCarousel;
pub use dropdown::{DropdownId, DropdownSet};
pub use gallery::{PropertyGallery, PLACEHOLDER_IMAGE};
pub use price::{edit_price, PriceBound};
