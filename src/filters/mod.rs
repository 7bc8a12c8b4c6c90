pub mod query;
pub mod state;
pub mod sync;

pub use state::{
    parse_leading_int, FilterState, ALL, ANY, BATHROOM_OPTIONS, BEDROOM_OPTIONS,
    FURNISHING_OPTIONS, PRICE_STEPS, PROPERTY_TYPE_OPTIONS, STATUS_OPTIONS,
};
pub use sync::{FilterSync, StoreQuery};
