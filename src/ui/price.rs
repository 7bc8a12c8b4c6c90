use crate::filters::parse_leading_int;

/// Which end of the price range an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

impl PriceBound {
    fn slot(self) -> usize {
        match self {
            PriceBound::Min => 0,
            PriceBound::Max => 1,
        }
    }
}

/// Write one input edit into its slot of `range`.
///
/// Non-numeric input becomes 0. The other slot is untouched and min may end
/// up above max.
pub fn edit_price(range: &mut [i64; 2], bound: PriceBound, input: &str) {
    range[bound.slot()] = parse_leading_int(input).unwrap_or(0);
}
