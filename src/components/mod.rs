mod listing_card;
mod map;
mod navbar;

pub use self::{listing_card::*, map::*, navbar::*};
