mod landing;
mod listing;
mod search;

pub use self::{landing::*, listing::*, search::*};
