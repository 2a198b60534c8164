mod filter_listings;
mod find_listing;
mod similar_listings;
mod visible_listings;


pub use self::{
    filter_listings::*, find_listing::*, similar_listings::*, visible_listings::*,
};

mod prelude {
    pub use crate::{bbox::*, ListingRepo};
    pub use quickgig_entities::{category::*, geo::*, id::*, listing::*};
}
