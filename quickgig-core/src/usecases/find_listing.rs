use super::prelude::*;

pub fn find_listing<'a, R>(repo: &'a R, id: &str) -> Option<&'a Listing>
where
    R: ListingRepo + ?Sized,
{
    repo.all_listings().iter().find(|l| l.id.as_str() == id)
}
