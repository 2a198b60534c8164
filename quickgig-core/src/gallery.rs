use quickgig_entities::{id::*, listing::*};

/// The image that is currently shown big on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    listing_id: Id,
    current: String,
}

impl Gallery {
    pub fn new(listing: &Listing) -> Self {
        Self {
            listing_id: listing.id.clone(),
            current: listing.image_url.clone(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub const fn listing_id(&self) -> &Id {
        &self.listing_id
    }

    pub fn show(&mut self, listing: &Listing, image: &str) {
        debug_assert_eq!(listing.id, self.listing_id);
        if !listing.has_image(image) {
            log::warn!("Image {image} does not belong to listing {}", listing.id);
            return;
        }
        self.current = image.to_owned();
    }

    /// Start over with the primary image if another listing is displayed.
    ///
    /// Returns `true` if the gallery has been reset.
    pub fn follow(&mut self, listing: &Listing) -> bool {
        if self.listing_id == listing.id {
            return false;
        }
        *self = Self::new(listing);
        true
    }

    /// 1-based position of the current image and the number of images.
    pub fn position(&self, listing: &Listing) -> (usize, usize) {
        let images = listing.gallery();
        let index = images
            .iter()
            .position(|img| *img == self.current)
            .map_or(1, |i| i + 1);
        (index, images.len().max(1))
    }
}
