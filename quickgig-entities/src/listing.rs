use crate::{category::*, geo::*, id::*, price::*};

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    pub rooms        : u8,
    pub bathrooms    : u8,
    pub kitchens     : u8,
    pub living_rooms : u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    pub image_url: String,
    pub intro: String,
}

// Display-only details of the detail page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingDetail {
    pub structure: Option<Structure>,
    pub property_type: Option<String>,
    pub area: Option<String>,
    pub elevator: Option<String>,
    pub parking: Option<String>,
    pub basic_options: Vec<String>,
    pub additional_options: Vec<String>,
    pub usage_guide: Option<String>,
    pub maintenance_items: Vec<String>,
    pub host: Option<Host>,
}

/// A single service offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: Id,
    pub category: Category,
    pub title: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub price: Price,
    pub image_url: String,
    /// Additional images of the detail page, usually starting
    /// with the primary image.
    pub images: Vec<String>,
    pub pos: MapPoint,
    pub rating: f64,
    pub review_count: u32,
    pub popular: bool,
    pub detail: Option<ListingDetail>,
}

impl Listing {
    /// All images of the gallery, falling back to the primary image.
    pub fn gallery(&self) -> &[String] {
        if self.images.is_empty() {
            std::slice::from_ref(&self.image_url)
        } else {
            &self.images
        }
    }

    pub fn has_image(&self, url: &str) -> bool {
        self.image_url == url || self.images.iter().any(|img| img == url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn gallery_falls_back_to_primary_image() {
        let listing = Listing::build().image_url("a.png").finish();
        assert_eq!(listing.gallery(), &["a.png".to_string()]);
        let listing = Listing::build()
            .image_url("a.png")
            .images(vec!["a.png", "b.png"])
            .finish();
        assert_eq!(listing.gallery().len(), 2);
        assert!(listing.has_image("b.png"));
        assert!(!listing.has_image("c.png"));
    }
}
