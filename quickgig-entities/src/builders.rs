pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::listing_builder::*;

pub mod listing_builder {

    use super::*;
    use crate::{category::*, geo::*, id::*, listing::*, price::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.listing.category = category;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.listing.title = title.into();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.listing.location = location.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.listing.description = desc.into();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.listing.tags = tags.into_iter().map(Into::into).collect();
            self
        }
        pub fn price(mut self, amount: Won, unit: PriceUnit) -> Self {
            self.listing.price = Price::new(amount, unit);
            self
        }
        pub fn image_url(mut self, url: &str) -> Self {
            self.listing.image_url = url.into();
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.listing.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.listing.pos = pos;
            self
        }
        pub fn rating(mut self, rating: f64, review_count: u32) -> Self {
            self.listing.rating = rating;
            self.listing.review_count = review_count;
            self
        }
        pub fn popular(mut self) -> Self {
            self.listing.popular = true;
            self
        }
        pub fn detail(mut self, detail: ListingDetail) -> Self {
            self.listing.detail = Some(detail);
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            ListingBuild {
                listing: Listing {
                    id: Id::new(),
                    category: Category::Cleaning,
                    title: String::new(),
                    location: String::new(),
                    description: String::new(),
                    tags: vec![],
                    price: Price::default(),
                    image_url: String::new(),
                    images: vec![],
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    rating: 0.0,
                    review_count: 0,
                    popular: false,
                    detail: None,
                },
            }
        }
    }

    #[test]
    fn default_listing() {
        let listing = Listing::build().finish();
        assert!(listing.id.is_valid());
        assert!(listing.pos.is_valid());
        assert!(listing.detail.is_none());
        assert_ne!(listing.id, Listing::build().finish().id);
    }
}
