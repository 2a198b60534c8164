use thiserror::Error;

use crate::id::*;

pub type ReviewRatingPrimitive = u8;

/// Number of stars, between one and five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReviewRating(ReviewRatingPrimitive);

impl ReviewRating {
    const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub const fn stars(self) -> ReviewRatingPrimitive {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid review rating: {0}")]
pub struct InvalidReviewRating(ReviewRatingPrimitive);

impl TryFrom<ReviewRatingPrimitive> for ReviewRating {
    type Error = InvalidReviewRating;
    fn try_from(from: ReviewRatingPrimitive) -> Result<Self, Self::Error> {
        let rating = Self(from);
        if rating < Self::min() || rating > Self::max() {
            return Err(InvalidReviewRating(from));
        }
        Ok(rating)
    }
}

impl From<ReviewRating> for ReviewRatingPrimitive {
    fn from(from: ReviewRating) -> Self {
        from.0
    }
}

// The listing is only referenced by its title for display,
// there is no referential integrity.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id            : Id,
    pub author        : String,
    pub rating        : ReviewRating,
    pub content       : String,
    pub location      : String,
    pub listing_title : String,
    pub image_url     : String,
}
