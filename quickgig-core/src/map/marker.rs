use quickgig_entities::{listing::*, price::*};

use super::{MarkerIcon, Pixels};
use crate::format::{abbreviate_price, format_price};

pub const ACTIVE_Z_INDEX: i32 = 100;
pub const INACTIVE_Z_INDEX: i32 = 10;

const ACTIVE_SIZE: Pixels = Pixels { x: 120, y: 48 };
const INACTIVE_SIZE: Pixels = Pixels { x: 100, y: 40 };

/// How the price is printed on a marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLabel {
    #[default]
    FullPrice,
    Abbreviated,
}

impl MarkerLabel {
    pub fn format(self, amount: Won) -> String {
        match self {
            Self::FullPrice => format_price(amount),
            Self::Abbreviated => abbreviate_price(amount),
        }
    }
}

pub fn marker_icon(listing: &Listing, active: bool, label: MarkerLabel) -> MarkerIcon {
    let (pill, dot, arrow, scale) = if active {
        (
            "bg-blue-600 border-blue-600 text-white",
            "bg-white",
            "border-t-blue-600",
            "scale-110",
        )
    } else {
        (
            "bg-white border-gray-800 text-gray-800 font-bold",
            "bg-blue-500",
            "border-t-gray-800",
            "",
        )
    };
    let price = label.format(listing.price.amount);
    let content = format!(
        r#"<div class="custom-marker {scale}" data-listing="{id}">
  <div class="flex flex-col items-center">
    <div class="px-3 py-1.5 rounded-full border-2 flex items-center gap-2 shadow-lg {pill}">
      <span style="font-size: 12px; font-weight: 700; white-space: nowrap;">{price}</span>
      <div class="w-1.5 h-1.5 rounded-full {dot}"></div>
    </div>
    <div class="w-0 h-0 border-l-[6px] border-l-transparent border-r-[6px] border-r-transparent border-t-[8px] -mt-[1px] {arrow}"></div>
  </div>
</div>"#,
        id = listing.id,
    );
    let size = if active { ACTIVE_SIZE } else { INACTIVE_SIZE };
    MarkerIcon {
        content,
        size,
        // bottom center, i.e. the tip of the arrow
        anchor: Pixels {
            x: size.x / 2,
            y: size.y,
        },
        z_index: if active {
            ACTIVE_Z_INDEX
        } else {
            INACTIVE_Z_INDEX
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    #[test]
    fn active_marker_is_highlighted() {
        let listing = Listing::build().price(150_000, PriceUnit::PerJob).finish();
        let inactive = marker_icon(&listing, false, MarkerLabel::FullPrice);
        let active = marker_icon(&listing, true, MarkerLabel::FullPrice);
        assert!(active.z_index > inactive.z_index);
        assert!(active.size.x > inactive.size.x);
        assert!(active.size.y > inactive.size.y);
        assert!(active.content.contains("bg-blue-600"));
        assert!(!inactive.content.contains("bg-blue-600"));
        assert_eq!(inactive.anchor, Pixels { x: 50, y: 40 });
    }

    #[test]
    fn price_label() {
        let listing = Listing::build().price(150_000, PriceUnit::PerJob).finish();
        let full = marker_icon(&listing, false, MarkerLabel::FullPrice);
        assert!(full.content.contains("150,000원"));
        let short = marker_icon(&listing, false, MarkerLabel::Abbreviated);
        assert!(short.content.contains("15만원"));
    }
}
