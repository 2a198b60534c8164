use quickgig_entities::{geo::*, listing::*};

pub trait InBBox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBBox for Listing {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

#[cfg(test)]
mod tests {

    use quickgig_entities::builders::*;

    use super::*;

    #[test]
    fn is_in_bounding_box() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(37.5, 126.9),
            MapPoint::from_lat_lng_deg(37.6, 127.1),
        );
        let l = Listing::build()
            .title("foo")
            .pos(MapPoint::from_lat_lng_deg(37.545, 127.012))
            .finish();
        assert!(l.in_bbox(&bb));
        let l = Listing::build()
            .title("foo")
            .pos(MapPoint::from_lat_lng_deg(37.502, 126.89))
            .finish();
        assert!(!l.in_bbox(&bb));
    }
}
