const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical position in floating-point degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Rectangular region of a map viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat <= self.ne.lat
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if pt.lat < self.sw.lat || pt.lat > self.ne.lat {
            return false;
        }
        if self.sw.lng <= self.ne.lng {
            // regular (inclusive)
            pt.lng >= self.sw.lng && pt.lng <= self.ne.lng
        } else {
            // inverse (exclusive)
            !(pt.lng > self.ne.lng && pt.lng < self.sw.lng)
        }
    }
}

impl std::fmt::Display for MapBbox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> MapBbox {
        MapBbox::new(
            MapPoint::from_lat_lng_deg(37.4, 126.8),
            MapPoint::from_lat_lng_deg(37.7, 127.2),
        )
    }

    #[test]
    fn point_validity() {
        assert!(MapPoint::from_lat_lng_deg(37.5665, 126.978).is_valid());
        assert!(MapPoint::from_lat_lng_deg(-90.0, 180.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(90.1, 0.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(0.0, -180.5).is_valid());
    }

    #[test]
    fn contains_point_inclusive() {
        let bbox = seoul();
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(37.545, 127.012)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(37.4, 126.8)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(37.7, 127.2)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(37.71, 127.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(37.5, 127.21)));
    }

    #[test]
    fn contains_point_across_antimeridian() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, 170.0),
            MapPoint::from_lat_lng_deg(10.0, -170.0),
        );
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 175.0)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, -175.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 0.0)));
    }

}
