//! Viewport bounds math.
//!
//! Reimplements the `getBounds().pad(...)` arithmetic the map library would
//! otherwise do, so that viewport fitting is a pure function of the marker
//! positions and can be tested without a browser. The UI hands the four
//! corner numbers to the map bridge.

/// Axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Fixed padding ratio applied everywhere the viewport is fit to markers.
pub const FIT_PADDING: f64 = 0.1;

/// Bounding box of a set of `(lat, lng)` points. `None` when empty.
///
/// A single point yields a degenerate (zero-extent) box; the bridge treats
/// a failed fit as non-fatal.
pub fn bounds_of(points: &[(f64, f64)]) -> Option<LatLngBounds> {
    let (&(first_lat, first_lng), rest) = points.split_first()?;
    let mut bounds = LatLngBounds {
        south: first_lat,
        west: first_lng,
        north: first_lat,
        east: first_lng,
    };
    for &(lat, lng) in rest {
        bounds.south = bounds.south.min(lat);
        bounds.north = bounds.north.max(lat);
        bounds.west = bounds.west.min(lng);
        bounds.east = bounds.east.max(lng);
    }
    Some(bounds)
}

impl LatLngBounds {
    /// Grow the box by `ratio` of its own extent in each direction.
    pub fn padded(&self, ratio: f64) -> LatLngBounds {
        let height = (self.north - self.south) * ratio;
        let width = (self.east - self.west) * ratio;
        LatLngBounds {
            south: self.south - height,
            west: self.west - width,
            north: self.north + height,
            east: self.east + width,
        }
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.south..=self.north).contains(&lat) && (self.west..=self.east).contains(&lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(bounds_of(&[]), None);
    }

    #[test]
    fn single_point_gives_degenerate_box() {
        let bounds = bounds_of(&[(53.3, -6.2)]).unwrap();
        assert_eq!(bounds.south, bounds.north);
        assert_eq!(bounds.west, bounds.east);
        // Padding a zero-extent box is a no-op rather than an error.
        assert_eq!(bounds.padded(FIT_PADDING), bounds);
    }

    #[test]
    fn bounds_cover_all_points() {
        let points = [(53.3, -6.2), (48.8, 2.3), (52.5, 13.4)];
        let bounds = bounds_of(&points).unwrap();
        assert_eq!(bounds.south, 48.8);
        assert_eq!(bounds.north, 53.3);
        assert_eq!(bounds.west, -6.2);
        assert_eq!(bounds.east, 13.4);
        for (lat, lng) in points {
            assert!(bounds.contains(lat, lng));
        }
    }

    #[test]
    fn padded_box_strictly_contains_the_original() {
        let bounds = bounds_of(&[(10.0, 10.0), (20.0, 30.0)]).unwrap();
        let padded = bounds.padded(FIT_PADDING);
        assert_eq!(padded.south, 9.0);
        assert_eq!(padded.north, 21.0);
        assert_eq!(padded.west, 8.0);
        assert_eq!(padded.east, 32.0);
    }
}
