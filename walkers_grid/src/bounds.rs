//! Types and functions for working with the visible part of the world.

use egui::Rect;
use walkers::Projector;

/// Geographic rectangle, in degrees. Latitudes span `south` to `north`,
/// longitudes `west` to `east`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoBounds {
    /// Part of the world currently visible in the widget's `viewport`.
    pub fn of_viewport(viewport: Rect, projector: &Projector) -> Self {
        let north_west = projector.unproject(viewport.left_top().to_vec2());
        let south_east = projector.unproject(viewport.right_bottom().to_vec2());
        Self {
            west: north_west.x(),
            south: south_east.y(),
            east: south_east.x(),
            north: north_west.y(),
        }
    }

    /// Rectangle grown on each edge by `ratio` of the respective span. Negative
    /// `ratio` shrinks it instead.
    pub fn pad(&self, ratio: f64) -> Self {
        let lon_margin = (self.east - self.west) * ratio;
        let lat_margin = (self.north - self.south) * ratio;
        Self {
            west: self.west - lon_margin,
            south: self.south - lat_margin,
            east: self.east + lon_margin,
            north: self.north + lat_margin,
        }
    }

    /// Whether the rectangle spans both hemispheres along the latitude axis.
    pub fn crosses_equator(&self) -> bool {
        self.south < 0. && self.north > 0.
    }

    /// Whether the rectangle spans both hemispheres along the longitude axis.
    pub fn crosses_prime_meridian(&self) -> bool {
        self.west < 0. && self.east > 0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use egui::{Pos2, Vec2};
    use walkers::{MapMemory, lon_lat};

    #[test]
    fn padding_grows_each_edge_by_the_ratio_of_the_span() {
        let bounds = GeoBounds {
            west: -5.,
            south: 10.,
            east: 5.,
            north: 50.,
        };

        let padded = bounds.pad(0.5);
        assert_relative_eq!(padded.west, -10.);
        assert_relative_eq!(padded.east, 10.);
        assert_relative_eq!(padded.south, -10.);
        assert_relative_eq!(padded.north, 70.);
    }

    #[test]
    fn negative_padding_shrinks_the_rectangle() {
        let bounds = GeoBounds {
            west: 0.,
            south: 0.,
            east: 100.,
            north: 100.,
        };

        let inner = bounds.pad(-0.01);
        assert_relative_eq!(inner.west, 1.);
        assert_relative_eq!(inner.south, 1.);
        assert_relative_eq!(inner.east, 99.);
        assert_relative_eq!(inner.north, 99.);
    }

    #[test]
    fn crossing_zero_requires_both_hemispheres() {
        let across = GeoBounds {
            west: -5.,
            south: -1.,
            east: 5.,
            north: 1.,
        };
        assert!(across.crosses_equator());
        assert!(across.crosses_prime_meridian());

        let northern_east = GeoBounds {
            west: 10.,
            south: 40.,
            east: 20.,
            north: 50.,
        };
        assert!(!northern_east.crosses_equator());
        assert!(!northern_east.crosses_prime_meridian());

        // Touching zero is not crossing it.
        let touching = GeoBounds {
            west: 0.,
            south: 0.,
            east: 10.,
            north: 10.,
        };
        assert!(!touching.crosses_equator());
        assert!(!touching.crosses_prime_meridian());
    }

    #[test]
    fn viewport_bounds_surround_the_map_center() {
        let mut memory = MapMemory::default();
        memory.set_zoom(5.).unwrap();

        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::splat(512.));
        let projector = Projector::new(viewport, &memory, lon_lat(17., 51.));

        let bounds = GeoBounds::of_viewport(viewport, &projector);
        assert!(bounds.west < 17. && 17. < bounds.east);
        assert!(bounds.south < 51. && 51. < bounds.north);
        assert!(!bounds.crosses_equator());
    }
}
