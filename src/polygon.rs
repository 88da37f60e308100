//! Traced outlines and the polygons assembled from them.
//!
//! Vertices are in field coordinates where sample `(i, j)` covers the unit
//! square `[i, i+1] × [j, j+1]`, so a hard-edged block of samples produces an
//! outline on its pixel boundary. With `flip_y` every y is negated.
//!
//! Outlines are implicitly closed: the last vertex connects back to the first
//! and is never repeated. Converting to `geo` closes the rings explicitly.

use crate::float_types::Real;
use geo::{Area, BoundingRect, Contains, LineString, MultiPolygon, Point, Rect, coord};
use nalgebra::Point2;
use std::ops::Deref;

/// A contour vertex in field coordinates.
pub type Vertex = Point2<Real>;

/// An ordered, implicitly closed chain of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline(Vec<Vertex>);

impl Polyline {
    pub const fn new(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.0
    }

    /// The chain as a closed `geo` ring (first vertex repeated at the end).
    pub fn to_line_string(&self) -> LineString<Real> {
        let mut ls: LineString<Real> = self.0.iter().map(|v| coord! { x: v.x, y: v.y }).collect();
        ls.close();
        ls
    }

    /// Shoelace area. Without `flip_y` exteriors come out negative and holes positive.
    pub fn signed_area(&self) -> Real {
        geo::Polygon::new(self.to_line_string(), vec![]).signed_area()
    }

    /// Axis-aligned bounds, `None` for an empty chain.
    pub fn bounding_box(&self) -> Option<Rect<Real>> {
        self.to_line_string().bounding_rect()
    }

    /// True if `p` lies strictly inside the ring.
    pub fn encloses(&self, p: &Vertex) -> bool {
        geo::Polygon::new(self.to_line_string(), vec![]).contains(&Point::new(p.x, p.y))
    }
}

impl Deref for Polyline {
    type Target = [Vertex];

    fn deref(&self) -> &[Vertex] {
        &self.0
    }
}

impl From<Vec<Vertex>> for Polyline {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }
}

impl IntoIterator for Polyline {
    type Item = Vertex;
    type IntoIter = std::vec::IntoIter<Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A simple polygon with optional holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub exterior: Polyline,
    pub interiors: Vec<Polyline>,
}

impl Polygon {
    pub const fn new(exterior: Polyline, interiors: Vec<Polyline>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Vertices over the exterior and all holes.
    pub fn vertex_count(&self) -> usize {
        self.exterior.len() + self.interiors.iter().map(|h| h.len()).sum::<usize>()
    }

    /// Hands the polygon to `geo` (e.g. for triangulation or boolean ops).
    pub fn to_geo(&self) -> geo::Polygon<Real> {
        geo::Polygon::new(
            self.exterior.to_line_string(),
            self.interiors.iter().map(Polyline::to_line_string).collect(),
        )
    }
}

impl From<&Polygon> for geo::Polygon<Real> {
    fn from(polygon: &Polygon) -> Self {
        polygon.to_geo()
    }
}

/// All polygons of one march as a `geo::MultiPolygon`.
pub fn to_multi_polygon(polygons: &[Polygon]) -> MultiPolygon<Real> {
    MultiPolygon::new(polygons.iter().map(Polygon::to_geo).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: Real, max: Real) -> Polyline {
        Polyline::new(vec![
            Vertex::new(min, min),
            Vertex::new(min, max),
            Vertex::new(max, max),
            Vertex::new(max, min),
        ])
    }

    #[test]
    fn ring_is_closed_for_geo() {
        let ls = square(0.0, 1.0).to_line_string();
        assert_eq!(ls.0.len(), 5);
        assert_eq!(ls.0.first(), ls.0.last());
    }

    #[test]
    fn area_sign_follows_winding() {
        // (0,0) → (0,1) → (1,1) → (1,0) turns clockwise in a y-up frame
        let sq = square(0.0, 2.0);
        assert_eq!(sq.signed_area(), -4.0);
        let reversed = Polyline::new(sq.iter().rev().copied().collect());
        assert_eq!(reversed.signed_area(), 4.0);
    }

    #[test]
    fn encloses_is_strict() {
        let sq = square(0.0, 2.0);
        assert!(sq.encloses(&Vertex::new(1.0, 1.0)));
        assert!(!sq.encloses(&Vertex::new(3.0, 1.0)));
        assert!(!sq.encloses(&Vertex::new(0.0, 1.0)));
    }

    #[test]
    fn to_geo_keeps_holes() {
        let poly = Polygon::new(square(0.0, 4.0), vec![square(1.0, 2.0)]);
        let g = poly.to_geo();
        assert_eq!(g.interiors().len(), 1);
        assert_eq!(g.unsigned_area(), 15.0);
        assert_eq!(poly.vertex_count(), 8);
        assert_eq!(to_multi_polygon(&[poly.clone(), poly]).0.len(), 2);
    }
}
