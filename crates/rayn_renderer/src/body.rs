//! The closed set of intersectable bodies.

use rayn_math::{Interval, Ray};

use crate::intersection::{Intersect, Intersection};
use crate::{Plane, Quad, Sphere, Triangle};

/// Any intersectable shape, or a composite of shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Quad(Quad),
    Aggregate(Aggregate),
}

impl Body {
    /// Type tag, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Sphere(_) => "sphere",
            Body::Plane(_) => "plane",
            Body::Triangle(_) => "triangle",
            Body::Quad(_) => "quad",
            Body::Aggregate(_) => "aggregate",
        }
    }
}

impl Intersect for Body {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        match self {
            Body::Sphere(sphere) => sphere.intersect(ray, ray_t),
            Body::Plane(plane) => plane.intersect(ray, ray_t),
            Body::Triangle(triangle) => triangle.intersect(ray, ray_t),
            Body::Quad(quad) => quad.intersect(ray, ray_t),
            Body::Aggregate(aggregate) => aggregate.intersect(ray, ray_t),
        }
    }
}

impl From<Sphere> for Body {
    fn from(sphere: Sphere) -> Self {
        Body::Sphere(sphere)
    }
}

impl From<Plane> for Body {
    fn from(plane: Plane) -> Self {
        Body::Plane(plane)
    }
}

impl From<Triangle> for Body {
    fn from(triangle: Triangle) -> Self {
        Body::Triangle(triangle)
    }
}

impl From<Quad> for Body {
    fn from(quad: Quad) -> Self {
        Body::Quad(quad)
    }
}

impl From<Aggregate> for Body {
    fn from(aggregate: Aggregate) -> Self {
        Body::Aggregate(aggregate)
    }
}

/// A list of bodies queried as one, reporting the nearest hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    children: Vec<Body>,
}

impl Aggregate {
    pub fn new(children: Vec<Body>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Body] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Intersect for Aggregate {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let mut nearest = None;
        let mut closest = ray_t.max;

        for child in &self.children {
            if let Some(hit) = child.intersect(ray, ray_t.with_max(closest)) {
                closest = hit.t;
                nearest = Some(hit);
            }
        }

        nearest
    }
}
