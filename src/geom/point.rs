// src/geom/point.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Vector pointing from `self` to `other`.
    pub fn vector_to(&self, other: &Point2D) -> Vector2D {
        Vector2D::new(other.x - self.x, other.y - self.y)
    }

    pub fn offset(&self, v: &Vector2D) -> Point2D {
        Point2D::new(self.x + v.x, self.y + v.y)
    }

    /// True if both coordinates lie within the square board of the given
    /// half-extent (inclusive).
    pub fn within_bounds(&self, half_extent: f64) -> bool {
        self.x.abs() <= half_extent && self.y.abs() <= half_extent
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. A zero vector is returned
    /// unchanged rather than dividing by zero.
    pub fn normalize(&self) -> Vector2D {
        let length = self.norm();
        if length == 0.0 {
            return *self;
        }
        Vector2D::new(self.x / length, self.y / length)
    }

    pub fn scale(&self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }
}
