//! Axis-aligned bounding boxes and collision response
//!
//! All obstacles are axis-aligned rectangles; the moving entity is tested
//! as the AABB around its circle. The bounce axis comes from comparing the
//! normalized horizontal/vertical overlap and picking the smaller one. This
//! is an approximation of the true contact normal, accepted for arcade feel.

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from top-left corner and size
    pub fn from_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Box from center point and half-extents
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Which velocity component a hit reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitAxis {
    /// Side hit: flip the x component
    Horizontal,
    /// Top/bottom hit: flip the y component
    Vertical,
}

/// Result of an overlap test between two boxes
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub axis: HitAxis,
    /// Penetration depth along the chosen axis
    pub penetration: f32,
}

/// Overlap test returning the axis of minimum normalized penetration
///
/// Overlap on each axis is normalized by the combined half-extents so a
/// wide-vs-tall pairing doesn't bias the axis choice.
pub fn intersect(a: &Aabb, b: &Aabb) -> Option<Hit> {
    let overlap_x = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_y = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    let norm_x = overlap_x / (a.width() + b.width()).max(f32::EPSILON);
    let norm_y = overlap_y / (a.height() + b.height()).max(f32::EPSILON);

    if norm_x < norm_y {
        Some(Hit {
            axis: HitAxis::Horizontal,
            penetration: overlap_x,
        })
    } else {
        Some(Hit {
            axis: HitAxis::Vertical,
            penetration: overlap_y,
        })
    }
}

/// Reflect velocity along the hit axis
#[inline]
pub fn reflect(velocity: Vec2, axis: HitAxis) -> Vec2 {
    match axis {
        HitAxis::Horizontal => Vec2::new(-velocity.x, velocity.y),
        HitAxis::Vertical => Vec2::new(velocity.x, -velocity.y),
    }
}
