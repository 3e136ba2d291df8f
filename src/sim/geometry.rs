//! Regular-polygon geometry and bounding offsets
//!
//! Screen space: x grows right, y grows down. A polygon with rotation 0 has
//! its first vertex straight above the center.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Distances from an entity's center to each side of its tight
/// axis-aligned bounding box. All four are >= 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Offsets {
    /// Same margin on every side (circles, squares)
    pub const fn uniform(margin: f32) -> Self {
        Self {
            left: margin,
            right: margin,
            top: margin,
            bottom: margin,
        }
    }

    /// Axis-aligned rectangle centered on the entity
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            left: width / 2.0,
            right: width / 2.0,
            top: height / 2.0,
            bottom: height / 2.0,
        }
    }

    /// Tight offsets of a regular polygon
    pub fn polygon(sides: u32, radius: f32, rotation: f32) -> Self {
        let mut offsets = Self::default();
        for i in 0..sides {
            let d = vertex_displacement(i, sides, radius, rotation);
            if d.x < 0.0 {
                offsets.left = offsets.left.max(-d.x);
            } else {
                offsets.right = offsets.right.max(d.x);
            }
            if d.y < 0.0 {
                offsets.top = offsets.top.max(-d.y);
            } else {
                offsets.bottom = offsets.bottom.max(d.y);
            }
        }
        offsets
    }
}

/// Screen-space box spanned by a center and its offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn around(center: Vec2, offsets: &Offsets) -> Self {
        Self {
            min: Vec2::new(center.x - offsets.left, center.y - offsets.top),
            max: Vec2::new(center.x + offsets.right, center.y + offsets.bottom),
        }
    }

    /// Inclusive point containment
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn upper_left(&self) -> Vec2 {
        self.min
    }

    pub fn upper_right(&self) -> Vec2 {
        Vec2::new(self.max.x, self.min.y)
    }

    pub fn lower_left(&self) -> Vec2 {
        Vec2::new(self.min.x, self.max.y)
    }

    pub fn lower_right(&self) -> Vec2 {
        self.max
    }

    /// Closed outline, clockwise from the upper-left corner
    pub fn outline(&self) -> [Vec2; 4] {
        [
            self.upper_left(),
            self.upper_right(),
            self.lower_right(),
            self.lower_left(),
        ]
    }
}

/// State shared by every entity kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub alive: bool,
    pub offsets: Offsets,
}

impl Body {
    pub fn new(pos: Vec2, offsets: Offsets) -> Self {
        Self {
            pos,
            alive: true,
            offsets,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::around(self.pos, &self.offsets)
    }

    #[inline]
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Anything with a position and bounding offsets
pub trait Bounded {
    fn body(&self) -> &Body;

    #[inline]
    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    #[inline]
    fn is_alive(&self) -> bool {
        self.body().alive
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        self.body().aabb()
    }
}

impl Bounded for Body {
    fn body(&self) -> &Body {
        self
    }
}

/// Offset of vertex `i` from the polygon center
#[inline]
fn vertex_displacement(i: u32, sides: u32, radius: f32, rotation: f32) -> Vec2 {
    let angle = i as f32 * TAU / sides as f32 + FRAC_PI_2 + rotation;
    Vec2::new(-angle.cos() * radius, -angle.sin() * radius)
}

/// Absolute vertex positions of a regular polygon, in drawing order
pub fn polygon_vertices(center: Vec2, sides: u32, radius: f32, rotation: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| center + vertex_displacement(i, sides, radius, rotation))
        .collect()
}
