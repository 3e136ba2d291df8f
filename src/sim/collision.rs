//! Corner-in-box collision detection
//!
//! Every entity is approximated by the tight axis-aligned box around its
//! polygon. Two entities collide when a corner of the second box lies inside
//! the first. This is one-directional: a box that completely surrounds the
//! other without any of its own corners inside it is only detected with the
//! arguments the other way round. Fast movers can also tunnel through thin
//! boxes between ticks.

use super::geometry::{Aabb, Bounded};

/// Which corners of `other` landed inside `target`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CornerHits {
    pub upper_right: bool,
    pub upper_left: bool,
    pub lower_right: bool,
    pub lower_left: bool,
}

impl CornerHits {
    pub fn any(&self) -> bool {
        self.upper_right || self.upper_left || self.lower_right || self.lower_left
    }
}

/// Test each corner of `other` against `target`
pub fn corner_hits(target: &Aabb, other: &Aabb) -> CornerHits {
    CornerHits {
        upper_right: target.contains(other.upper_right()),
        upper_left: target.contains(other.upper_left()),
        lower_right: target.contains(other.lower_right()),
        lower_left: target.contains(other.lower_left()),
    }
}

/// Whether any corner of `b`'s box lies within `a`'s box
pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Bounded + ?Sized,
    B: Bounded + ?Sized,
{
    corner_hits(&a.aabb(), &b.aabb()).any()
}
