//! Point lists for the shapes that are not regular polygons

use glam::Vec2;

use crate::consts::{POWER_UP_RADIUS, PROJECTILE_HEIGHT, PROJECTILE_WIDTH};
use crate::sim::PowerUpKind;

/// Axis-aligned rectangle centered on `center`, clockwise from upper-left
pub fn rect(center: Vec2, width: f32, height: f32) -> [Vec2; 4] {
    let half = Vec2::new(width, height) / 2.0;
    [
        center - half,
        Vec2::new(center.x + half.x, center.y - half.y),
        center + half,
        Vec2::new(center.x - half.x, center.y + half.y),
    ]
}

pub fn projectile(center: Vec2) -> [Vec2; 4] {
    rect(center, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
}

pub fn power_up_color(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::SpeedUp => "deepskyblue",
        PowerUpKind::MultiShoot => "orange",
    }
}

/// Icon drawn inside a power-up's circle
pub fn power_up_icon(kind: PowerUpKind, center: Vec2) -> Vec<Vec<Vec2>> {
    let s = POWER_UP_RADIUS * 0.5;
    match kind {
        // Upward arrow
        PowerUpKind::SpeedUp => vec![vec![
            center + Vec2::new(0.0, -s),
            center + Vec2::new(s, 0.0),
            center + Vec2::new(s * 0.4, 0.0),
            center + Vec2::new(s * 0.4, s),
            center + Vec2::new(-s * 0.4, s),
            center + Vec2::new(-s * 0.4, 0.0),
            center + Vec2::new(-s, 0.0),
        ]],
        // Two parallel shots
        PowerUpKind::MultiShoot => [-s * 0.5, s * 0.5]
            .into_iter()
            .map(|dx| rect(center + Vec2::new(dx, 0.0), 2.0, s * 2.0).to_vec())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let r = rect(Vec2::new(10.0, 20.0), 4.0, 8.0);
        assert_eq!(r[0], Vec2::new(8.0, 16.0));
        assert_eq!(r[2], Vec2::new(12.0, 24.0));
    }

    #[test]
    fn test_icons_fit_inside_circle() {
        let center = Vec2::new(50.0, 50.0);
        for kind in PowerUpKind::ALL {
            for part in power_up_icon(kind, center) {
                assert!(part.iter().all(|p| p.distance(center) < POWER_UP_RADIUS));
            }
        }
    }
}
