//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is tested by its bounding box, and
//! responses are hard sign flips on one velocity component. Speed is never
//! changed here; `renormalize_velocity` pins it once per tick.

use glam::Vec2;

use super::state::{Paddle, Side};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Point-in-rect test, inclusive of the top/left edge
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Strict overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x.max(other.min.x) < a_max.x.min(b_max.x)
            && self.min.y.max(other.min.y) < a_max.y.min(b_max.y)
    }
}

/// Bounding box of a ball centered at `pos`
pub fn ball_bounds(pos: Vec2, radius: f32) -> Rect {
    Rect::new(pos.x - radius, pos.y - radius, radius * 2.0, radius * 2.0)
}

/// Scale `vel` to exactly `speed`, keeping its direction.
///
/// A zero vector has no direction and is returned unchanged.
pub fn renormalize_velocity(vel: Vec2, speed: f32) -> Vec2 {
    if vel.x == 0.0 && vel.y == 0.0 {
        return vel;
    }
    vel / vel.length() * speed
}

/// Horizontal wall touched by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Top,
    Bottom,
}

pub fn wall_contact(pos: Vec2, radius: f32) -> Option<WallContact> {
    if pos.y - radius <= 0.0 {
        Some(WallContact::Top)
    } else if pos.y + radius >= PLAYFIELD_HEIGHT {
        Some(WallContact::Bottom)
    } else {
        None
    }
}

/// Point the vertical velocity away from the touched wall
pub fn bounce_off_wall(vel: Vec2, contact: WallContact) -> Vec2 {
    match contact {
        WallContact::Top => Vec2::new(vel.x, vel.y.abs()),
        WallContact::Bottom => Vec2::new(vel.x, -vel.y.abs()),
    }
}

/// Paddle overlapped by the ball, left paddle taking precedence
pub fn paddle_contact(pos: Vec2, radius: f32, left: &Paddle, right: &Paddle) -> Option<Side> {
    let bounds = ball_bounds(pos, radius);
    if bounds.intersects(&left.rect()) {
        Some(Side::Left)
    } else if bounds.intersects(&right.rect()) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Send the ball back toward the opposite side
pub fn bounce_off_paddle(vel: Vec2, side: Side) -> Vec2 {
    match side {
        Side::Left => Vec2::new(vel.x.abs(), vel.y),
        Side::Right => Vec2::new(-vel.x.abs(), vel.y),
    }
}

/// Side whose goal line the ball has reached, if any
pub fn goal_crossed(pos: Vec2, radius: f32) -> Option<Side> {
    if pos.x - radius <= 0.0 {
        Some(Side::Left)
    } else if pos.x + radius >= PLAYFIELD_WIDTH {
        Some(Side::Right)
    } else {
        None
    }
}
