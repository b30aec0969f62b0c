// Pointer micro-interactions: card tilt, button ripple, code-window dots,
// cursor trail.

use std::collections::VecDeque;

/// Element bounds in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const DAMPING: f64 = 10.0;

    pub fn to_css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-15px) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn rest_css() -> &'static str {
        "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)"
    }
}

/// Tilt in degrees for a pointer at viewport position `(x, y)` over `rect`.
/// The card leans away from the pointer, more the further it is from the centre.
pub fn tilt(rect: &Rect, x: f64, y: f64) -> Tilt {
    let local_x = x - rect.left;
    let local_y = y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    Tilt {
        rotate_x: (local_y - center_y) / Tilt::DAMPING,
        rotate_y: (center_x - local_x) / Tilt::DAMPING,
    }
}

/// Square ripple centred on the click, in element-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripple {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

pub const RIPPLE_LIFETIME_MS: i32 = 600;

pub fn ripple(rect: &Rect, x: f64, y: f64) -> Ripple {
    let size = rect.width.max(rect.height);
    Ripple {
        left: x - rect.left - size / 2.0,
        top: y - rect.top - size / 2.0,
        size,
    }
}

/// Inline style a code-window dot applies to its window, undone after
/// `DOT_RESTORE_MS`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotEffect {
    pub property: &'static str,
    pub value: &'static str,
    pub restore: &'static str,
}

pub const DOT_RESTORE_MS: i32 = 300;

/// Effect for the dot at `index` in document order: close, minimize,
/// maximize. Any further dots do nothing.
pub fn dot_effect(index: usize) -> Option<DotEffect> {
    let (property, value, restore) = match index {
        0 => ("opacity", "0", "1"),
        1 => ("transform", "scale(0.95)", "scale(1)"),
        2 => ("transform", "scale(1.05)", "scale(1)"),
        _ => return None,
    };
    Some(DotEffect {
        property,
        value,
        restore,
    })
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub time_ms: f64,
}

/// Recent pointer positions: at most `MAX_LEN`, none older than `MAX_AGE_MS`.
#[derive(Clone, Debug, Default)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
}

impl CursorTrail {
    pub const MAX_LEN: usize = 20;
    pub const MAX_AGE_MS: f64 = 500.0;

    pub fn new() -> Self {
        CursorTrail::default()
    }

    pub fn push(&mut self, point: TrailPoint) {
        self.points.push_back(point);
        if self.points.len() > CursorTrail::MAX_LEN {
            self.points.pop_front();
        }
        self.expire(point.time_ms);
    }

    pub fn expire(&mut self, now_ms: f64) {
        self.points
            .retain(|p| now_ms - p.time_ms < CursorTrail::MAX_AGE_MS);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }
}
