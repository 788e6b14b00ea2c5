// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored placement of a panel below its target.
//!
//! Placement is a pure function of live geometry: the anchor's bounding rectangle, the
//! panel's width, the viewport width, the [`Alignment`], and the edge buffer. Nothing is
//! cached between calls.
//!
//! The horizontal origin is computed from the alignment and then clamped into
//! `[buffer, viewport_width - panel_width - buffer]`. The upper bound is applied first, so
//! when the viewport is narrower than the panel plus both buffers the panel is pinned to the
//! left buffer and overflows on the right.
//!
//! The panel always goes below the anchor, `buffer` units under its bottom edge. There is no
//! flip to above when space runs out.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_dropdown::Alignment;
//! use understory_dropdown::placement::place;
//!
//! let anchor = Rect::from_origin_size((100.0, 50.0), (200.0, 30.0));
//! let origin = place(anchor, 80.0, 1000.0, Alignment::Right, 10.0);
//! assert_eq!(origin, Point::new(220.0, 90.0));
//! ```

use kurbo::{Point, Rect};

use crate::types::Alignment;

/// Horizontal origin before clamping.
pub fn aligned_left(anchor: Rect, panel_width: f64, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Right => anchor.x0 + anchor.width() - panel_width,
        Alignment::Center => anchor.x0 + anchor.width() / 2.0 - panel_width / 2.0,
        Alignment::Left => anchor.x0,
    }
}

/// Clamp a horizontal origin into the viewport, keeping `buffer` from each edge.
///
/// The upper bound is applied first, then the lower bound, so `buffer` wins when the two cross.
pub fn clamp_left(left: f64, panel_width: f64, viewport_width: f64, buffer: f64) -> f64 {
    left.min(viewport_width - panel_width - buffer).max(buffer)
}

/// Top-left origin for a panel of `panel_width` anchored to `anchor`.
pub fn place(
    anchor: Rect,
    panel_width: f64,
    viewport_width: f64,
    alignment: Alignment,
    buffer: f64,
) -> Point {
    let left = aligned_left(anchor, panel_width, alignment);
    let left = clamp_left(left, panel_width, viewport_width, buffer);
    let top = anchor.y0 + anchor.height() + buffer;
    Point::new(left, top)
}
