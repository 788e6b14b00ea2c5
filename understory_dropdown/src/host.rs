// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a dropdown and the page it is embedded in.
//!
//! A host provides geometry ([`Layout`]) and a global event surface ([`EventSurface`]).
//! Element identity is an opaque, copyable key `K` chosen by the host (a DOM node handle,
//! a box tree `NodeId`, an application id, ...). All rectangles are in viewport coordinates.

use kurbo::{Point, Rect};

use crate::types::Generation;

/// Geometry queries and position output.
pub trait Layout<K> {
    /// Bounding rectangle of `element` in viewport coordinates, if it has one.
    fn bounding_rect(&self, element: K) -> Option<Rect>;

    /// Parent element of `element`, if any.
    fn parent_of(&self, element: K) -> Option<K>;

    /// Width of the viewport.
    fn viewport_width(&self) -> f64;

    /// Place `element` with its top-left corner at `origin` (viewport coordinates).
    fn apply_position(&mut self, element: K, origin: Point);
}

/// Global listener registration and next-turn scheduling.
///
/// `owner` identifies the registering panel. Hosts deliver events for a registered
/// `(kind, owner)` pair by calling [`Dropdown::handle_event`](crate::Dropdown::handle_event)
/// on that panel.
pub trait EventSurface<K> {
    /// Register a listener of `kind` on behalf of `owner`.
    fn add_listener(&mut self, kind: ListenerKind, owner: K);

    /// Remove the listener of `kind` registered by `owner`. Removing an absent listener is a no-op.
    fn remove_listener(&mut self, kind: ListenerKind, owner: K);

    /// Schedule `task` for the next turn of the event loop.
    ///
    /// When it fires, the host passes it back to
    /// [`Dropdown::run_deferred`](crate::Dropdown::run_deferred).
    fn defer(&mut self, task: Deferred<K>);
}

/// Everything a dropdown needs from its embedder.
pub trait Host<K>: Layout<K> + EventSurface<K> {}

impl<K, T> Host<K> for T where T: Layout<K> + EventSurface<K> + ?Sized {}

/// A global listener a panel may hold while open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Document-level click, used for dismissal.
    Click,
    /// Window resize, used for repositioning.
    Resize,
    /// Window scroll, used for repositioning.
    Scroll,
}

impl ListenerKind {
    /// DOM event name.
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Resize => "resize",
            Self::Scroll => "scroll",
        }
    }

    /// Whether the listener should be registered as passive.
    pub const fn passive(self) -> bool {
        !matches!(self, Self::Click)
    }

    /// The single-kind [`ListenerSet`].
    pub const fn as_set(self) -> ListenerSet {
        match self {
            Self::Click => ListenerSet::CLICK,
            Self::Resize => ListenerSet::RESIZE,
            Self::Scroll => ListenerSet::SCROLL,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`ListenerKind`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerSet: u8 {
        /// Document click.
        const CLICK  = 0b0000_0001;
        /// Window resize.
        const RESIZE = 0b0000_0010;
        /// Window scroll.
        const SCROLL = 0b0000_0100;
    }
}

impl ListenerSet {
    /// Iterate the kinds in this set in `Click`, `Resize`, `Scroll` order.
    pub fn kinds(self) -> impl Iterator<Item = ListenerKind> {
        [ListenerKind::Click, ListenerKind::Resize, ListenerKind::Scroll]
            .into_iter()
            .filter(move |kind| self.contains(kind.as_set()))
    }
}

/// An event the host delivers to a subscribed panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// A click anywhere in the document, at `position` in viewport coordinates.
    Click {
        /// Pointer position.
        position: Point,
    },
    /// The window was resized.
    Resize,
    /// The window (or a scrolling ancestor) scrolled.
    Scroll,
}

impl HostEvent {
    /// The listener kind that receives this event.
    pub const fn kind(&self) -> ListenerKind {
        match self {
            Self::Click { .. } => ListenerKind::Click,
            Self::Resize => ListenerKind::Resize,
            Self::Scroll => ListenerKind::Scroll,
        }
    }
}

/// A deferred listener registration, handed to [`EventSurface::defer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deferred<K> {
    /// Panel that scheduled the task.
    pub owner: K,
    /// Open cycle the task belongs to.
    pub generation: Generation,
}
