// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Host`](crate::Host) for tests, demos, and headless embedding.
//!
//! [`SimHost`] keeps element rectangles and parent links in maps, records listener
//! registrations, and queues deferred tasks until the caller drains them with
//! [`SimHost::take_deferred`]. Draining the queue stands in for "the next turn of the
//! event loop".
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_dropdown::sim::SimHost;
//! use understory_dropdown::{Dropdown, ListenerKind};
//!
//! let mut host = SimHost::new(Size::new(1000.0, 800.0));
//! host.set_rect(1_u32, Rect::from_origin_size((100.0, 50.0), (200.0, 30.0)));
//! host.set_rect(2_u32, Rect::from_origin_size((0.0, 0.0), (80.0, 120.0)));
//!
//! let mut panel = Dropdown::new(2_u32);
//! panel.set_target(Some(1));
//! panel.attach(&mut host);
//!
//! panel.open();
//! panel.update(&mut host);
//! assert!(host.listeners(ListenerKind::Click).is_empty());
//!
//! for task in host.take_deferred() {
//!     panel.run_deferred(&mut host, task);
//! }
//! assert_eq!(host.listeners(ListenerKind::Click), [2_u32]);
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::host::{Deferred, EventSurface, Layout, ListenerKind};

/// Deferred tasks drained in one turn.
pub type DeferredQueue<K> = SmallVec<[Deferred<K>; 4]>;

/// In-memory host.
#[derive(Clone, Debug)]
pub struct SimHost<K> {
    viewport: Size,
    rects: HashMap<K, Rect>,
    parents: HashMap<K, K>,
    positions: HashMap<K, Point>,
    /// Registrations in insertion order, at most one per `(kind, owner)`.
    listeners: Vec<(ListenerKind, K)>,
    deferred: DeferredQueue<K>,
}

impl<K: Copy + Eq + Hash> SimHost<K> {
    /// Create a host with the given viewport size and no elements.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rects: HashMap::new(),
            parents: HashMap::new(),
            positions: HashMap::new(),
            listeners: Vec::new(),
            deferred: SmallVec::new(),
        }
    }

    /// The viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Change the viewport size. Listening panels are not notified; deliver
    /// [`HostEvent::Resize`](crate::HostEvent::Resize) for that.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Set the bounding rectangle of `element`.
    pub fn set_rect(&mut self, element: K, rect: Rect) {
        self.rects.insert(element, rect);
    }

    /// Remove `element`'s geometry.
    pub fn remove_rect(&mut self, element: K) {
        self.rects.remove(&element);
    }

    /// Make `parent` the parent of `child`.
    pub fn set_parent(&mut self, child: K, parent: K) {
        self.parents.insert(child, parent);
    }

    /// Shift every element by `-delta`, as scrolling the document by `delta` would.
    pub fn scroll_by(&mut self, delta: Vec2) {
        for rect in self.rects.values_mut() {
            *rect = *rect - delta;
        }
    }

    /// Last position applied to `element`.
    pub fn position_of(&self, element: K) -> Option<Point> {
        self.positions.get(&element).copied()
    }

    /// Owners with a listener of `kind`, in registration order.
    pub fn listeners(&self, kind: ListenerKind) -> Vec<K> {
        self.listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, owner)| *owner)
            .collect()
    }

    /// Number of `kind` listeners registered by `owner` (0 or 1).
    pub fn listener_count(&self, kind: ListenerKind, owner: K) -> usize {
        self.listeners
            .iter()
            .filter(|entry| **entry == (kind, owner))
            .count()
    }

    /// Number of registrations across all kinds and owners.
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Number of tasks waiting for the next turn.
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Take every task scheduled so far.
    pub fn take_deferred(&mut self) -> DeferredQueue<K> {
        core::mem::take(&mut self.deferred)
    }
}

impl<K: Copy + Eq + Hash> Layout<K> for SimHost<K> {
    fn bounding_rect(&self, element: K) -> Option<Rect> {
        self.rects.get(&element).copied()
    }

    fn parent_of(&self, element: K) -> Option<K> {
        self.parents.get(&element).copied()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.width
    }

    fn apply_position(&mut self, element: K, origin: Point) {
        self.positions.insert(element, origin);
        if let Some(rect) = self.rects.get_mut(&element) {
            *rect = rect.with_origin(origin);
        }
    }
}

impl<K: Copy + Eq + Hash> EventSurface<K> for SimHost<K> {
    fn add_listener(&mut self, kind: ListenerKind, owner: K) {
        // The DOM ignores a second registration of the same listener.
        if !self.listeners.contains(&(kind, owner)) {
            self.listeners.push((kind, owner));
        }
    }

    fn remove_listener(&mut self, kind: ListenerKind, owner: K) {
        self.listeners.retain(|entry| *entry != (kind, owner));
    }

    fn defer(&mut self, task: Deferred<K>) {
        self.deferred.push(task);
    }
}
