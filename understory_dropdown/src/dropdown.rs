// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown panel: open/close state, anchored placement, and listener lifecycle.
//!
//! ## States
//!
//! A [`Dropdown`] is either closed (initial) or open. The state only changes through
//! [`Dropdown::open`], [`Dropdown::close`], [`Dropdown::toggle`], or a dismissing click
//! delivered through [`Dropdown::handle_event`].
//!
//! State mutation and side effects are split in two steps, like a reactive component:
//! the mutators record a [`Changes`] set, and [`Dropdown::update`] (the post-update hook)
//! reacts to it.
//!
//! - Entering open: position the panel, then schedule listener registration for the next
//!   turn with [`EventSurface::defer`](crate::EventSurface::defer). The click that opened
//!   the panel is still being dispatched and must not reach the dismissal listener.
//! - The deferred task carries a [`Generation`]. [`Dropdown::run_deferred`] only registers
//!   listeners if that generation is still the pending one, so closing before the next turn
//!   leaves nothing behind.
//! - Leaving open (close, toggle, dismissing click, or [`Dropdown::detach`]) releases every
//!   listener synchronously.
//!
//! Listeners are registered iff the panel is open, attached, and past its deferred turn.

use core::fmt::Debug;

use kurbo::Point;

use crate::host::{Deferred, Host, HostEvent, Layout, ListenerSet};
use crate::placement::place;
use crate::subscription::Subscription;
use crate::types::{Alignment, Changes, DismissMode, DropdownProps, Generation, sanitize_buffer};

/// A dropdown panel anchored to a target element.
///
/// `K` is the host's element key. `element` is the panel itself; `target` is the element it
/// is positioned against (falling back to the panel's parent when unset).
///
/// Call [`Dropdown::detach`] before dropping a panel that may be open. The panel holds no
/// host reference, so dropping it while subscribed leaves its listeners registered.
#[derive(Debug)]
pub struct Dropdown<K> {
    element: K,
    opened: bool,
    alignment: Alignment,
    buffer: f64,
    target: Option<K>,
    dismiss: DismissMode,
    changes: Changes,
    generation: Generation,
    pending: Option<Generation>,
    subscription: Option<Subscription<K>>,
    position: Option<Point>,
    attached: bool,
}

impl<K: Copy + PartialEq + Debug> Dropdown<K> {
    /// Create a closed, detached panel with default properties.
    pub fn new(element: K) -> Self {
        Self::with_props(element, DropdownProps::default())
    }

    /// Create a closed, detached panel with the given properties.
    pub fn with_props(element: K, props: DropdownProps) -> Self {
        Self {
            element,
            opened: false,
            alignment: props.alignment,
            buffer: sanitize_buffer(props.buffer),
            target: None,
            dismiss: props.dismiss,
            changes: Changes::empty(),
            generation: Generation::default(),
            pending: None,
            subscription: None,
            position: None,
            attached: false,
        }
    }

    /// The panel element.
    pub fn element(&self) -> K {
        self.element
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Horizontal alignment relative to the anchor.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Distance kept from the viewport edges.
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Explicit anchor, if set.
    pub fn target(&self) -> Option<K> {
        self.target
    }

    /// Dismissal policy for document clicks.
    pub fn dismiss_mode(&self) -> DismissMode {
        self.dismiss
    }

    /// Last origin applied to the panel.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Whether the panel is connected to a host.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether global listeners are currently registered.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether a deferred listener registration is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Current open/close cycle.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Changes recorded since the last [`update`](Self::update).
    pub fn pending_changes(&self) -> Changes {
        self.changes
    }

    /// Open the panel. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        self.set_opened(true)
    }

    /// Close the panel. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        self.set_opened(false)
    }

    /// Flip the open state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_opened(!self.opened);
        self.opened
    }

    fn set_opened(&mut self, opened: bool) -> bool {
        if self.opened == opened {
            return false;
        }
        self.opened = opened;
        self.changes |= Changes::OPENED;
        tracing::debug!(element = ?self.element, opened, "dropdown state changed");
        true
    }

    /// Set the horizontal alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.alignment != alignment {
            self.alignment = alignment;
            self.changes |= Changes::ALIGNMENT;
        }
    }

    /// Set the edge buffer. Negative values are clamped to `0.0`.
    pub fn set_buffer(&mut self, buffer: f64) {
        let buffer = sanitize_buffer(buffer);
        if self.buffer != buffer {
            self.buffer = buffer;
            self.changes |= Changes::BUFFER;
        }
    }

    /// Set or clear the explicit anchor.
    pub fn set_target(&mut self, target: Option<K>) {
        if self.target != target {
            self.target = target;
            self.changes |= Changes::TARGET;
        }
    }

    /// Set the dismissal policy. Takes effect on the next click.
    pub fn set_dismiss_mode(&mut self, dismiss: DismissMode) {
        self.dismiss = dismiss;
    }

    /// Connect the panel to `host` and apply any recorded changes.
    pub fn attach<H>(&mut self, host: &mut H) -> Changes
    where
        H: Host<K> + ?Sized,
    {
        self.attached = true;
        self.update(host)
    }

    /// Disconnect the panel, releasing listeners and cancelling any scheduled registration.
    ///
    /// The open state is kept; attaching again while open re-enters the open state.
    pub fn detach<H>(&mut self, host: &mut H)
    where
        H: Host<K> + ?Sized,
    {
        self.teardown(host);
        self.attached = false;
        if self.opened {
            self.changes |= Changes::OPENED;
        }
    }

    /// Apply recorded changes and return them.
    ///
    /// Call after mutating the panel, the way a component framework calls its post-update
    /// hook. The returned set tells the host what to re-render or notify. While detached
    /// nothing is applied and the changes stay recorded.
    pub fn update<H>(&mut self, host: &mut H) -> Changes
    where
        H: Host<K> + ?Sized,
    {
        if !self.attached {
            return Changes::empty();
        }
        let changes = core::mem::take(&mut self.changes);
        if changes.contains(Changes::OPENED) {
            self.opened_changed(host);
        } else if self.opened && changes.intersects(Changes::GEOMETRY) {
            self.resize(host);
        }
        changes
    }

    fn opened_changed<H>(&mut self, host: &mut H)
    where
        H: Host<K> + ?Sized,
    {
        if !self.opened {
            self.teardown(host);
        } else if self.subscription.is_none() && self.pending.is_none() {
            self.enter_open(host);
        } else {
            // Closed and reopened between updates: the current cycle stays valid.
            self.resize(host);
        }
    }

    fn enter_open<H>(&mut self, host: &mut H)
    where
        H: Host<K> + ?Sized,
    {
        self.resize(host);
        self.generation = self.generation.next();
        self.pending = Some(self.generation);
        host.defer(Deferred {
            owner: self.element,
            generation: self.generation,
        });
        tracing::debug!(
            element = ?self.element,
            generation = self.generation.get(),
            "listener registration deferred"
        );
    }

    fn teardown<H>(&mut self, host: &mut H)
    where
        H: Host<K> + ?Sized,
    {
        self.generation = self.generation.next();
        self.pending = None;
        if let Some(subscription) = self.subscription.take() {
            subscription.release(host);
        }
    }

    /// Run a task previously handed to [`EventSurface::defer`](crate::EventSurface::defer).
    ///
    /// Registers the click, resize, and scroll listeners if `task` belongs to this panel's
    /// current open cycle. Stale tasks are ignored. Returns whether listeners were registered.
    pub fn run_deferred<H>(&mut self, host: &mut H, task: Deferred<K>) -> bool
    where
        H: Host<K> + ?Sized,
    {
        if task.owner != self.element
            || self.pending != Some(task.generation)
            || !self.opened
            || !self.attached
        {
            tracing::trace!(
                element = ?self.element,
                generation = task.generation.get(),
                "stale deferred registration ignored"
            );
            return false;
        }
        debug_assert!(
            self.subscription.is_none(),
            "pending registration while already subscribed"
        );
        self.pending = None;
        self.subscription = Some(Subscription::acquire(
            host,
            self.element,
            ListenerSet::all(),
        ));
        true
    }

    /// Deliver a global event.
    ///
    /// Returns `None` when the panel did not react: no matching listener is held, a click
    /// landed inside under [`DismissMode::Outside`], or repositioning hit a no-op path.
    /// Otherwise returns the changes applied while reacting. A dismissing click reports
    /// [`Changes::OPENED`] along with anything else recorded since the last update.
    pub fn handle_event<H>(&mut self, host: &mut H, event: HostEvent) -> Option<Changes>
    where
        H: Host<K> + ?Sized,
    {
        let subscribed = self
            .subscription
            .as_ref()
            .is_some_and(|sub| sub.kinds().contains(event.kind().as_set()));
        if !subscribed {
            tracing::trace!(element = ?self.element, ?event, "event without listener ignored");
            return None;
        }
        match event {
            HostEvent::Click { position } => {
                if self.dismiss == DismissMode::Outside && self.hit(host, position) {
                    tracing::trace!(element = ?self.element, ?position, "click inside ignored");
                    return None;
                }
                self.close();
                Some(self.update(host))
            }
            HostEvent::Resize | HostEvent::Scroll => {
                self.resize(host).map(|_| Changes::empty())
            }
        }
    }

    /// Recompute and apply the panel origin from live geometry.
    ///
    /// No-op (returns `None`) when closed, when there is neither a target nor a parent, or
    /// when the anchor has no geometry.
    pub fn resize<H>(&mut self, host: &mut H) -> Option<Point>
    where
        H: Layout<K> + ?Sized,
    {
        if !self.opened {
            return None;
        }
        let Some(anchor) = self.anchor(host) else {
            tracing::trace!(element = ?self.element, "no target or parent; not positioned");
            return None;
        };
        let Some(anchor_rect) = host.bounding_rect(anchor) else {
            tracing::trace!(element = ?self.element, ?anchor, "anchor has no geometry");
            return None;
        };
        let panel_width = host
            .bounding_rect(self.element)
            .map_or(0.0, |rect| rect.width());
        let origin = place(
            anchor_rect,
            panel_width,
            host.viewport_width(),
            self.alignment,
            self.buffer,
        );
        host.apply_position(self.element, origin);
        self.position = Some(origin);
        tracing::debug!(element = ?self.element, ?anchor, x = origin.x, y = origin.y, "dropdown placed");
        Some(origin)
    }

    fn anchor<H>(&self, host: &H) -> Option<K>
    where
        H: Layout<K> + ?Sized,
    {
        self.target.or_else(|| host.parent_of(self.element))
    }

    fn hit<H>(&self, host: &H, position: Point) -> bool
    where
        H: Layout<K> + ?Sized,
    {
        let panel = host.bounding_rect(self.element);
        let anchor = self.anchor(host).and_then(|anchor| host.bounding_rect(anchor));
        [panel, anchor]
            .into_iter()
            .flatten()
            .any(|rect| rect.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::*;
    use crate::host::ListenerKind;
    use crate::sim::SimHost;

    const TRIGGER: u32 = 1;
    const PANEL: u32 = 2;
    const CONTAINER: u32 = 4;

    const OUTSIDE: Point = Point::new(900.0, 700.0);

    fn host() -> SimHost<u32> {
        let mut host = SimHost::new(Size::new(1000.0, 800.0));
        host.set_rect(
            TRIGGER,
            Rect::from_origin_size((100.0, 50.0), (200.0, 30.0)),
        );
        host.set_rect(PANEL, Rect::from_origin_size((0.0, 0.0), (80.0, 120.0)));
        host
    }

    fn attached_panel(host: &mut SimHost<u32>) -> Dropdown<u32> {
        let mut panel = Dropdown::new(PANEL);
        panel.set_target(Some(TRIGGER));
        panel.attach(host);
        panel
    }

    fn next_turn(host: &mut SimHost<u32>, panel: &mut Dropdown<u32>) {
        for task in host.take_deferred() {
            panel.run_deferred(host, task);
        }
    }

    /// Deliver `event` only if the host has a matching listener, as a DOM would.
    fn dispatch(
        host: &mut SimHost<u32>,
        panel: &mut Dropdown<u32>,
        event: HostEvent,
    ) -> Option<Changes> {
        if host.listener_count(event.kind(), panel.element()) == 0 {
            return None;
        }
        panel.handle_event(host, event)
    }

    fn open_and_settle(host: &mut SimHost<u32>, panel: &mut Dropdown<u32>) {
        panel.open();
        panel.update(host);
        next_turn(host, panel);
    }

    #[test]
    fn defaults() {
        let panel: Dropdown<u32> = Dropdown::new(PANEL);
        assert!(!panel.is_open());
        assert_eq!(panel.alignment(), Alignment::Right);
        assert_eq!(panel.buffer(), 10.0);
        assert_eq!(panel.target(), None);
        assert_eq!(panel.dismiss_mode(), DismissMode::AnyClick);
        assert!(!panel.is_attached());
        assert!(!panel.is_listening());
    }

    #[test]
    fn open_is_idempotent() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);

        assert!(panel.open());
        assert!(!panel.open());
        assert_eq!(panel.update(&mut host), Changes::OPENED);
        assert!(panel.is_open());
        assert_eq!(host.pending_deferred(), 1);

        // A second open with nothing changed schedules nothing.
        assert!(!panel.open());
        assert_eq!(panel.update(&mut host), Changes::empty());
        assert_eq!(host.pending_deferred(), 1);

        next_turn(&mut host, &mut panel);
        assert_eq!(host.listener_count(ListenerKind::Click, PANEL), 1);
    }

    #[test]
    fn close_is_idempotent() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        assert!(panel.close());
        assert!(!panel.close());
        panel.update(&mut host);
        assert!(!panel.is_open());
        assert_eq!(host.total_listeners(), 0);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);

        assert!(panel.toggle());
        assert!(!panel.toggle());
        panel.update(&mut host);
        assert!(!panel.is_open());
        assert_eq!(host.pending_deferred(), 0);
        assert_eq!(host.total_listeners(), 0);
    }

    #[test]
    fn opening_positions_below_target() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);

        panel.open();
        panel.update(&mut host);

        assert_eq!(panel.position(), Some(Point::new(220.0, 90.0)));
        assert_eq!(host.position_of(PANEL), Some(Point::new(220.0, 90.0)));
    }

    #[test]
    fn outside_click_closes_and_removes_listeners() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);
        assert!(panel.is_listening());
        assert_eq!(host.total_listeners(), 3);

        let click = HostEvent::Click { position: OUTSIDE };
        assert!(dispatch(&mut host, &mut panel, click).is_some());
        assert!(!panel.is_open());
        assert_eq!(host.total_listeners(), 0);

        // Listener is gone: a later click changes nothing.
        assert_eq!(dispatch(&mut host, &mut panel, click), None);
        assert!(!panel.is_open());
        assert_eq!(panel.pending_changes(), Changes::empty());
    }

    #[test]
    fn opening_click_does_not_reach_dismissal() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);

        panel.open();
        panel.update(&mut host);
        // The opening click is still bubbling to the document.
        let click = HostEvent::Click { position: OUTSIDE };
        assert_eq!(dispatch(&mut host, &mut panel, click), None);
        assert!(panel.is_open());

        next_turn(&mut host, &mut panel);
        assert!(dispatch(&mut host, &mut panel, click).is_some());
        assert!(!panel.is_open());
    }

    #[test]
    fn close_before_deferred_registration_attaches_nothing() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);

        panel.open();
        panel.update(&mut host);
        assert!(panel.is_pending());
        panel.close();
        panel.update(&mut host);
        assert!(!panel.is_pending());

        next_turn(&mut host, &mut panel);
        assert!(!panel.is_listening());
        assert_eq!(host.total_listeners(), 0);
    }

    #[test]
    fn only_latest_cycle_registers() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);

        panel.open();
        panel.update(&mut host);
        panel.close();
        panel.update(&mut host);
        panel.open();
        panel.update(&mut host);
        assert_eq!(host.pending_deferred(), 2);

        let tasks = host.take_deferred();
        assert!(!panel.run_deferred(&mut host, tasks[0]));
        assert!(panel.run_deferred(&mut host, tasks[1]));
        // Replaying the consumed task does not register twice.
        assert!(!panel.run_deferred(&mut host, tasks[1]));
        assert_eq!(host.listener_count(ListenerKind::Click, PANEL), 1);
    }

    #[test]
    fn task_for_other_owner_is_ignored() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        panel.open();
        panel.update(&mut host);

        let task = Deferred {
            owner: TRIGGER,
            generation: panel.generation(),
        };
        assert!(!panel.run_deferred(&mut host, task));
        assert!(panel.is_pending());
    }

    #[test]
    fn resize_is_noop_when_closed() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        assert_eq!(panel.resize(&mut host), None);
        assert_eq!(host.position_of(PANEL), None);
    }

    #[test]
    fn resize_without_target_or_parent_is_noop() {
        let mut host = host();
        let mut panel = Dropdown::new(PANEL);
        panel.attach(&mut host);

        panel.open();
        panel.update(&mut host);
        assert!(panel.is_open());
        assert_eq!(panel.position(), None);
        assert_eq!(host.position_of(PANEL), None);
    }

    #[test]
    fn resize_falls_back_to_parent() {
        let mut host = host();
        host.set_rect(
            CONTAINER,
            Rect::from_origin_size((500.0, 100.0), (100.0, 40.0)),
        );
        host.set_parent(PANEL, CONTAINER);
        let mut panel = Dropdown::new(PANEL);
        panel.attach(&mut host);

        panel.open();
        panel.update(&mut host);
        // 500 + 100 - 80, 100 + 40 + 10
        assert_eq!(panel.position(), Some(Point::new(520.0, 150.0)));
    }

    #[test]
    fn resize_event_reclamps() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        host.set_viewport(Size::new(250.0, 800.0));
        assert!(dispatch(&mut host, &mut panel, HostEvent::Resize).is_some());
        assert_eq!(panel.position(), Some(Point::new(160.0, 90.0)));
    }

    #[test]
    fn scroll_event_follows_target() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        host.scroll_by(Vec2::new(0.0, 20.0));
        assert!(dispatch(&mut host, &mut panel, HostEvent::Scroll).is_some());
        assert_eq!(panel.position(), Some(Point::new(220.0, 70.0)));
    }

    #[test]
    fn geometry_change_while_open_repositions() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        panel.set_alignment(Alignment::Left);
        assert_eq!(panel.update(&mut host), Changes::ALIGNMENT);
        assert_eq!(panel.position(), Some(Point::new(100.0, 90.0)));

        panel.set_buffer(0.0);
        panel.update(&mut host);
        assert_eq!(panel.position(), Some(Point::new(100.0, 80.0)));
    }

    #[test]
    fn geometry_change_while_closed_does_not_position() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        panel.set_alignment(Alignment::Center);
        panel.update(&mut host);
        assert_eq!(host.position_of(PANEL), None);
    }

    #[test]
    fn negative_buffer_clamps_to_zero() {
        let mut panel: Dropdown<u32> = Dropdown::new(PANEL);
        panel.set_buffer(-5.0);
        assert_eq!(panel.buffer(), 0.0);
        assert_eq!(panel.pending_changes(), Changes::BUFFER);

        let panel: Dropdown<u32> = Dropdown::with_props(
            PANEL,
            DropdownProps {
                buffer: -1.0,
                ..DropdownProps::default()
            },
        );
        assert_eq!(panel.buffer(), 0.0);
    }

    #[test]
    fn detach_while_open_releases_listeners() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        panel.detach(&mut host);
        assert!(panel.is_open());
        assert!(!panel.is_listening());
        assert_eq!(host.total_listeners(), 0);

        // Reattaching restores the open cycle.
        panel.attach(&mut host);
        next_turn(&mut host, &mut panel);
        assert!(panel.is_listening());
        assert_eq!(host.total_listeners(), 3);
    }

    #[test]
    fn detach_cancels_pending_registration() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        panel.open();
        panel.update(&mut host);

        panel.detach(&mut host);
        next_turn(&mut host, &mut panel);
        assert_eq!(host.total_listeners(), 0);
    }

    #[test]
    fn update_while_detached_keeps_changes() {
        let mut host = host();
        let mut panel = Dropdown::new(PANEL);
        panel.set_target(Some(TRIGGER));
        panel.open();

        assert_eq!(panel.update(&mut host), Changes::empty());
        assert_eq!(panel.pending_changes(), Changes::OPENED | Changes::TARGET);
        assert_eq!(host.pending_deferred(), 0);

        panel.attach(&mut host);
        assert_eq!(panel.position(), Some(Point::new(220.0, 90.0)));
        assert_eq!(host.pending_deferred(), 1);
    }

    #[test]
    fn known_divergence_click_inside_panel_dismisses() {
        // Default dismissal does not hit-test: clicks on the panel itself close it.
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        let inside = HostEvent::Click {
            position: Point::new(250.0, 100.0),
        };
        assert!(dispatch(&mut host, &mut panel, inside).is_some());
        assert!(!panel.is_open());
    }

    #[test]
    fn outside_mode_ignores_clicks_on_panel_and_target() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        panel.set_dismiss_mode(DismissMode::Outside);
        open_and_settle(&mut host, &mut panel);

        let on_panel = HostEvent::Click {
            position: Point::new(250.0, 100.0),
        };
        let on_target = HostEvent::Click {
            position: Point::new(150.0, 60.0),
        };
        assert_eq!(dispatch(&mut host, &mut panel, on_panel), None);
        assert_eq!(dispatch(&mut host, &mut panel, on_target), None);
        assert!(panel.is_open());
        assert!(panel.is_listening());

        let outside = HostEvent::Click { position: OUTSIDE };
        assert!(dispatch(&mut host, &mut panel, outside).is_some());
        assert!(!panel.is_open());
    }

    #[test]
    fn events_without_listener_are_ignored() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        assert_eq!(panel.handle_event(&mut host, HostEvent::Resize), None);
        assert_eq!(
            panel.handle_event(&mut host, HostEvent::Click { position: OUTSIDE }),
            None
        );
    }

    #[test]
    fn dismissing_click_reports_changes() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        // Recorded but not yet applied when the click arrives.
        panel.set_alignment(Alignment::Center);
        let click = HostEvent::Click { position: OUTSIDE };
        let changes = dispatch(&mut host, &mut panel, click).expect("click dismisses");
        assert_eq!(changes, Changes::OPENED | Changes::ALIGNMENT);
        assert_eq!(panel.pending_changes(), Changes::empty());
    }

    #[test]
    fn reposition_without_anchor_geometry_is_unhandled() {
        let mut host = host();
        let mut panel = attached_panel(&mut host);
        open_and_settle(&mut host, &mut panel);

        host.remove_rect(TRIGGER);
        assert_eq!(dispatch(&mut host, &mut panel, HostEvent::Resize), None);
        assert_eq!(dispatch(&mut host, &mut panel, HostEvent::Scroll), None);
        // Last applied origin is kept.
        assert_eq!(panel.position(), Some(Point::new(220.0, 90.0)));
    }
}
