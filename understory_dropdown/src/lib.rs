// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dropdown --heading-base-level=0

//! Understory Dropdown: a headless, `no_std` dropdown panel and trigger menu.
//!
//! ## Overview
//!
//! This crate models a dropdown's open/close lifecycle and its placement relative to an anchor
//! element, along with the global listeners that dismiss and reposition the panel while open.
//! It does not render anything. Markup and styling stay with the host toolkit, which talks to
//! this crate through the [`Layout`] and [`EventSurface`] traits.
//!
//! - [`Dropdown`]: the panel. Open state, [`Alignment`], edge buffer, and an optional target.
//! - [`DropdownMenu`]: a trigger element that toggles a [`Dropdown`] anchored to itself.
//! - [`placement`]: the pure placement function used by [`Dropdown::resize`].
//! - [`Subscription`]: scoped ownership of the panel's click, resize, and scroll listeners.
//! - [`sim`]: an in-memory host for tests and demos.
//!
//! ## Lifecycle
//!
//! Mutators ([`Dropdown::open`], [`Dropdown::close`], [`Dropdown::toggle`], and the setters)
//! only record a [`Changes`] set. [`Dropdown::update`] applies it:
//!
//! 1) Opening positions the panel and defers listener registration to the next turn of the
//!    host's event loop, so the click that opened the panel does not immediately close it.
//! 2) The host hands the [`Deferred`] task back to [`Dropdown::run_deferred`], which registers
//!    listeners only if the panel is still in the same open cycle.
//! 3) Closing, a dismissing click, or [`Dropdown::detach`] releases every listener at once.
//!
//! While open, [`HostEvent::Resize`] and [`HostEvent::Scroll`] recompute the placement from
//! live geometry; changing alignment, buffer, or target does too.
//!
//! ## Dismissal
//!
//! With the default [`DismissMode::AnyClick`] every document click closes the panel, including
//! clicks on the panel or the trigger. [`DismissMode::Outside`] hit-tests the click against the
//! panel's and the anchor's bounds first.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_dropdown::sim::SimHost;
//! use understory_dropdown::{Changes, DropdownMenu, HostEvent, ListenerKind};
//!
//! const TRIGGER: u32 = 1;
//! const PANEL: u32 = 2;
//!
//! let mut host = SimHost::new(Size::new(1000.0, 800.0));
//! host.set_rect(TRIGGER, Rect::from_origin_size((100.0, 50.0), (200.0, 30.0)));
//! host.set_rect(PANEL, Rect::from_origin_size((0.0, 0.0), (80.0, 120.0)));
//!
//! let mut menu = DropdownMenu::new(TRIGGER, PANEL);
//! menu.attach(&mut host);
//!
//! // Clicking the trigger opens and right-aligns the panel under it.
//! assert_eq!(menu.on_trigger_click(&mut host), Changes::OPENED);
//! assert!(menu.is_open());
//! assert_eq!(host.position_of(PANEL), Some(Point::new(220.0, 90.0)));
//!
//! // Next turn: dismissal and reposition listeners go live.
//! for task in host.take_deferred() {
//!     menu.run_deferred(&mut host, task);
//! }
//! assert_eq!(host.listeners(ListenerKind::Click), [PANEL]);
//!
//! // A document click closes the panel, removes its listeners, and reports the change.
//! let click = HostEvent::Click { position: Point::new(900.0, 700.0) };
//! assert_eq!(menu.handle_event(&mut host, click), Some(Changes::OPENED));
//! assert!(!menu.is_open());
//! assert_eq!(host.total_listeners(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: `no_std` floating point support through `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`DropdownProps`], [`Alignment`], and [`DismissMode`].
//!
//! Diagnostics are emitted through `tracing` under the `understory_dropdown` target.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dropdown;
mod host;
mod menu;
pub mod placement;
pub mod sim;
mod subscription;
mod types;

pub use dropdown::Dropdown;
pub use host::{Deferred, EventSurface, Host, HostEvent, Layout, ListenerKind, ListenerSet};
pub use menu::DropdownMenu;
pub use subscription::Subscription;
pub use types::{Alignment, Changes, DEFAULT_BUFFER, DismissMode, DropdownProps, Generation};
