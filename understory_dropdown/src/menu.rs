// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trigger element paired with a dropdown panel.

use core::fmt::Debug;

use crate::dropdown::Dropdown;
use crate::host::{Deferred, Host, HostEvent};
use crate::types::{Alignment, Changes, DropdownProps};

/// A trigger that toggles a [`Dropdown`] anchored to itself.
///
/// The panel owns the open state. [`DropdownMenu::is_open`] reads it, so styling the trigger
/// from that query cannot drift from the panel.
#[derive(Debug)]
pub struct DropdownMenu<K> {
    trigger: K,
    dropdown: Dropdown<K>,
}

impl<K: Copy + PartialEq + Debug> DropdownMenu<K> {
    /// Create a menu with default properties (right alignment).
    pub fn new(trigger: K, panel: K) -> Self {
        Self::with_props(trigger, panel, DropdownProps::default())
    }

    /// Create a menu whose panel uses `props`.
    pub fn with_props(trigger: K, panel: K, props: DropdownProps) -> Self {
        Self {
            trigger,
            dropdown: Dropdown::with_props(panel, props),
        }
    }

    /// The trigger element.
    pub fn trigger(&self) -> K {
        self.trigger
    }

    /// The panel.
    pub fn dropdown(&self) -> &Dropdown<K> {
        &self.dropdown
    }

    /// Mutable access to the panel.
    pub fn dropdown_mut(&mut self) -> &mut Dropdown<K> {
        &mut self.dropdown
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    /// Alignment passed through to the panel.
    pub fn alignment(&self) -> Alignment {
        self.dropdown.alignment()
    }

    /// Set the panel alignment. Applied on the panel's next update.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.dropdown.set_alignment(alignment);
    }

    /// Anchor the panel to the trigger and connect it to `host`.
    pub fn attach<H>(&mut self, host: &mut H) -> Changes
    where
        H: Host<K> + ?Sized,
    {
        self.dropdown.set_target(Some(self.trigger));
        self.dropdown.attach(host)
    }

    /// Disconnect the panel from `host`.
    pub fn detach<H>(&mut self, host: &mut H)
    where
        H: Host<K> + ?Sized,
    {
        self.dropdown.detach(host);
    }

    /// Handle a click on the trigger: toggle the panel and apply the change.
    ///
    /// Returns the changes applied, always including [`Changes::OPENED`]. Read the new
    /// state with [`DropdownMenu::is_open`].
    pub fn on_trigger_click<H>(&mut self, host: &mut H) -> Changes
    where
        H: Host<K> + ?Sized,
    {
        self.dropdown.toggle();
        self.dropdown.update(host)
    }

    /// Forward a global event to the panel. See [`Dropdown::handle_event`].
    pub fn handle_event<H>(&mut self, host: &mut H, event: HostEvent) -> Option<Changes>
    where
        H: Host<K> + ?Sized,
    {
        self.dropdown.handle_event(host, event)
    }

    /// Forward a deferred task to the panel.
    pub fn run_deferred<H>(&mut self, host: &mut H, task: Deferred<K>) -> bool
    where
        H: Host<K> + ?Sized,
    {
        self.dropdown.run_deferred(host, task)
    }
}
