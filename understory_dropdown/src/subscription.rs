// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped ownership of a panel's global listeners.

use core::fmt::Debug;

use crate::host::{EventSurface, ListenerSet};

/// Listeners registered on a host on behalf of one panel.
///
/// Created by [`Subscription::acquire`] and consumed by [`Subscription::release`], so each
/// registration is removed exactly once. A panel holds at most one of these at a time.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Subscription leaves its listeners registered; call `release`"]
pub struct Subscription<K> {
    owner: K,
    kinds: ListenerSet,
}

impl<K: Copy + Debug> Subscription<K> {
    /// Register one listener per kind in `kinds` for `owner`.
    pub fn acquire<H>(host: &mut H, owner: K, kinds: ListenerSet) -> Self
    where
        H: EventSurface<K> + ?Sized,
    {
        for kind in kinds.kinds() {
            host.add_listener(kind, owner);
        }
        tracing::debug!(?owner, ?kinds, "listeners attached");
        Self { owner, kinds }
    }

    /// Remove every listener this subscription registered.
    pub fn release<H>(self, host: &mut H)
    where
        H: EventSurface<K> + ?Sized,
    {
        for kind in self.kinds.kinds() {
            host.remove_listener(kind, self.owner);
        }
        tracing::debug!(owner = ?self.owner, kinds = ?self.kinds, "listeners released");
    }

    /// The panel the listeners belong to.
    pub fn owner(&self) -> K {
        self.owner
    }

    /// The registered kinds.
    pub fn kinds(&self) -> ListenerSet {
        self.kinds
    }
}
