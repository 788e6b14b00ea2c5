// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observed properties of a dropdown: alignment, dismissal policy, configuration, and change sets.

/// Default distance kept between the panel and the viewport edges, and between the
/// anchor's bottom edge and the panel.
pub const DEFAULT_BUFFER: f64 = 10.0;

/// Horizontal placement of the panel relative to its anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Alignment {
    /// Panel's left edge lines up with the anchor's left edge.
    Left,
    /// Panel's right edge lines up with the anchor's right edge.
    #[default]
    Right,
    /// Panel is centered under the anchor.
    Center,
}

impl Alignment {
    /// Attribute value used when reflecting this alignment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    /// Parse an attribute value.
    ///
    /// This never fails: `"right"` and `"center"` select their variants and any other
    /// value (including `"left"`) selects [`Alignment::Left`].
    pub fn from_attr(value: &str) -> Self {
        match value {
            "right" => Self::Right,
            "center" => Self::Center,
            _ => Self::Left,
        }
    }
}

/// What a document click does to an open panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DismissMode {
    /// Every document click closes the panel, including clicks on the panel or its anchor.
    #[default]
    AnyClick,
    /// Clicks inside the panel's or the anchor's bounding rectangle are ignored.
    Outside,
}

/// Configuration for a dropdown panel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DropdownProps {
    /// Horizontal placement relative to the anchor.
    pub alignment: Alignment,
    /// Minimum distance from the viewport edges, in the host's length units.
    ///
    /// Negative values are clamped to `0.0` when applied.
    pub buffer: f64,
    /// Dismissal policy for document clicks while open.
    pub dismiss: DismissMode,
}

impl Default for DropdownProps {
    fn default() -> Self {
        Self {
            alignment: Alignment::Right,
            buffer: DEFAULT_BUFFER,
            dismiss: DismissMode::AnyClick,
        }
    }
}

bitflags::bitflags! {
    /// Set of observed properties changed since the last update.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// `opened` flipped.
        const OPENED    = 0b0000_0001;
        /// `alignment` changed.
        const ALIGNMENT = 0b0000_0010;
        /// `buffer` changed.
        const BUFFER    = 0b0000_0100;
        /// `target` changed.
        const TARGET    = 0b0000_1000;
    }
}

impl Default for Changes {
    fn default() -> Self {
        Self::empty()
    }
}

impl Changes {
    /// Changes that move the panel but do not open or close it.
    pub const GEOMETRY: Self = Self::ALIGNMENT.union(Self::BUFFER).union(Self::TARGET);
}

/// Open/close cycle counter.
///
/// Bumped on every entry into the open state and on every teardown, so a deferred task
/// carrying an older value can be recognized as stale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// The raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Sanitize a buffer value: negative and NaN become `0.0`.
pub(crate) fn sanitize_buffer(buffer: f64) -> f64 {
    debug_assert!(!buffer.is_nan(), "dropdown buffer must not be NaN");
    if buffer.is_nan() || buffer < 0.0 {
        0.0
    } else {
        buffer
    }
}
