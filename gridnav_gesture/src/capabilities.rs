// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Interaction capabilities enabled for an engine instance.
    ///
    /// Handlers for a disabled capability are no-ops.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u8 {
        /// Primary click callbacks.
        const CLICK       = 0b0000_0001;
        /// Context-menu (secondary) click callbacks.
        const RIGHT_CLICK = 0b0000_0010;
        /// Hover callbacks while no button is held.
        const HOVER       = 0b0000_0100;
        /// Drag to pan.
        const DRAG        = 0b0000_1000;
        /// Wheel and pinch zoom.
        const ZOOM        = 0b0001_0000;
        /// Follow host resize notifications.
        const RESIZE      = 0b0010_0000;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}
