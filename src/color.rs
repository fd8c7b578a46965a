//! Shared component types used by every color model.

use bitflags::bitflags;

/// A 64-bit floating point value that all float components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine these components with `other`, component by component.
    pub fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }
}

bitflags! {
    /// Flags marking the channels that were saturated when a linear light
    /// color was gamma encoded back into bytes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the red channel was outside of `[0, 1]`.
        const RED_CLIPPED = 1 << 0;
        /// Set when the green channel was outside of `[0, 1]`.
        const GREEN_CLIPPED = 1 << 1;
        /// Set when the blue channel was outside of `[0, 1]`.
        const BLUE_CLIPPED = 1 << 2;
    }
}
