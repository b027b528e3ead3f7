//! Layout hints from the host environment.

/// Vertical space the host reserves below the dropdown by default.
pub const DEFAULT_RESERVE: u16 = 100;

/// Source of on-screen keyboard height, used only to size the result list.
///
/// Hosts without a soft keyboard use [`NoLayoutHint`].
pub trait LayoutHint: Send + Sync {
    /// Height currently covered by the keyboard, in host units.
    fn keyboard_height(&self) -> u16;
}

/// No keyboard ever covers the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayoutHint;

impl LayoutHint for NoLayoutHint {
    fn keyboard_height(&self) -> u16 {
        0
    }
}

/// A keyboard of constant height.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLayoutHint(pub u16);

impl LayoutHint for FixedLayoutHint {
    fn keyboard_height(&self) -> u16 {
        self.0
    }
}

/// Maximum height of the result list on a screen of `screen_height`.
pub fn list_max_height(screen_height: u16, hint: &dyn LayoutHint) -> u16 {
    list_max_height_with_reserve(screen_height, hint, DEFAULT_RESERVE)
}

/// Like [`list_max_height`] with a caller-chosen reserve.
pub fn list_max_height_with_reserve(screen_height: u16, hint: &dyn LayoutHint, reserve: u16) -> u16 {
    screen_height
        .saturating_sub(hint.keyboard_height())
        .saturating_sub(reserve)
}
