/// A lightweight snapshot of the viewport geometry and scroll position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// This is useful when a UI layer rebuilds the list (for example after its data source is
/// swapped) and wants the new list to open where the old one was.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub height: u32,
    pub padding: u32,
    pub scroll_offset: u64,
}
