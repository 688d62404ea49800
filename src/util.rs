use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a [`DISPLAY_SIZE`][consts::DISPLAY_SIZE]-sized rectangle in the
/// center of `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `size`-sized rectangle in the center of `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [inner] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [inner] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(inner);
    inner
}
