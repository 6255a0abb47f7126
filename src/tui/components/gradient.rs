//! Background gradient painting.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::theme::Gradient;

/// Left-to-right gradient (`bg-gradient-to-r`).
pub fn paint_horizontal(buf: &mut Buffer, area: Rect, gradient: Gradient) {
    let span = f32::from(area.width.saturating_sub(1).max(1));
    for dx in 0..area.width {
        let color = gradient.at(f32::from(dx) / span);
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x + dx, y)) {
                cell.set_bg(color);
            }
        }
    }
}

/// One screen row of a top-left to bottom-right gradient
/// (`bg-gradient-to-br`). `row` is the row's index within a region of
/// `rows` rows, so the gradient stays fixed to the document while scrolling.
pub fn paint_diagonal_row(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    row: usize,
    rows: usize,
    gradient: Gradient,
) {
    let down = row as f32 / rows.saturating_sub(1).max(1) as f32;
    let span = f32::from(area.width.saturating_sub(1).max(1));
    for dx in 0..area.width {
        let across = f32::from(dx) / span;
        if let Some(cell) = buf.cell_mut((area.x + dx, y)) {
            cell.set_bg(gradient.at((across + down) / 2.0));
        }
    }
}
