//! The scrolling main content.

use ratatui::{layout::Rect, Frame};

use super::{gradient::paint_diagonal_row, ClickRegion, Component};
use crate::{state::ViewState, tui::document::Document};

/// Input for the page: the laid-out document and where it is scrolled to.
pub struct PageInput {
    pub document: Document,
    pub offset: usize,
    pub state: ViewState,
}

#[derive(Default)]
pub struct Page {
    input: Option<PageInput>,
    click_regions: Vec<ClickRegion>,
}

impl Component for Page {
    type Input = PageInput;

    fn update(&mut self, input: Self::Input) {
        self.input = Some(input);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.click_regions.clear();
        let Some(input) = &self.input else {
            return;
        };
        let doc = &input.document;
        let content_width = doc.content_width().min(area.width);
        let content_x = area.x + (area.width - content_width) / 2;
        let content = Rect::new(content_x, area.y, content_width, area.height);

        let page_style = input.state.palette().page.style();
        let buf = frame.buffer_mut();
        buf.set_style(area, page_style);

        let visible = doc.rows().iter().enumerate().skip(input.offset);
        for (screen_row, (doc_row, row)) in (0..area.height).zip(visible) {
            let y = area.y + screen_row;
            let region = doc.region(row.section);
            paint_diagonal_row(
                buf,
                Rect::new(area.x, y, area.width, 1),
                y,
                doc_row - region.top,
                region.height,
                input.state.section_theme(row.section),
            );

            if let Some(fill) = row.fill {
                let fill_area = Rect::new(content_x, y, fill.width.min(content_width), 1);
                for x in fill_area.left()..fill_area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(fill.color);
                    }
                }
            }

            buf.set_line(content_x, y, &row.line, content_width);

            if let Some(target) = row.target {
                self.click_regions.push(ClickRegion {
                    area: Rect::new(content.x, y, content.width, 1),
                    target,
                });
            }
        }
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }
}
