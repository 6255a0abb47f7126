//! Layout of the scrolling page as a list of rows.
//!
//! Every section is at least one viewport tall and its content is centered
//! vertically inside that height.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::viewport::Region;
use crate::{
    content::{coffee_label, Fact, ImageAsset, COFFEE_FACT_INDEX, PORTFOLIO},
    section::SectionId,
    state::ViewState,
    theme::Palette,
};

/// Horizontal padding around the content column.
pub const GUTTER: u16 = 2;
/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Something that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A link, either `#section` or an external location.
    Link(&'static str),
    ToggleDarkMode,
    Coffee,
}

/// Background fill of a card row, in columns relative to the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub width: u16,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct DocRow {
    pub section: SectionId,
    pub line: Line<'static>,
    pub fill: Option<Fill>,
    pub target: Option<ClickTarget>,
}

#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<DocRow>,
    regions: [Region; 3],
    content_width: u16,
}

impl Document {
    /// Lay out the page for a terminal `width`, with every section at least
    /// `min_section_height` rows tall.
    pub fn build(state: &ViewState, width: u16, min_section_height: usize) -> Self {
        let content_width = width
            .saturating_sub(GUTTER * 2)
            .clamp(1, MAX_CONTENT_WIDTH);
        let palette = state.palette();

        let mut rows = Vec::new();
        let mut regions = [Region { top: 0, height: 0 }; 3];
        for section in SectionId::ALL {
            let mut builder = SectionBuilder::new(section, content_width, palette);
            match section {
                SectionId::About => about(&mut builder, state.coffee_count),
                SectionId::Education => education(&mut builder),
                SectionId::Projects => projects(&mut builder),
            }
            let body = builder.finish(min_section_height);
            regions[section.index()] = Region {
                top: rows.len(),
                height: body.len(),
            };
            rows.extend(body);
        }

        Self {
            rows,
            regions,
            content_width,
        }
    }

    pub fn rows(&self) -> &[DocRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub const fn region(&self, section: SectionId) -> Region {
        self.regions[section.index()]
    }

    pub const fn content_width(&self) -> u16 {
        self.content_width
    }

    /// Row index of the first row with the given target.
    pub fn find_target(&self, target: ClickTarget) -> Option<usize> {
        self.rows.iter().position(|r| r.target == Some(target))
    }
}

struct SectionBuilder {
    section: SectionId,
    width: u16,
    palette: Palette,
    rows: Vec<DocRow>,
}

impl SectionBuilder {
    const fn new(section: SectionId, width: u16, palette: Palette) -> Self {
        Self {
            section,
            width,
            palette,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, line: Line<'static>, fill: Option<Fill>, target: Option<ClickTarget>) {
        self.rows.push(DocRow {
            section: self.section,
            line,
            fill,
            target,
        });
    }

    fn line(&mut self, line: Line<'static>) {
        self.push(line, None, None);
    }

    fn blank(&mut self) {
        self.line(Line::default());
    }

    fn heading(&mut self, text: &'static str, style: Style) {
        self.line(Line::styled(text, style.add_modifier(Modifier::BOLD)));
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for chunk in wrap(text, usize::from(self.width)) {
            self.line(Line::styled(chunk, style));
        }
    }

    fn card_fill(&self, bg: Option<Color>) -> Option<Fill> {
        bg.map(|color| Fill {
            width: self.width,
            color,
        })
    }

    /// A row inside a card with a solid background.
    fn card_line(&mut self, line: Line<'static>, bg: Option<Color>, target: Option<ClickTarget>) {
        let fill = self.card_fill(bg);
        self.push(line, fill, target);
    }

    fn card_paragraph(&mut self, text: &str, style: Style, indent: &str) {
        let width = usize::from(self.width).saturating_sub(indent.chars().count() + 2);
        for chunk in wrap(text, width) {
            let line = Line::styled(format!(" {indent}{chunk}"), style);
            self.card_line(line, style.bg, None);
        }
    }

    /// Pad to `min_height` rows, centering the content.
    fn finish(mut self, min_height: usize) -> Vec<DocRow> {
        let missing = min_height.saturating_sub(self.rows.len());
        let top = missing / 2;
        let padding = |section| DocRow {
            section,
            line: Line::default(),
            fill: None,
            target: None,
        };
        let mut rows: Vec<DocRow> = (0..top).map(|_| padding(self.section)).collect();
        rows.append(&mut self.rows);
        rows.extend((0..missing - top).map(|_| padding(self.section)));
        rows
    }
}

fn about(b: &mut SectionBuilder, coffee_count: u64) {
    let text = b.palette.about_text.style();

    b.blank();
    for line in placeholder(PORTFOLIO.photo, 24, text) {
        b.line(line);
    }
    b.blank();
    b.heading("About Me", text);
    b.blank();
    b.paragraph(PORTFOLIO.bio, text);
    b.blank();
    for fact in PORTFOLIO.contact {
        b.line(fact_line(fact, fact.text.to_string(), text));
    }

    b.blank();
    b.heading("Skills", text);
    b.blank();
    for line in badges(PORTFOLIO.skills, usize::from(b.width), b.palette.skill_badge.style()) {
        b.line(line);
    }

    b.blank();
    b.heading("Fun Facts", text);
    b.blank();
    let card = b.palette.fact_card.style();
    for (i, fact) in PORTFOLIO.fun_facts.iter().enumerate() {
        if i == COFFEE_FACT_INDEX {
            let line = fact_line(fact, coffee_label(coffee_count), card);
            b.push(line, None, Some(ClickTarget::Coffee));
        } else {
            b.line(fact_line(fact, fact.text.to_string(), card));
        }
    }
    b.blank();
}

fn education(b: &mut SectionBuilder) {
    let card = b.palette.card.style();
    let muted = b.palette.card_muted.style();
    let accent = b.palette.accent.style();
    let edu = PORTFOLIO.education;

    b.card_line(Line::default(), card.bg, None);
    b.card_line(
        Line::styled(" Education", accent.add_modifier(Modifier::BOLD)),
        card.bg,
        None,
    );
    b.card_line(Line::default(), card.bg, None);
    b.card_line(
        Line::styled(format!(" {}", edu.school), accent.add_modifier(Modifier::BOLD)),
        card.bg,
        None,
    );
    b.card_paragraph(edu.degree, muted, "");
    b.card_line(Line::default(), card.bg, None);
    for highlight in edu.highlights {
        b.card_paragraph(highlight, muted, "• ");
    }
    b.card_line(Line::default(), card.bg, None);
    for line in placeholder(edu.logo, 34, card) {
        let mut padded = vec![Span::styled(" ", card)];
        padded.extend(line.spans);
        b.card_line(Line::from(padded), card.bg, None);
    }
    b.card_line(Line::default(), card.bg, None);
}

fn projects(b: &mut SectionBuilder) {
    let card = b.palette.card.style();
    let muted = b.palette.card_muted.style();
    let title = b.palette.project_title.style();
    let link = b.palette.project_link.style();
    let thumb_width = usize::from(b.width).saturating_sub(2).min(40);

    b.blank();
    b.heading("Projects", Style::new().fg(Color::White));
    b.blank();
    for project in PORTFOLIO.projects {
        b.card_line(Line::default(), card.bg, None);
        for line in placeholder(PORTFOLIO.project_thumbnail, thumb_width, card) {
            let mut padded = vec![Span::styled(" ", card)];
            padded.extend(line.spans);
            b.card_line(Line::from(padded), card.bg, None);
        }
        b.card_line(
            Line::styled(format!(" {}", project.title), title.add_modifier(Modifier::BOLD)),
            card.bg,
            None,
        );
        b.card_paragraph(project.description, muted, "");
        b.card_line(
            Line::styled(" View Project ↗", link.add_modifier(Modifier::UNDERLINED)),
            card.bg,
            Some(ClickTarget::Link(project.link)),
        );
        b.card_line(Line::default(), card.bg, None);
        b.blank();
    }
}

fn fact_line(fact: &Fact, text: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {} ", fact.icon.glyph()), style),
        Span::styled(format!("{text} "), style),
    ])
}

/// Skill badges, wrapped onto as many rows as needed.
fn badges(items: &[&'static str], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for item in items {
        let badge = format!(" {item} ");
        let len = badge.chars().count();
        if used > 0 && used + 1 + len > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(badge, style));
        used += len;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// A labelled frame standing in for an image the environment supplies.
fn placeholder(asset: ImageAsset, width: usize, style: Style) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2).max(1);
    let center = |text: &str| {
        let text: String = text.chars().take(inner).collect();
        let pad = inner - text.chars().count();
        let left = pad / 2;
        format!("│{}{text}{}│", " ".repeat(left), " ".repeat(pad - left))
    };
    let dims = format!("{}×{}", asset.width, asset.height);
    [
        format!("╭{}╮", "─".repeat(inner)),
        center(asset.alt),
        center(&dims),
        format!("╰{}╯", "─".repeat(inner)),
    ]
    .into_iter()
    .map(|row| Line::styled(row, style))
    .collect()
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        if used > 0 && used + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if used > 0 {
            current.push(' ');
            used += 1;
        }
        used += word.len();
        current.extend(word);
    }
    if used > 0 {
        lines.push(current);
    }
    lines
}
