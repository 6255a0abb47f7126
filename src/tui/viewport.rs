//! Document geometry: section regions, their refs and the scroll viewport.

use crate::section::SectionId;

/// Rows `top..top + height` of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub height: usize,
}

impl Region {
    pub const fn bottom(self) -> usize {
        self.top + self.height
    }

    /// Number of rows of this region inside the viewport.
    pub fn visible_rows(self, viewport: Viewport) -> usize {
        let start = self.top.max(viewport.offset);
        let end = self.bottom().min(viewport.bottom());
        end.saturating_sub(start)
    }

    /// Visible fraction, measured against the viewport height for regions
    /// taller than the viewport.
    pub fn intersection_ratio(self, viewport: Viewport) -> f32 {
        let basis = self.height.min(viewport.height);
        if basis == 0 {
            return 0.0;
        }
        self.visible_rows(viewport) as f32 / basis as f32
    }
}

/// Handle to a section's rendered region.
///
/// The handle itself is stable; the region is attached by the first layout
/// pass and refreshed whenever the document is laid out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRef {
    pub section: SectionId,
    region: Option<Region>,
}

impl SectionRef {
    pub const fn new(section: SectionId) -> Self {
        Self {
            section,
            region: None,
        }
    }

    pub const fn region(&self) -> Option<Region> {
        self.region
    }

    pub const fn is_attached(&self) -> bool {
        self.region.is_some()
    }
}

/// One ref per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRefs {
    refs: [SectionRef; 3],
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self {
            refs: SectionId::ALL.map(SectionRef::new),
        }
    }
}

impl SectionRefs {
    pub const fn get(&self, section: SectionId) -> &SectionRef {
        &self.refs[section.index()]
    }

    pub fn attach(&mut self, section: SectionId, region: Region) {
        self.refs[section.index()].region = Some(region);
    }

    pub fn release(&mut self) {
        for r in &mut self.refs {
            r.region = None;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionRef> {
        self.refs.iter()
    }

    /// Resolve an element identifier to its attached region.
    pub fn resolve(&self, id: &str) -> Option<(SectionId, Region)> {
        let section = SectionId::from_id(id)?;
        self.get(section).region().map(|region| (section, region))
    }
}

/// The visible window over the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
    pub content_height: usize,
}

impl Viewport {
    pub const fn bottom(self) -> usize {
        self.offset + self.height
    }

    pub const fn max_offset(self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    pub fn clamp(self, offset: usize) -> usize {
        offset.min(self.max_offset())
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = self.clamp(offset);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Update the geometry after a layout pass, keeping the offset in range.
    pub fn resize(&mut self, height: usize, content_height: usize) {
        self.height = height;
        self.content_height = content_height;
        self.offset = self.clamp(self.offset);
    }
}
