//! The three page sections and their in-page anchors.

use serde::Serialize;

/// Identifier of a page section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    About,
    Education,
    Projects,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [Self; 3] = [Self::About, Self::Education, Self::Projects];

    /// Element identifier, as used in `#id` anchors.
    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Projects => "projects",
        }
    }

    /// In-page anchor pointing at this section.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "#about",
            Self::Education => "#education",
            Self::Projects => "#projects",
        }
    }

    /// Label shown in the navigation bar.
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Education => "Education",
            Self::Projects => "Projects",
        }
    }

    /// Position in document order.
    pub const fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Education => 1,
            Self::Projects => 2,
        }
    }

    /// Resolve an element identifier (without `#`).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Resolve an anchor target such as `#projects`.
    pub fn from_anchor(href: &str) -> Option<Self> {
        href.strip_prefix('#').and_then(Self::from_id)
    }

    pub const fn next(self) -> Self {
        match self {
            Self::About => Self::Education,
            Self::Education => Self::Projects,
            Self::Projects => Self::About,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::About => Self::Projects,
            Self::Education => Self::About,
            Self::Projects => Self::Education,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_to_their_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
    }

    #[test]
    fn unknown_or_bare_ids_do_not_resolve() {
        assert_eq!(SectionId::from_anchor("#contact"), None);
        assert_eq!(SectionId::from_anchor("about"), None);
        assert_eq!(SectionId::from_anchor("#"), None);
    }

    #[test]
    fn cycling_visits_every_section() {
        let mut section = SectionId::default();
        for expected in [SectionId::Education, SectionId::Projects, SectionId::About] {
            section = section.next();
            assert_eq!(section, expected);
        }
        assert_eq!(SectionId::About.prev(), SectionId::Projects);
    }
}
