//! Section gradients and light/dark utility colors.
//!
//! Every gradient carries the utility class the page is styled with and the
//! two color stops used to paint it in the terminal.

use ratatui::style::{Color, Style};
use serde::{Serialize, Serializer};

use crate::section::SectionId;

/// An sRGB color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation, `t` clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(b) - f32::from(a)).mul_add(t, f32::from(a)).round() as u8;
        Self(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c.0, c.1, c.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2))
    }
}

/// Tailwind palette entries used by the page.
pub struct Tw;

impl Tw {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GRAY_50: Rgb = Rgb(249, 250, 251);
    pub const GRAY_100: Rgb = Rgb(243, 244, 246);
    pub const GRAY_200: Rgb = Rgb(229, 231, 235);
    pub const GRAY_300: Rgb = Rgb(209, 213, 219);
    pub const GRAY_600: Rgb = Rgb(75, 85, 99);
    pub const GRAY_700: Rgb = Rgb(55, 65, 81);
    pub const GRAY_800: Rgb = Rgb(31, 41, 55);
    pub const GRAY_900: Rgb = Rgb(17, 24, 39);
    pub const BLUE_100: Rgb = Rgb(219, 234, 254);
    pub const BLUE_400: Rgb = Rgb(96, 165, 250);
    pub const BLUE_500: Rgb = Rgb(59, 130, 246);
    pub const BLUE_600: Rgb = Rgb(37, 99, 235);
    pub const PURPLE_500: Rgb = Rgb(168, 85, 247);
    pub const RED_600: Rgb = Rgb(220, 38, 38);
    pub const RED_800: Rgb = Rgb(153, 27, 27);
    pub const GREEN_400: Rgb = Rgb(74, 222, 128);
    pub const GREEN_500: Rgb = Rgb(34, 197, 94);
    pub const TEAL_300: Rgb = Rgb(94, 234, 212);
    pub const TEAL_400: Rgb = Rgb(45, 212, 191);
    pub const TEAL_500: Rgb = Rgb(20, 184, 166);
    pub const TEAL_600: Rgb = Rgb(13, 148, 136);
    pub const TEAL_800: Rgb = Rgb(17, 94, 89);
    pub const YELLOW_300: Rgb = Rgb(253, 224, 71);
    pub const INDIGO_600: Rgb = Rgb(79, 70, 229);
    pub const ASU_GOLD: Rgb = Rgb(255, 198, 39);
}

/// A two-stop background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub class: &'static str,
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    /// Color at position `t` along the gradient.
    #[must_use]
    pub fn at(self, t: f32) -> Color {
        self.from.lerp(self.to, t).into()
    }
}

const DARK_HEADER: Gradient = Gradient {
    class: "bg-gradient-to-r from-gray-900 to-gray-800",
    from: Tw::GRAY_900,
    to: Tw::GRAY_800,
};

const DARK_SECTION: Gradient = Gradient {
    class: "bg-gradient-to-br from-gray-900 to-gray-800",
    from: Tw::GRAY_900,
    to: Tw::GRAY_800,
};

/// Gradient of the sticky header while `section` is active.
pub const fn header_theme(section: SectionId, dark: bool) -> Gradient {
    if dark {
        return DARK_HEADER;
    }
    match section {
        SectionId::About => Gradient {
            class: "bg-gradient-to-r from-blue-500 to-purple-500",
            from: Tw::BLUE_500,
            to: Tw::PURPLE_500,
        },
        SectionId::Education => Gradient {
            class: "bg-gradient-to-r from-red-800 to-red-600",
            from: Tw::RED_800,
            to: Tw::RED_600,
        },
        SectionId::Projects => Gradient {
            class: "bg-gradient-to-r from-green-500 to-teal-500",
            from: Tw::GREEN_500,
            to: Tw::TEAL_500,
        },
    }
}

/// Background gradient of a section body.
pub const fn section_theme(section: SectionId, dark: bool) -> Gradient {
    if dark {
        return DARK_SECTION;
    }
    match section {
        SectionId::About => Gradient {
            class: "bg-gradient-to-br from-blue-400 to-purple-500",
            from: Tw::BLUE_400,
            to: Tw::PURPLE_500,
        },
        SectionId::Education => Gradient {
            class: "bg-gradient-to-br from-red-800 to-red-600",
            from: Tw::RED_800,
            to: Tw::RED_600,
        },
        SectionId::Projects => Gradient {
            class: "bg-gradient-to-br from-green-400 to-teal-500",
            from: Tw::GREEN_400,
            to: Tw::TEAL_500,
        },
    }
}

/// One row of the exported theme table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeRow {
    pub section: SectionId,
    pub light_header: Gradient,
    pub dark_header: Gradient,
    pub light_body: Gradient,
    pub dark_body: Gradient,
}

/// The complete section × mode table.
pub fn table() -> Vec<ThemeRow> {
    SectionId::ALL
        .into_iter()
        .map(|section| ThemeRow {
            section,
            light_header: header_theme(section, false),
            dark_header: header_theme(section, true),
            light_body: section_theme(section, false),
            dark_body: section_theme(section, true),
        })
        .collect()
}

/// A utility class with the color it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utility {
    pub class: &'static str,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl Utility {
    const fn fg(class: &'static str, fg: Rgb) -> Self {
        Self {
            class,
            fg: Some(fg),
            bg: None,
        }
    }

    const fn fg_bg(class: &'static str, fg: Rgb, bg: Rgb) -> Self {
        Self {
            class,
            fg: Some(fg),
            bg: Some(bg),
        }
    }

    pub fn style(self) -> Style {
        let style = Style::new();
        let style = self.fg.map_or(style, |c| style.fg(c.into()));
        self.bg.map_or(style, |c| style.bg(c.into()))
    }
}

/// Light or dark variants of the non-gradient utilities on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: Utility,
    pub about_text: Utility,
    pub skill_badge: Utility,
    pub fact_card: Utility,
    pub card: Utility,
    pub card_muted: Utility,
    pub project_title: Utility,
    pub project_link: Utility,
    pub accent: Utility,
    pub active_tab: Utility,
    pub header_text: Utility,
    pub toggle: Utility,
    pub resume_button: Utility,
}

const LIGHT: Palette = Palette {
    page: Utility::fg_bg("bg-gray-50", Tw::GRAY_900, Tw::GRAY_50),
    about_text: Utility::fg("text-white", Tw::WHITE),
    skill_badge: Utility::fg_bg("bg-white text-blue-600", Tw::BLUE_600, Tw::WHITE),
    fact_card: Utility::fg_bg("bg-white bg-opacity-20", Tw::WHITE, Tw::BLUE_400),
    card: Utility::fg_bg("bg-white text-gray-900", Tw::GRAY_900, Tw::WHITE),
    card_muted: Utility::fg_bg("text-gray-700", Tw::GRAY_700, Tw::WHITE),
    project_title: Utility::fg_bg("text-teal-600", Tw::TEAL_600, Tw::WHITE),
    project_link: Utility::fg_bg("text-teal-600 hover:text-teal-800", Tw::TEAL_600, Tw::WHITE),
    accent: Utility::fg_bg("text-[#FFC627]", Tw::ASU_GOLD, Tw::WHITE),
    active_tab: Utility::fg("text-yellow-300", Tw::YELLOW_300),
    header_text: Utility::fg("text-white", Tw::WHITE),
    toggle: Utility::fg_bg("bg-gray-200 text-gray-800", Tw::GRAY_800, Tw::GRAY_200),
    resume_button: Utility::fg_bg("text-white bg-indigo-600", Tw::WHITE, Tw::INDIGO_600),
};

const DARK: Palette = Palette {
    page: Utility::fg_bg("dark bg-gray-900", Tw::GRAY_100, Tw::GRAY_900),
    about_text: Utility::fg("text-gray-100", Tw::GRAY_100),
    skill_badge: Utility::fg_bg("bg-gray-700 text-gray-100", Tw::GRAY_100, Tw::GRAY_700),
    fact_card: Utility::fg_bg("bg-gray-800", Tw::GRAY_100, Tw::GRAY_800),
    card: Utility::fg_bg("bg-gray-800 text-gray-100", Tw::GRAY_100, Tw::GRAY_800),
    card_muted: Utility::fg_bg("text-gray-300", Tw::GRAY_300, Tw::GRAY_800),
    project_title: Utility::fg_bg("text-teal-400", Tw::TEAL_400, Tw::GRAY_800),
    project_link: Utility::fg_bg("text-teal-400 hover:text-teal-300", Tw::TEAL_400, Tw::GRAY_800),
    accent: Utility::fg_bg("text-[#FFC627]", Tw::ASU_GOLD, Tw::GRAY_800),
    active_tab: Utility::fg("text-yellow-300", Tw::YELLOW_300),
    header_text: Utility::fg("text-white", Tw::WHITE),
    toggle: Utility::fg_bg("dark:bg-gray-700 dark:text-gray-200", Tw::GRAY_200, Tw::GRAY_700),
    resume_button: Utility::fg_bg("text-white bg-indigo-600", Tw::WHITE, Tw::INDIGO_600),
};

pub const fn palette(dark: bool) -> Palette {
    if dark {
        DARK
    } else {
        LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_headers_follow_the_section() {
        assert_eq!(
            header_theme(SectionId::About, false).class,
            "bg-gradient-to-r from-blue-500 to-purple-500"
        );
        assert_eq!(
            header_theme(SectionId::Education, false).class,
            "bg-gradient-to-r from-red-800 to-red-600"
        );
        assert_eq!(
            header_theme(SectionId::Projects, false).class,
            "bg-gradient-to-r from-green-500 to-teal-500"
        );
    }

    #[test]
    fn dark_mode_is_gray_everywhere() {
        for section in SectionId::ALL {
            assert_eq!(header_theme(section, true), DARK_HEADER);
            assert_eq!(section_theme(section, true), DARK_SECTION);
        }
    }

    #[test]
    fn light_bodies_use_lighter_stops_where_the_page_does() {
        assert_eq!(section_theme(SectionId::About, false).from, Tw::BLUE_400);
        assert_eq!(section_theme(SectionId::Education, false).from, Tw::RED_800);
        assert_eq!(section_theme(SectionId::Projects, false).from, Tw::GREEN_400);
    }

    #[test]
    fn lerp_hits_both_ends() {
        let g = section_theme(SectionId::Projects, false);
        assert_eq!(g.at(0.0), Color::from(Tw::GREEN_400));
        assert_eq!(g.at(1.0), Color::from(Tw::TEAL_500));
        assert_eq!(g.at(7.0), Color::from(Tw::TEAL_500));
        assert_eq!(Rgb(0, 0, 0).lerp(Rgb(200, 100, 50), 0.5), Rgb(100, 50, 25));
    }

    #[test]
    fn table_serializes_hex_stops() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(json[0]["section"], "about");
        assert_eq!(json[2]["light_header"]["from"], "#22c55e");
        assert_eq!(json[1]["dark_body"]["class"], DARK_SECTION.class);
    }

    #[test]
    fn palettes_switch_text_and_background() {
        assert_eq!(palette(false).about_text.class, "text-white");
        assert_eq!(palette(true).about_text.class, "text-gray-100");
        assert_eq!(palette(false).page.class, "bg-gray-50");
        assert_eq!(palette(true).page.class, "dark bg-gray-900");
    }
}
