//! Static page content.

use serde::Serialize;

/// An image the embedding environment has to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageAsset {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

/// Icon shown next to a contact fact or fun fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Mail,
    MapPin,
    Calendar,
    ExternalLink,
    Code,
    Coffee,
    Music,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Mail => "✉",
            Self::MapPin => "⌖",
            Self::Calendar => "▦",
            Self::ExternalLink => "↗",
            Self::Code => "⟨⟩",
            Self::Coffee => "☕",
            Self::Music => "♫",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub highlights: &'static [&'static str],
    pub logo: ImageAsset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Links {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
}

/// Everything the page shows apart from derived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub name: &'static str,
    pub bio: &'static str,
    pub photo: ImageAsset,
    pub contact: &'static [Fact],
    pub skills: &'static [&'static str],
    pub fun_facts: &'static [Fact],
    pub education: Education,
    pub projects: &'static [Project],
    pub project_thumbnail: ImageAsset,
    pub links: Links,
}

/// Fun fact whose text is replaced by the live coffee counter.
pub const COFFEE_FACT_INDEX: usize = 1;

pub const PORTFOLIO: Portfolio = Portfolio {
    name: "John Doe",
    bio: "I'm a passionate web developer with expertise in React, Node.js, and modern web \
          technologies. I love creating user-friendly and efficient web applications. With a \
          keen eye for design and a strong foundation in computer science, I strive to build \
          innovative solutions that make a difference.",
    photo: ImageAsset {
        src: "/placeholder.svg?height=300&width=300",
        alt: "John Doe",
        width: 300,
        height: 300,
    },
    contact: &[
        Fact {
            icon: Icon::Mail,
            text: "john.doe@example.com",
        },
        Fact {
            icon: Icon::MapPin,
            text: "Phoenix, Arizona",
        },
        Fact {
            icon: Icon::Calendar,
            text: "Available for hire",
        },
        Fact {
            icon: Icon::ExternalLink,
            text: "Portfolio: johndoe.dev",
        },
    ],
    skills: &[
        "React",
        "Node.js",
        "TypeScript",
        "Next.js",
        "GraphQL",
        "Tailwind CSS",
        "MongoDB",
        "AWS",
    ],
    fun_facts: &[
        Fact {
            icon: Icon::Code,
            text: "I love solving coding challenges",
        },
        Fact {
            icon: Icon::Coffee,
            text: "I've had some coffee today",
        },
        Fact {
            icon: Icon::Music,
            text: "I play guitar in my free time",
        },
    ],
    education: Education {
        school: "Arizona State University",
        degree: "Bachelor of Science in Computer Science",
        highlights: &[
            "Graduated with honors (Magna Cum Laude)",
            "Member of the Computer Science Student Association",
            "Participated in the ASU Innovation Challenge",
            "Completed internship at a leading tech company",
            "Senior project: AI-powered personal assistant application",
        ],
        logo: ImageAsset {
            src: "/placeholder.svg?height=300&width=300",
            alt: "Arizona State University Logo",
            width: 300,
            height: 300,
        },
    },
    projects: &[
        Project {
            title: "E-commerce Platform",
            description: "A full-stack e-commerce solution built with React, Node.js, and MongoDB.",
            link: "https://github.com/johndoe/ecommerce-platform",
        },
        Project {
            title: "Weather App",
            description: "A responsive weather application using React and integrating with a \
                          weather API.",
            link: "https://github.com/johndoe/weather-app",
        },
        Project {
            title: "Task Management System",
            description: "A collaborative task management tool built with React and Firebase.",
            link: "https://github.com/johndoe/task-management",
        },
        Project {
            title: "Portfolio Website",
            description: "A personal portfolio website showcasing my projects and skills \
                          (you're looking at it!).",
            link: "https://github.com/johndoe/portfolio",
        },
    ],
    project_thumbnail: ImageAsset {
        src: "/placeholder.svg?height=200&width=400",
        alt: "Project thumbnail",
        width: 400,
        height: 200,
    },
    links: Links {
        github: "https://github.com/johndoe",
        linkedin: "https://linkedin.com/in/johndoe",
        resume: "/path-to-your-resume.pdf",
    },
};

/// Label of the coffee fun fact for a given count.
pub fn coffee_label(count: u64) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("I've had {count} cup{plural} of coffee today")
}
