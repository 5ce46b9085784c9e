//! Static display content.
//!
//! Every record here is hard-coded and immutable; the registries are plain
//! `const` slices so renderers borrow them without allocation. Order in a
//! slice is display order.

mod contact;
mod projects;
mod site;
mod technologies;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::description::{ProjectDescription, parse_description};

pub use contact::{CONTACT_CHANNELS, CONTACT_HEADER, FOLLOW_LINKS, FORM_COPY, FormCopy};
pub use projects::{GITHUB_PROFILE, PROJECTS, PROJECTS_HEADER};
pub use site::{
    FLOATING_ICONS, FOOTER, Footer, HERO, Hero, LOGO, NAV_CTA, NAV_ITEMS, SOCIAL_LINKS,
};
pub use technologies::{EXTRA_SKILLS, TECH_CATEGORIES, TECH_HEADER};

// ── Anchors ─────────────────────────────────────────────────────────

/// In-page section targets addressable by `#fragment` links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Anchor {
    Hero,
    Technologies,
    Projects,
    Contact,
}

impl Anchor {
    /// The `#fragment` form used in hrefs.
    pub fn href(self) -> &'static str {
        match self {
            Self::Hero => "#hero",
            Self::Technologies => "#technologies",
            Self::Projects => "#projects",
            Self::Contact => "#contact",
        }
    }

    /// Parse a `#fragment` href. Unknown fragments and the bare `#`
    /// placeholder yield `None`.
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix('#')?.parse().ok()
    }
}

// ── Presentation tokens ─────────────────────────────────────────────

/// Icon identifiers. Renderers map these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Icon {
    Server,
    Layout,
    Cloud,
    Database,
    Shield,
    Zap,
    Smartphone,
    Map,
    Calendar,
    Mail,
    MapPin,
    Linkedin,
    Github,
    Code,
    ExternalLink,
    Send,
}

/// Named colour accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Accent {
    Primary,
    Blue,
    Cyan,
    Teal,
    Purple,
    Pink,
    Emerald,
    Green,
    Amber,
    Orange,
}

/// Gradient and icon colour tokens for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub gradient_from: Accent,
    pub gradient_to: Accent,
    pub icon: Accent,
}

// ── Records ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Anchor,
}

/// A labelled outbound or in-page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// The in-page target, if this link is a known `#fragment`.
    pub fn anchor(&self) -> Option<Anchor> {
        Anchor::from_href(self.href)
    }

    /// `#` alone is a placeholder with no destination.
    pub fn is_placeholder(&self) -> bool {
        self.href == "#"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    /// `mailto:`, `tel:`, `https://`, or the `#` placeholder.
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub repo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    /// Raw text; see [`Project::description`].
    pub description: &'static str,
    pub icon: Icon,
    pub technologies: &'static [&'static str],
    pub links: ProjectLinks,
    pub featured: bool,
    pub theme: ColorTheme,
}

impl Project {
    /// Summary and feature bullets parsed from the raw description.
    pub fn description(&self) -> ProjectDescription {
        parse_description(self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub theme: ColorTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraSkill {
    pub icon: Icon,
    pub label: &'static str,
    pub items: &'static str,
}

/// Eyebrow, two-tone title, and lead paragraph above a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Rendered with the gradient accent.
    pub highlight: &'static str,
    pub lead: &'static str,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn anchors_round_trip_through_href() {
        for anchor in Anchor::iter() {
            assert_eq!(Anchor::from_href(anchor.href()), Some(anchor));
        }
        assert_eq!(Anchor::from_href("#"), None);
        assert_eq!(Anchor::from_href("#about"), None);
        assert_eq!(Anchor::from_href("https://github.com/LautaroMol"), None);
    }

    #[test]
    fn nav_items_cover_every_section_in_order() {
        let targets: Vec<Anchor> = NAV_ITEMS.iter().map(|item| item.target).collect();
        assert_eq!(targets, Anchor::iter().collect::<Vec<_>>());
        assert_eq!(NAV_CTA.target, Anchor::Contact);
    }

    #[test]
    fn every_project_lists_features() {
        for project in PROJECTS {
            let parsed = project.description();
            assert!(!parsed.summary.is_empty(), "{}", project.title);
            assert!(parsed.has_features(), "{}", project.title);
            assert!(
                parsed.features.iter().all(|f| !f.contains("\\n")),
                "{}",
                project.title
            );
        }
    }

    #[test]
    fn placeholder_links_have_no_destination() {
        let location = CONTACT_CHANNELS
            .iter()
            .find(|c| c.label == "Ubicación")
            .map(|c| Link {
                label: c.label,
                href: c.href,
            });
        assert!(location.is_some_and(|l| l.is_placeholder() && l.anchor().is_none()));
    }
}
