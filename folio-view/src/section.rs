//! The page's named sections, in the order they are composed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section of the page, in composition order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element; also the fragment the header links to.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Heading rendered above the section body. The hero has none.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            SectionId::Home => None,
            SectionId::About => Some("About Me"),
            SectionId::Skills => Some("My Expertise"),
            SectionId::Projects => Some("Featured Work"),
            SectionId::Contact => Some("Let's Connect"),
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }

    /// Sections the header navigates to, in order. The hero is reached
    /// through the brand link instead.
    pub fn nav_sections() -> &'static [SectionId] {
        &[
            SectionId::About,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_order() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "about", "skills", "projects", "contact"]);
    }

    #[test]
    fn test_each_section_exactly_once() {
        let unique: HashSet<SectionId> = SectionId::ALL.into_iter().collect();
        assert_eq!(unique.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("pricing"), None);
    }

    #[test]
    fn test_nav_excludes_hero() {
        let nav = SectionId::nav_sections();
        assert_eq!(nav.len(), 4);
        assert!(!nav.contains(&SectionId::Home));
        assert_eq!(nav[0], SectionId::About);
        assert_eq!(nav[3], SectionId::Contact);
    }

    #[test]
    fn test_only_hero_lacks_heading() {
        for section in SectionId::ALL {
            assert_eq!(section.heading().is_none(), section == SectionId::Home);
        }
    }

    #[test]
    fn test_serde_uses_anchor_casing() {
        let json = serde_json::to_string(&SectionId::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        let back: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SectionId::Projects);
    }
}
