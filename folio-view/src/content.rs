//! Hard-coded site content: the project gallery and the skills grid.
//!
//! Everything here is configuration data fixed at build time. The web crate
//! renders it; nothing mutates it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub code_url: Option<&'static str>,
}

/// Token naming one of the inline SVG icons the site ships. The web crate
/// maps tokens to markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillIcon {
    MetaAds,
    GoogleAds,
    Seo,
    Smm,
    VideoEditing,
    React,
    Vite,
    Html,
    Css,
    Js,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skill_groups() -> &'static [SkillGroup] {
    &SKILL_GROUPS
}

static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "E-commerce Growth Campaign",
        description: "Managed a $50k/month budget on Google & Meta Ads, increasing ROAS \
                      by 35% and driving a 50% YoY growth in sales for a fashion retailer.",
        image_url: "https://picsum.photos/seed/ecom/600/400",
        tags: &["Google Ads", "Meta Ads", "SEO"],
        live_url: Some("#"),
        code_url: None,
    },
    Project {
        id: 2,
        title: "SaaS Lead Generation",
        description: "Developed and executed an SMM strategy on LinkedIn and Twitter, \
                      resulting in a 200% increase in qualified leads and a 30% reduction in CPL.",
        image_url: "https://picsum.photos/seed/saas/600/400",
        tags: &["SMM", "SEO"],
        live_url: Some("#"),
        code_url: None,
    },
    Project {
        id: 3,
        title: "Brand Awareness Video Series",
        description: "Produced and edited a series of short, engaging videos for a tech \
                      startup, achieving over 2 million organic views on TikTok and Instagram.",
        image_url: "https://picsum.photos/seed/video/600/400",
        tags: &["Video Editing", "SMM"],
        live_url: Some("#"),
        code_url: None,
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        description: "Designed and built this personal portfolio using modern web \
                      technologies to showcase my skills and projects in a clean, responsive interface.",
        image_url: "https://picsum.photos/seed/portfolio/600/400",
        tags: &["Rust", "Dioxus", "WebAssembly"],
        live_url: None,
        code_url: Some("#"),
    },
];

static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        category: "Digital Marketing",
        skills: &[
            Skill { name: "Meta Ads", icon: SkillIcon::MetaAds },
            Skill { name: "Google Ads", icon: SkillIcon::GoogleAds },
            Skill { name: "SEO", icon: SkillIcon::Seo },
            Skill { name: "SMM", icon: SkillIcon::Smm },
        ],
    },
    SkillGroup {
        category: "Web Development",
        skills: &[
            Skill { name: "React", icon: SkillIcon::React },
            Skill { name: "Vite", icon: SkillIcon::Vite },
            Skill { name: "HTML5", icon: SkillIcon::Html },
            Skill { name: "CSS3", icon: SkillIcon::Css },
            Skill { name: "JavaScript", icon: SkillIcon::Js },
        ],
    },
    SkillGroup {
        category: "Creative",
        skills: &[Skill { name: "Video Editing", icon: SkillIcon::VideoEditing }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_projects_fully_populated() {
        assert_eq!(projects().len(), 4);
        for project in projects() {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(project.image_url.starts_with("https://"));
            assert!(!project.tags.is_empty());
            // Every card renders at least one outbound link.
            assert!(project.live_url.is_some() || project.code_url.is_some());
        }
    }

    #[test]
    fn test_skill_groups_non_empty() {
        assert_eq!(skill_groups().len(), 3);
        for group in skill_groups() {
            assert!(!group.category.is_empty());
            assert!(!group.skills.is_empty());
        }
    }

    #[test]
    fn test_skill_names_unique_across_groups() {
        let names: Vec<&str> = skill_groups()
            .iter()
            .flat_map(|g| g.skills.iter().map(|s| s.name))
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(projects()).unwrap();
        assert_eq!(json[0]["title"], "E-commerce Growth Campaign");
        assert_eq!(json[3]["tags"][0], "Rust");

        let json = serde_json::to_value(skill_groups()).unwrap();
        assert_eq!(json[1]["category"], "Web Development");
    }
}
