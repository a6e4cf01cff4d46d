//! Inline SVG icons. Skill icons are keyed by the catalog's [`SkillIcon`]
//! tokens; the social icons are fixed glyphs for the contact block.

use dioxus::prelude::*;
use folio_view::content::SkillIcon;

pub(super) fn skill_icon(icon: SkillIcon) -> Element {
    rsx! {
        svg {
            class: "skill-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: icon_path(icon),
            }
        }
    }
}

fn icon_path(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::MetaAds => {
            "M11 5.882V19.24a1.76 1.76 0 01-3.417.592l-2.147-6.15M18 13a3 3 0 100-6M5.436 \
             13.683A4.001 4.001 0 017 6h1.832c4.1 0 7.625-1.234 9.168-3v14c-1.543-1.766-5.067-3-9.168-3H7a3.988 \
             3.988 0 01-1.564-.317z"
        }
        SkillIcon::GoogleAds => {
            "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 \
             012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 \
             012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"
        }
        SkillIcon::Seo => "M21 21l-4.35-4.35M17 11a6 6 0 11-12 0 6 6 0 0112 0z",
        SkillIcon::Smm => {
            "M7.217 10.907a2.25 2.25 0 100 2.186m0-2.186c.18.324.283.696.283 1.093s-.103.77-.283 \
             1.093m0-2.186l9.566-5.314m-9.566 7.5l9.566 5.314m0 0a2.25 2.25 0 103.935 2.186 2.25 \
             2.25 0 00-3.935-2.186zm0-12.814a2.25 2.25 0 103.933-2.185 2.25 2.25 0 00-3.933 2.185z"
        }
        SkillIcon::VideoEditing => {
            "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 \
             002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z"
        }
        SkillIcon::React => "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        SkillIcon::Vite => "M13 10V3L4 14h7v7l9-11h-7z",
        SkillIcon::Html => "M16 18l6-6-6-6M8 6l-6 6 6 6",
        SkillIcon::Css => {
            "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zm0 0h12a2 2 0 \
             002-2v-4a2 2 0 00-2-2h-2.343M11 7.343l1.657-1.657a2 2 0 012.828 0l2.829 2.829a2 \
             2 0 010 2.828l-8.486 8.485"
        }
        SkillIcon::Js => {
            "M8 9l3 3-3 3m5 0h3M5 20h14a2 2 0 002-2V6a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"
        }
    }
}

pub(super) fn linkedin_icon() -> Element {
    rsx! {
        svg { class: "social-icon", view_box: "0 0 24 24", fill: "currentColor", "aria-hidden": "true",
            path {
                d: "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 \
                    5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 \
                    0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 \
                    1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 \
                    0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z",
            }
        }
    }
}

pub(super) fn github_icon() -> Element {
    rsx! {
        svg { class: "social-icon", view_box: "0 0 24 24", fill: "currentColor", "aria-hidden": "true",
            path {
                d: "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_ICONS: [SkillIcon; 10] = [
        SkillIcon::MetaAds,
        SkillIcon::GoogleAds,
        SkillIcon::Seo,
        SkillIcon::Smm,
        SkillIcon::VideoEditing,
        SkillIcon::React,
        SkillIcon::Vite,
        SkillIcon::Html,
        SkillIcon::Css,
        SkillIcon::Js,
    ];

    #[test]
    fn test_every_icon_has_a_distinct_path() {
        let paths: HashSet<&str> = ALL_ICONS.iter().map(|icon| icon_path(*icon)).collect();
        assert_eq!(paths.len(), ALL_ICONS.len());
        assert!(paths.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_catalog_icons_are_covered() {
        for group in folio_view::content::skill_groups() {
            for skill in group.skills {
                assert!(ALL_ICONS.contains(&skill.icon), "missing icon for {}", skill.name);
            }
        }
    }
}
