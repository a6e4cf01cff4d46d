use dioxus::prelude::*;
use folio_view::content::skill_groups;
use folio_view::section::SectionId;

use super::icons::skill_icon;
use super::Reveal;

#[component]
pub fn Skills() -> Element {
    rsx! {
        Reveal { section: SectionId::Skills,
            div { class: "skill-groups",
                for group in skill_groups() {
                    div { key: "{group.category}", class: "skill-group",
                        h3 { class: "skill-group-title", "{group.category}" }
                        div { class: "skill-grid",
                            for skill in group.skills {
                                div { key: "{skill.name}", class: "skill-cell",
                                    {skill_icon(skill.icon)}
                                    span { class: "skill-name", "{skill.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
