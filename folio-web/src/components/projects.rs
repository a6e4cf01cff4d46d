use dioxus::prelude::*;
use folio_view::content::{projects, Project};
use folio_view::section::SectionId;

use super::Reveal;

#[component]
pub fn Projects() -> Element {
    rsx! {
        Reveal { section: SectionId::Projects,
            div { class: "project-grid",
                for project in projects() {
                    ProjectCard { key: "{project.id}", project: *project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            img { class: "project-image", src: project.image_url, alt: project.title }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                ul { class: "tag-list",
                    for tag in project.tags {
                        li { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div { class: "project-links",
                    {project.live_url.map(|url| rsx! {
                        a {
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Live"
                        }
                    })}
                    {project.code_url.map(|url| rsx! {
                        a {
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Code"
                        }
                    })}
                }
            }
        }
    }
}
