use dioxus::prelude::*;
use folio_view::section::SectionId;

use super::icons::{github_icon, linkedin_icon};
use super::Reveal;

#[component]
pub fn Contact() -> Element {
    rsx! {
        Reveal { section: SectionId::Contact,
            div { class: "contact",
                p { class: "contact-copy",
                    "I'm currently available for freelance projects and full-time "
                    "opportunities. Feel free to reach out!"
                }
                a {
                    class: "contact-email",
                    href: "mailto:alex.doe@example.com",
                    "alex.doe@example.com"
                }
                div { class: "contact-social",
                    a { href: "#", aria_label: "LinkedIn", {linkedin_icon()} }
                    a { href: "#", aria_label: "GitHub", {github_icon()} }
                }
            }
        }
    }
}
