use dioxus::prelude::*;
use folio_view::section::SectionId;

/// Landing banner. Not wrapped by the visibility detector: it is on screen
/// at load and animates in with staggered delays instead.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: SectionId::Home.anchor(), class: "hero",
            div { class: "hero-inner",
                img {
                    class: "hero-portrait",
                    src: "https://picsum.photos/seed/profile/200/200",
                    alt: "Alex Doe",
                }
                h1 { class: "hero-title fade-in-up",
                    span { class: "accent", "Digital Marketing" }
                    " & Web Expert"
                }
                p { class: "hero-tagline fade-in-up fade-delay-1",
                    "I scale businesses with data-driven marketing strategies and build "
                    "high-performance web experiences."
                }
                div { class: "hero-actions fade-in-up fade-delay-2",
                    a { class: "button button--primary", href: "#projects", "View My Work" }
                    a { class: "button button--ghost", href: "#contact", "Get In Touch" }
                }
            }
        }
    }
}
