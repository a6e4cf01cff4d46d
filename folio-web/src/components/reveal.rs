use dioxus::prelude::*;
use folio_view::section::SectionId;
use folio_view::visibility::IntersectionThreshold;

use crate::hooks::use_on_screen;

/// Section shell that fades its body in the first time the section is
/// scrolled into view. Each instance observes its own region, so sections
/// animate independently, in whatever order they enter the viewport.
#[component]
pub fn Reveal(section: SectionId, children: Element) -> Element {
    let visible = use_on_screen(section, IntersectionThreshold::default());

    rsx! {
        section { id: section.anchor(), class: "section",
            div { class: reveal_class(visible()),
                {section.heading().map(|heading| rsx! {
                    h2 { class: "section-heading", "{heading}" }
                })}
                {children}
            }
        }
    }
}

fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal reveal--shown"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_pair() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal reveal--shown");
    }
}
