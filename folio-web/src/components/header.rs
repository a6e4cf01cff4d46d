use dioxus::prelude::*;
use folio_view::section::SectionId;

use crate::hooks::use_at_top;

/// Fixed page header. Transparent over the hero; once the page is scrolled
/// away from the top it picks up a solid, blurred backdrop.
#[component]
pub fn Header() -> Element {
    let at_top = use_at_top();

    rsx! {
        header { class: header_class(at_top()),
            div { class: "header-inner",
                a { class: "brand", href: "#home", "Alex Doe" }
                nav { class: "header-nav",
                    ul {
                        for section in SectionId::nav_sections() {
                            li { key: "{section.anchor()}",
                                a { href: "#{section.anchor()}", "{section.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_class(at_top: bool) -> &'static str {
    if at_top {
        "site-header"
    } else {
        "site-header site-header--scrolled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class_follows_scroll_state() {
        assert_eq!(header_class(true), "site-header");
        assert_eq!(header_class(false), "site-header site-header--scrolled");
    }
}
