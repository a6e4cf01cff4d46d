use dioxus::prelude::*;
use folio_view::section::SectionId;

use super::Reveal;

#[component]
pub fn About() -> Element {
    rsx! {
        Reveal { section: SectionId::About,
            div { class: "about-copy",
                p {
                    "With over 5 years of experience in the digital landscape, I bridge the "
                    "gap between marketing and technology. My passion lies in creating "
                    "holistic strategies that not only attract but also convert and retain "
                    "customers."
                }
                p {
                    "From fine-tuning Meta & Google Ad campaigns for maximum ROI to "
                    "developing sleek, user-friendly websites, I bring a versatile skill "
                    "set to help businesses thrive online. I'm a lifelong learner, "
                    "constantly adapting to the latest industry trends and technologies."
                }
            }
        }
    }
}
