use dioxus::prelude::*;

mod components;
mod hooks;
mod platform;

use components::{About, Contact, Footer, Header, Hero, Projects, Skills};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "page",
            Header {}
            main { class: "page-main",
                Hero {}
                About {}
                div { class: "section-divider" }
                Skills {}
                div { class: "section-divider" }
                Projects {}
                div { class: "section-divider" }
                Contact {}
            }
            Footer {}
        }
    }
}
