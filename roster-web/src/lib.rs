//! roster-web - Student registration web app

pub mod pages;

use dioxus::prelude::*;
use pages::Registration;
use roster_common::RosterConfig;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(RosterConfig::default);

    rsx! {
        document::Title { "Student Registration" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app", Registration {} }
    }
}
