use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::Dashboard;
use crate::config::DashboardConfig;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // Everything below reads these through context
    let config = use_context_provider(DashboardConfig::from_env);
    use_context_provider(|| ApiClient::from_config(&config));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "Household Dashboard" }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        Dashboard {}
    }
}
