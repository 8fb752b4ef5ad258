use dioxus::prelude::*;
use repodeck_core::markdown;

/// README panel rendering the markdown body.
///
/// The markdown is parsed and injected as HTML. Raw HTML embedded in the
/// README is escaped by the renderer (see `repodeck_core::markdown`), which
/// limits the injection surface to markup pulldown-cmark itself emits.
#[component]
pub fn ReadmePanel(readme: String) -> Element {
    let html = markdown::to_html(&readme);

    rsx! {
        section { class: "rd-panel rd-readme-panel",
            h2 { class: "rd-panel-title", "README" }
            article {
                class: "rd-readme-content",
                dangerous_inner_html: html,
            }
        }
    }
}
