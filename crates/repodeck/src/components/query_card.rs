use dioxus::prelude::*;
use repodeck_core::api::{Query, QueryMode};

fn mode_label(mode: QueryMode) -> &'static str {
    match mode {
        QueryMode::Url => "GitHub Repo URL",
        QueryMode::Search => "Describe the repo you need",
    }
}

fn mode_placeholder(mode: QueryMode) -> &'static str {
    match mode {
        QueryMode::Url => "e.g., https://github.com/pallets/flask",
        QueryMode::Search => "e.g., a TypeScript socket.io boilerplate",
    }
}

/// Query card with mode selector, input, and submit button.
///
/// Switching mode swaps the label and placeholder to match the expected
/// input shape. Empty input is rejected locally via `on_invalid` without a
/// network call; URL well-formedness is not checked client-side.
#[component]
pub fn QueryCard(
    submitting: ReadOnlySignal<bool>,
    on_submit: EventHandler<Query>,
    on_invalid: EventHandler<String>,
) -> Element {
    let mut mode = use_signal(QueryMode::default);
    let mut input_value = use_signal(String::new);

    let run_submit = move || match Query::new(mode(), &input_value.read()) {
        Ok(query) => on_submit.call(query),
        Err(err) => on_invalid.call(err.to_string()),
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !submitting() {
            run_submit();
        }
    };

    rsx! {
        section { class: "rd-query-card",
            div { class: "rd-mode-row",
                label { class: "rd-mode-option",
                    input {
                        r#type: "radio",
                        name: "mode",
                        value: "url",
                        checked: mode() == QueryMode::Url,
                        onchange: move |_| mode.set(QueryMode::Url),
                    }
                    "Repo URL"
                }
                label { class: "rd-mode-option",
                    input {
                        r#type: "radio",
                        name: "mode",
                        value: "search",
                        checked: mode() == QueryMode::Search,
                        onchange: move |_| mode.set(QueryMode::Search),
                    }
                    "Search"
                }
            }

            label {
                class: "rd-input-label",
                r#for: "rd-query-input",
                {mode_label(mode())}
            }
            div { class: "rd-input-row",
                input {
                    id: "rd-query-input",
                    class: "rd-query-input",
                    r#type: "text",
                    placeholder: mode_placeholder(mode()),
                    value: "{input_value}",
                    disabled: submitting(),
                    oninput: move |evt| input_value.set(evt.value()),
                    onkeypress: handle_keypress,
                }
                button {
                    class: "rd-btn rd-btn--primary",
                    disabled: submitting(),
                    onclick: move |_| run_submit(),
                    if submitting() {
                        "Working…"
                    } else {
                        "Get Insights"
                    }
                }
            }
        }
    }
}
