use dioxus::prelude::*;
use repodeck_core::api::RepoMetadata;

use crate::utils::formatting::format_bytes;

fn count_or_na(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Repository metadata panel.
///
/// Missing scalar fields fall back to "N/A"; empty language/topic
/// collections render nothing. The pill rows are rebuilt from the metadata on
/// every render.
#[component]
pub fn RepoPanel(repo: RepoMetadata) -> Element {
    let name = repo.display_name().to_string();
    let description = repo
        .description
        .clone()
        .unwrap_or_else(|| "N/A".to_string());
    let stars = count_or_na(repo.stargazers_count);
    let forks = count_or_na(repo.forks_count);
    let issues = count_or_na(repo.open_issues_count);
    let license = repo.license.clone().unwrap_or_else(|| "N/A".to_string());

    let language_pills: Vec<(String, String)> = repo
        .languages
        .iter()
        .map(|(language, bytes)| (language.clone(), format_bytes(*bytes)))
        .collect();

    rsx! {
        section { class: "rd-panel rd-repo-panel",
            h2 { class: "rd-panel-title", "Repository" }

            div { class: "rd-repo-meta",
                div {
                    strong { "Name: " }
                    "{name}"
                }
                div {
                    strong { "Description: " }
                    "{description}"
                }
                div {
                    strong { "Stars: " }
                    "{stars}"
                    span { class: "rd-meta-dot", "•" }
                    strong { "Forks: " }
                    "{forks}"
                    span { class: "rd-meta-dot", "•" }
                    strong { "Issues: " }
                    "{issues}"
                }
                {repo.html_url.as_ref().map(|url| rsx! {
                    div {
                        strong { "URL: " }
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener",
                            "{url}"
                        }
                    }
                })}
                div {
                    strong { "License: " }
                    "{license}"
                }
            }

            if !language_pills.is_empty() {
                div { class: "rd-pill-row",
                    for (language, size) in language_pills.iter() {
                        span { class: "rd-pill", key: "{language}",
                            "{language} ({size})"
                        }
                    }
                }
            }

            if !repo.topics.is_empty() {
                div { class: "rd-pill-row",
                    for topic in repo.topics.iter() {
                        span { class: "rd-pill", key: "{topic}", "{topic}" }
                    }
                }
            }
        }
    }
}
