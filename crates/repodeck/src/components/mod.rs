//! UI components for the repodeck application.
//!
//! - [`QueryCard`]: mode selector, input, and submit button
//! - [`RepoPanel`] / [`ReadmePanel`]: repository metadata and README
//! - [`InsightCarousel`]: the circular insight-card carousel
//!
//! [`App`] composes the sections and owns the submission flow: a coroutine
//! issues the backend request while the submit control stays disabled, and
//! every outcome ends in exactly one status message.

mod carousel;
mod query_card;
mod readme_panel;
mod repo_panel;

pub use carousel::InsightCarousel;
pub use query_card::QueryCard;
pub use readme_panel::ReadmePanel;
pub use repo_panel::RepoPanel;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use repodeck_core::api::{InsightsResponse, Query};

use crate::client;

/// Tone of the status line, mapped onto CSS modifier classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

impl StatusTone {
    fn css_class(self) -> &'static str {
        match self {
            StatusTone::Info => "rd-status rd-status--info",
            StatusTone::Success => "rd-status rd-status--success",
            StatusTone::Error => "rd-status rd-status--error",
        }
    }
}

/// One user-visible status message. Each submission surfaces exactly one:
/// "Working..." while in flight, then "Done!" or the derived error text.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}

// Messages for the submit coroutine
enum SubmitMessage {
    Run(Query),
}

/// Main application component: query card, status line, result sections.
#[component]
pub fn App() -> Element {
    let status = use_signal(|| None::<StatusMessage>);
    let response = use_signal(|| None::<InsightsResponse>);
    let mut submitting = use_signal(|| false);

    // Submission coroutine - one request in flight at a time. The submit
    // control stays disabled until the previous request settles, so a stale
    // response can never race a newer submission.
    let submit_task = use_coroutine({
        let mut status = status;
        let mut response = response;
        let mut submitting = submitting;

        move |mut rx: UnboundedReceiver<SubmitMessage>| async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    SubmitMessage::Run(query) => {
                        info!("🔍 Submitting {:?} query: '{}'", query.mode, query.value);
                        status.set(Some(StatusMessage::info("Working...")));

                        match client::fetch_insights(&query).await {
                            Ok(data) => {
                                info!(
                                    "✅ Insights received (repo: {}, insights: {})",
                                    data.repo.is_some(),
                                    data.insights.is_some()
                                );
                                response.set(Some(data));
                                status.set(Some(StatusMessage::success("Done!")));
                            }
                            Err(e) => {
                                error!("❌ Insights request failed: {}", e);
                                status.set(Some(StatusMessage::error(e.to_string())));
                            }
                        }

                        // Released on success and failure alike
                        submitting.set(false);
                    }
                }
            }
        }
    });

    let handle_submit = move |query: Query| {
        submitting.set(true);
        submit_task.send(SubmitMessage::Run(query));
    };

    // Validation failures never reach the network
    let handle_invalid = {
        let mut status = status;
        move |message: String| {
            status.set(Some(StatusMessage::error(message)));
        }
    };

    let response_val = response.read().clone();
    let repo = response_val.as_ref().and_then(|r| r.repo.clone());
    let readme = repo.as_ref().and_then(|r| r.readme.clone());
    let insights = response_val.as_ref().and_then(|r| r.insights.clone());

    rsx! {
        div { class: "rd-app",
            header { class: "rd-header",
                h1 { class: "rd-title", "Repo Insight Cards" }
                p { class: "rd-subtitle",
                    "Metadata, README and AI-generated insights for any GitHub repository"
                }
            }

            main { class: "rd-main",
                QueryCard {
                    submitting,
                    on_submit: handle_submit,
                    on_invalid: handle_invalid,
                }

                {status.read().as_ref().map(|message| rsx! {
                    div { class: message.tone.css_class(), "{message.text}" }
                })}

                {repo.as_ref().map(|repo| rsx! {
                    RepoPanel { repo: repo.clone() }
                })}

                {readme.as_ref().map(|readme| rsx! {
                    ReadmePanel { readme: readme.clone() }
                })}

                {insights.as_ref().map(|insights| rsx! {
                    InsightCarousel { insights: insights.clone() }
                })}
            }

            footer { class: "rd-footer",
                span { "Insights are AI-generated from repository metadata" }
            }
        }
    }
}
