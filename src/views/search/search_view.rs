//! 搜索结果视图（纯渲染）
//!
//! Every state starts by clearing the results list; hidden, error, empty and
//! results also clear the pagination bar.

use super::pagination::{page_controls, PageControl};
use crate::kernel::services::ports::{RecordKind, ResultRecord, SearchError, SearchResultPage};
use crate::kernel::{ResultsView, SearchState};
use crate::ui::backend::{Container, ResultsSurface};
use crate::ui::core::element::Element;

const LOADING_TEXT: &str = "Searching…";
const ERROR_TEXT: &str = "Search failed. Please try again.";
const NO_RESULTS_TITLE: &str = "No results found";
const NO_RESULTS_TEXT: &str = "Try different search terms.";
const SUGGESTIONS_LABEL: &str = "Did you mean:";
/// Stand-in for kind tags that cannot be used as a path segment or class name.
const FALLBACK_KIND: &str = "other";

#[derive(Debug, Default)]
pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, state: &SearchState, surface: &mut dyn ResultsSurface) {
        match &state.view {
            ResultsView::Hidden => {
                surface.clear(Container::ResultsList);
                surface.clear(Container::Pagination);
            }
            ResultsView::Loading => {
                surface.clear(Container::ResultsList);
                surface.append(Container::ResultsList, loading_panel());
            }
            ResultsView::Error(err) => {
                surface.clear(Container::ResultsList);
                surface.clear(Container::Pagination);
                surface.append(Container::ResultsList, error_panel(err));
            }
            ResultsView::Empty { suggestions } => {
                surface.clear(Container::ResultsList);
                surface.clear(Container::Pagination);
                surface.append(Container::ResultsList, no_results_panel(suggestions));
            }
            ResultsView::Results(page) => self.render_results(page, surface),
        }
        surface.set_visible(state.visible);
    }

    fn render_results(&self, page: &SearchResultPage, surface: &mut dyn ResultsSurface) {
        surface.clear(Container::ResultsList);
        surface.clear(Container::Pagination);

        if page.is_empty() {
            surface.append(Container::ResultsList, no_results_panel(&page.suggestions));
            return;
        }

        surface.append(Container::ResultsList, results_header(page));
        for record in &page.results {
            surface.append(Container::ResultsList, result_item(record));
        }

        let controls = page_controls(
            page.current_page,
            page.total_pages,
            page.has_previous,
            page.has_next,
        );
        for control in controls {
            surface.append(Container::Pagination, page_control(control));
        }
    }
}

fn loading_panel() -> Element {
    Element::new("div")
        .class("search-loading")
        .child(Element::new("div").class("spinner"))
        .child(Element::new("p").text(LOADING_TEXT))
}

fn error_panel(err: &SearchError) -> Element {
    let (kind, message) = match err {
        SearchError::Http { .. } => ("http", ERROR_TEXT),
        SearchError::InvalidResponseFormat { .. } => ("format", ERROR_TEXT),
        SearchError::ServerReported { message, .. } => ("server", message.as_str()),
        SearchError::Decode(_) => ("decode", ERROR_TEXT),
        SearchError::Transport(_) => ("transport", ERROR_TEXT),
    };
    Element::new("div")
        .class("search-error")
        .attr("data-error", kind)
        .child(Element::new("p").text(message))
}

fn no_results_panel(suggestions: &[String]) -> Element {
    let mut content = Element::new("div")
        .class("no-results-content")
        .child(Element::new("h3").text(NO_RESULTS_TITLE))
        .child(Element::new("p").text(NO_RESULTS_TEXT));

    if !suggestions.is_empty() {
        content = content.child(
            Element::new("div")
                .class("no-results-suggestions")
                .child(Element::new("span").text(SUGGESTIONS_LABEL))
                .child(Element::new("ul").children(
                    suggestions
                        .iter()
                        .map(|s| Element::new("li").text(s.as_str())),
                )),
        );
    }

    Element::new("div").class("no-results").child(content)
}

fn results_header(page: &SearchResultPage) -> Element {
    let count = if page.total_results == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", page.total_results)
    };

    let mut header = Element::new("div")
        .class("search-results-header")
        .child(Element::new("span").class("results-count").text(count));
    if page.total_pages > 1 {
        header = header.child(
            Element::new("span")
                .class("results-page-info")
                .text(format!("Page {} of {}", page.current_page, page.total_pages)),
        );
    }
    header
}

struct KindPresentation {
    icon: &'static str,
    badge: String,
    action_label: &'static str,
    details: Vec<String>,
}

fn present(record: &ResultRecord) -> KindPresentation {
    match &record.kind {
        RecordKind::User {
            department,
            position,
            is_active,
            is_staff,
            ..
        } => {
            let mut details: Vec<String> =
                [department, position].into_iter().flatten().cloned().collect();
            if !is_active {
                details.push("Inactive".to_string());
            }
            KindPresentation {
                icon: "fa-user",
                badge: (if *is_staff { "Staff" } else { "User" }).to_string(),
                action_label: "View profile",
                details,
            }
        }
        RecordKind::Project { status, location } => KindPresentation {
            icon: "fa-folder",
            badge: "Project".to_string(),
            action_label: "View project",
            details: [
                status.as_ref().map(|s| format!("Status: {}", s)),
                location.clone(),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
        RecordKind::Manager { points, level } => KindPresentation {
            icon: "fa-user-tie",
            badge: "Manager".to_string(),
            action_label: "View manager",
            details: [points.map(|p| format!("{} pts", p)), level.clone()]
                .into_iter()
                .flatten()
                .collect(),
        },
        RecordKind::Other { kind } => KindPresentation {
            icon: "fa-file",
            badge: capitalize(kind_segment(kind)),
            action_label: "View",
            details: Vec::new(),
        },
    }
}

pub fn action_href(record: &ResultRecord) -> String {
    if let Some(url) = &record.url {
        return url.clone();
    }
    match &record.kind {
        RecordKind::User { .. } | RecordKind::Manager { .. } => {
            format!("/manager/modify/{}/", record.id)
        }
        RecordKind::Project { .. } => format!("/manager/modify-project/{}/", record.id),
        RecordKind::Other { kind } => {
            format!("/search/view/{}/{}/", kind_segment(kind), record.id)
        }
    }
}

/// `kind` if it is a plain slug (ASCII letters, digits, `-`, `_`), else the fallback.
fn kind_segment(kind: &str) -> &str {
    let is_slug = !kind.is_empty()
        && kind
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if is_slug {
        kind
    } else {
        FALLBACK_KIND
    }
}

fn result_item(record: &ResultRecord) -> Element {
    let presentation = present(record);
    let tag = kind_segment(record.kind.tag());

    let visual = match &record.kind {
        RecordKind::User { .. } => Element::new("div")
            .class("result-avatar")
            .text(initials(&record.title)),
        _ => Element::new("div")
            .class("result-icon")
            .child(Element::new("i").class("fas").class(presentation.icon)),
    };

    let mut content = Element::new("div").class("result-content").child(
        Element::new("div")
            .class("result-header")
            .child(Element::new("h4").class("result-title").text(record.title.as_str()))
            .child(
                Element::new("span")
                    .class("result-badge")
                    .class(&format!("badge-{}", tag))
                    .text(presentation.badge),
            ),
    );
    if let Some(subtitle) = &record.subtitle {
        content = content.child(
            Element::new("p")
                .class("result-subtitle")
                .text(subtitle.as_str()),
        );
    }
    if !presentation.details.is_empty() {
        content = content.child(
            Element::new("div").class("result-details").children(
                presentation
                    .details
                    .into_iter()
                    .map(|d| Element::new("span").class("result-tag").text(d)),
            ),
        );
    }

    Element::new("div")
        .class("search-result-item")
        .class(&format!("result-{}", tag))
        .attr("data-id", record.id.to_string())
        .child(visual)
        .child(content)
        .child(
            Element::new("div").class("result-actions").child(
                Element::new("a")
                    .class("result-action")
                    .attr("href", action_href(record))
                    .text(presentation.action_label),
            ),
        )
}

fn page_control(control: PageControl) -> Element {
    match control {
        PageControl::Previous(page) => Element::new("button")
            .class("page-btn")
            .class("page-prev")
            .attr("data-page", page.to_string())
            .text("‹ Previous"),
        PageControl::Next(page) => Element::new("button")
            .class("page-btn")
            .class("page-next")
            .attr("data-page", page.to_string())
            .text("Next ›"),
        PageControl::Page { page, active: true } => Element::new("button")
            .class("page-btn")
            .class("active")
            .attr("data-page", page.to_string())
            .attr("aria-current", "page")
            .text(page.to_string()),
        PageControl::Page { page, active: false } => Element::new("button")
            .class("page-btn")
            .attr("data-page", page.to_string())
            .text(page.to_string()),
        PageControl::Ellipsis => Element::new("span").class("page-ellipsis").text("…"),
    }
}

fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/search/search_view.rs"]
mod tests;
