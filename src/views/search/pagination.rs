//! Sliding page window for the pagination bar.

/// Pages shown on each side of the current page.
pub const PAGE_WINDOW: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    Previous(u32),
    Page { page: u32, active: bool },
    Ellipsis,
    Next(u32),
}

impl PageControl {
    pub fn target(self) -> Option<u32> {
        match self {
            PageControl::Previous(page) | PageControl::Next(page) => Some(page),
            PageControl::Page { page, .. } => Some(page),
            PageControl::Ellipsis => None,
        }
    }
}

pub fn page_controls(
    current: u32,
    total: u32,
    has_previous: bool,
    has_next: bool,
) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(PAGE_WINDOW).max(1);
    let end = current.saturating_add(PAGE_WINDOW).min(total);

    let mut controls = Vec::with_capacity((end - start) as usize + 5);
    if has_previous && current > 1 {
        controls.push(PageControl::Previous(current - 1));
    }
    if start > 1 {
        controls.push(PageControl::Ellipsis);
    }
    for page in start..=end {
        controls.push(PageControl::Page {
            page,
            active: page == current,
        });
    }
    if end < total {
        controls.push(PageControl::Ellipsis);
    }
    if has_next && current < total {
        controls.push(PageControl::Next(current + 1));
    }
    controls
}

#[cfg(test)]
#[path = "../../../tests/unit/views/search/pagination.rs"]
mod tests;
