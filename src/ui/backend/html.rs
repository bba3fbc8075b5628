//! Headless surface that keeps element trees in memory and serialises them to HTML.

use crate::kernel::services::ports::ElementIds;
use crate::ui::backend::{Container, ResultsSurface};
use crate::ui::core::element::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlSurface {
    ids: Vec<String>,
    visible: bool,
    list: Vec<Element>,
    pagination: Vec<Element>,
}

impl HtmlSurface {
    /// Surface exposing the given element ids.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn for_elements(elements: &ElementIds) -> Self {
        Self::with_ids(elements.all())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn elements(&self, container: Container) -> &[Element] {
        match container {
            Container::ResultsList => &self.list,
            Container::Pagination => &self.pagination,
        }
    }

    pub fn is_empty(&self, container: Container) -> bool {
        self.elements(container).is_empty()
    }

    pub fn html(&self, container: Container) -> String {
        self.elements(container)
            .iter()
            .map(Element::to_html)
            .collect()
    }

    /// Target pages of the pagination controls, in document order.
    pub fn page_targets(&self) -> Vec<u32> {
        self.pagination
            .iter()
            .filter_map(|el| el.get_attr("data-page"))
            .filter_map(|page| page.parse().ok())
            .collect()
    }

    fn container_mut(&mut self, container: Container) -> &mut Vec<Element> {
        match container {
            Container::ResultsList => &mut self.list,
            Container::Pagination => &mut self.pagination,
        }
    }
}

impl ResultsSurface for HtmlSurface {
    fn has_element(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn clear(&mut self, container: Container) {
        self.container_mut(container).clear();
    }

    fn append(&mut self, container: Container, element: Element) {
        self.container_mut(container).push(element);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/html.rs"]
mod tests;
