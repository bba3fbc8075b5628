//! Rendering surfaces.
//!
//! The trait mirrors the host page contract: one results container that can be
//! shown or hidden, plus two child containers that receive element trees.

use crate::ui::core::element::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    ResultsList,
    Pagination,
}

pub trait ResultsSurface {
    fn has_element(&self, id: &str) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn clear(&mut self, container: Container);

    fn append(&mut self, container: Container, element: Element);
}

pub mod html;
