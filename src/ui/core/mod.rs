pub mod element;

pub use element::{escape, Element, Node};
