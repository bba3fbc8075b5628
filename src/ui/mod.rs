//! UI layer: element trees and the surfaces they are rendered into.
//!
//! Views only ever talk to `ResultsSurface`; a browser host implements it over
//! real DOM nodes, tests use the in-memory `HtmlSurface`.

pub mod core;

pub mod backend;
