//! Widget layer.
//!
//! Widgets draw through the `Surface` contract in `core`; `backend` turns the
//! recorded display list into cells so nothing above it mentions `ratatui`.

pub mod core;

pub mod backend;

pub mod gui;

pub mod widgets;
