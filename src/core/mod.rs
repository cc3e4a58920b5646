//! Input contract shared by every host.
//!
//! - event: key and mouse samples, `InputBackend`
//! - input: `HeadlessInput`, a scripted backend

pub mod event;
pub mod input;

pub use event::{InputBackend, Key, KeyCode, KeyModifiers, MouseState};
pub use input::HeadlessInput;
