//! gridgui - retained-mode widgets on a character grid
//!
//! Module layout:
//! - core: input contract (keys, mouse samples, `InputBackend`) and a scripted backend
//! - ui::core: geometry, colors, the `Surface` drawing contract and the recording `Canvas`
//! - ui::widgets: widget variants, layout and the hover/press/click protocol
//! - ui::gui: the `Gui` coordinator (arena, focus, radio groups, caret blink)
//! - ui::backend: turns recorded paint commands into cells (ratatui or in-memory)
//! - tui: crossterm input and terminal lifecycle (feature `tui`)

pub mod config;
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

pub use crate::config::GuiSettings;
pub use crate::core::{HeadlessInput, InputBackend, Key, KeyCode, KeyModifiers, MouseState};
pub use crate::ui::core::canvas::Canvas;
pub use crate::ui::core::color::Rgb;
pub use crate::ui::core::geom::{Pos, Rect};
pub use crate::ui::core::surface::{Alignment, BlendMode, Surface};
pub use crate::ui::gui::{Gui, GuiError};
pub use crate::ui::widgets::base::WidgetColors;
pub use crate::ui::widgets::format::{FormatError, ValueFormat};
pub use crate::ui::widgets::WidgetId;
