//! Widget constructors. Every factory registers the new widget as top-level;
//! `add_child` moves it into a container afterwards.

use super::{Gui, GuiError};
use crate::ui::core::geom::Rect;
use crate::ui::widgets::base::WidgetBase;
use crate::ui::widgets::button::{Button, ButtonRole, RadioRole};
use crate::ui::widgets::container::{Container, Layout, ToolBarLayout};
use crate::ui::widgets::label::Label;
use crate::ui::widgets::separator::Separator;
use crate::ui::widgets::slider::Slider;
use crate::ui::widgets::textbox::TextBox;
use crate::ui::widgets::{WidgetId, WidgetKind};

impl Gui {
    fn base(&self, rect: Rect) -> WidgetBase {
        WidgetBase::new(rect, self.settings.colors)
    }

    fn button_with_role(
        &mut self,
        rect: Rect,
        label: &str,
        tip: &str,
        role: ButtonRole,
    ) -> WidgetId {
        let base = self.base(rect).with_tip(tip);
        self.register(base, WidgetKind::Button(Button::new(label, role)))
    }

    fn radio_role(&self) -> ButtonRole {
        let colors = self.settings.colors;
        ButtonRole::Radio(RadioRole {
            group: self.state.radio.default_group(),
            use_selection_colors: false,
            selection_fore: colors.back,
            selection_back: colors.fore,
        })
    }

    /// Auto-sized push button (label width + 2, one row).
    pub fn new_button(&mut self, label: &str, tip: &str) -> WidgetId {
        self.new_button_at(Rect::default(), label, tip)
    }

    /// Push button at `rect`; the width is kept as a minimum, the height is
    /// always one row.
    pub fn new_button_at(&mut self, rect: Rect, label: &str, tip: &str) -> WidgetId {
        self.button_with_role(rect, label, tip, ButtonRole::Push)
    }

    pub fn new_toggle_button(&mut self, label: &str, tip: &str) -> WidgetId {
        self.new_toggle_button_at(Rect::default(), label, tip)
    }

    pub fn new_toggle_button_at(&mut self, rect: Rect, label: &str, tip: &str) -> WidgetId {
        self.button_with_role(rect, label, tip, ButtonRole::Toggle { checked: false })
    }

    /// Radio button in the current default group.
    pub fn new_radio_button(&mut self, label: &str, tip: &str) -> WidgetId {
        self.new_radio_button_at(Rect::default(), label, tip)
    }

    pub fn new_radio_button_at(&mut self, rect: Rect, label: &str, tip: &str) -> WidgetId {
        let role = self.radio_role();
        self.button_with_role(rect, label, tip, role)
    }

    pub fn new_label(&mut self, x: i32, y: i32, text: &str) -> WidgetId {
        self.new_label_with_tip(x, y, text, "")
    }

    pub fn new_label_with_tip(&mut self, x: i32, y: i32, text: &str, tip: &str) -> WidgetId {
        let base = self.base(Rect::new(x, y, 0, 1)).with_tip(tip);
        self.register(base, WidgetKind::Label(Label::new(text)))
    }

    pub fn new_separator(&mut self, caption: &str, tip: &str) -> WidgetId {
        let base = self.base(Rect::new(0, 0, 0, 1)).with_tip(tip);
        self.register(base, WidgetKind::Separator(Separator::new(caption)))
    }

    /// Text field with a `box_w`-column edit box, preceded by `label` when
    /// it is not empty. `value` is truncated to `max_len` chars.
    pub fn new_text_box(
        &mut self,
        x: i32,
        y: i32,
        box_w: i32,
        max_len: usize,
        label: &str,
        value: &str,
    ) -> WidgetId {
        let (field, w) = TextBox::new(label, value, box_w, max_len);
        let base = self.base(Rect::new(x, y, w, 1));
        self.register(base, WidgetKind::TextBox(field))
    }

    /// Slider starting at the middle of `[min, max]`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_slider(
        &mut self,
        x: i32,
        y: i32,
        box_w: i32,
        min: f32,
        max: f32,
        label: &str,
        tip: &str,
    ) -> WidgetId {
        let slider_settings = &self.settings.slider;
        let (slider, w) = Slider::new(
            label,
            box_w,
            min,
            max,
            slider_settings.max_text_len,
            self.slider_format.clone(),
            slider_settings.sensitivity,
        );
        let base = self.base(Rect::new(x, y, w, 1)).with_tip(tip);
        self.register(base, WidgetKind::Slider(slider))
    }

    /// Container whose children keep their own positions.
    pub fn new_container(&mut self, rect: Rect) -> WidgetId {
        let base = self.base(rect);
        self.register(base, WidgetKind::Container(Container::new(Layout::Free)))
    }

    /// Vertical box; `None` uses the configured default padding.
    pub fn new_vbox(&mut self, x: i32, y: i32, padding: Option<i32>) -> WidgetId {
        let padding = padding.unwrap_or(self.settings.layout.default_padding);
        let base = self.base(Rect::new(x, y, 0, 0));
        self.register(
            base,
            WidgetKind::Container(Container::new(Layout::VBox { padding })),
        )
    }

    pub fn new_hbox(&mut self, x: i32, y: i32, padding: Option<i32>) -> WidgetId {
        let padding = padding.unwrap_or(self.settings.layout.default_padding);
        let base = self.base(Rect::new(x, y, 0, 0));
        self.register(
            base,
            WidgetKind::Container(Container::new(Layout::HBox { padding })),
        )
    }

    pub fn new_toolbar(&mut self, x: i32, y: i32, name: &str, tip: &str) -> WidgetId {
        self.toolbar(x, y, None, name, tip)
    }

    /// Toolbar that never gets narrower than `w`.
    pub fn new_toolbar_with_width(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        name: &str,
        tip: &str,
    ) -> WidgetId {
        self.toolbar(x, y, Some(w), name, tip)
    }

    fn toolbar(&mut self, x: i32, y: i32, w: Option<i32>, name: &str, tip: &str) -> WidgetId {
        let layout = ToolBarLayout::new(name, w);
        let base = self
            .base(Rect::new(x, y, layout.initial_width(), 2))
            .with_tip(tip);
        self.register(
            base,
            WidgetKind::Container(Container::new(Layout::ToolBar(layout))),
        )
    }

    /// Creates a separator and appends it to `toolbar`.
    pub fn add_separator(
        &mut self,
        toolbar: WidgetId,
        caption: &str,
        tip: &str,
    ) -> Result<WidgetId, GuiError> {
        let separator = self.new_separator(caption, tip);
        if let Err(e) = self.add_child(toolbar, separator) {
            let _ = self.remove(separator);
            return Err(e);
        }
        Ok(separator)
    }

    /// Shows the tooltip of the hovered widget.
    pub fn new_status_bar(&mut self, rect: Rect) -> WidgetId {
        let base = self.base(rect);
        self.register(base, WidgetKind::StatusBar)
    }

    pub fn new_image(&mut self, rect: Rect, tip: &str) -> WidgetId {
        let base = self.base(rect).with_tip(tip);
        self.register(base, WidgetKind::Image)
    }
}
