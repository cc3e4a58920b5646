//! Widget gallery running in the terminal. Ctrl-Q or the Quit button exits.

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

use gridgui::config::{get_settings_path, load_settings};
use gridgui::tui::crossterm::CrosstermInput;
use gridgui::tui::terminal_guard::TerminalGuard;
use gridgui::ui::backend::terminal::RatatuiTerminal;
use gridgui::{Canvas, Gui, GuiError, GuiSettings, Key, KeyCode, Rect, WidgetId};

mod logging;

const FRAME: Duration = Duration::from_millis(16);

/// Widgets pinned to the bottom of the screen.
struct Footer {
    log_line: WidgetId,
    status: WidgetId,
}

fn settings() -> GuiSettings {
    let Some(path) = get_settings_path() else {
        return GuiSettings::default();
    };
    match load_settings(&path) {
        Ok(Some(settings)) => settings,
        Ok(None) => GuiSettings::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring settings file");
            GuiSettings::default()
        }
    }
}

fn build(gui: &mut Gui, quit: Rc<Cell<bool>>) -> Result<Footer, GuiError> {
    let toolbar = gui.new_toolbar(1, 1, "Controls", "A toolbar");

    let hello = gui.new_button("Hello", "Logs a greeting");
    gui.set_click_callback(hello, |_, _| tracing::info!("hello"));
    gui.add_child(toolbar, hello)?;

    let wire = gui.new_toggle_button("Wireframe", "Toggles a flag");
    gui.set_click_callback(wire, |id, _| tracing::info!(id = ?id, "wireframe toggled"));
    gui.add_child(toolbar, wire)?;

    gui.add_separator(toolbar, "Mode", "")?;
    for (i, name) in ["Move", "Rotate", "Scale"].into_iter().enumerate() {
        let radio = gui.new_radio_button(name, "Pick one mode");
        gui.set_user_data(radio, i);
        gui.set_click_callback(radio, |_, data| {
            let mode = data.and_then(|d| d.downcast_ref::<usize>());
            tracing::info!(mode = ?mode, "mode selected");
        });
        gui.add_child(toolbar, radio)?;
        if i == 0 {
            gui.select_radio(radio);
        }
    }

    gui.add_separator(toolbar, "Values", "")?;
    let size = gui.new_slider(0, 0, 8, 0.0, 100.0, "Size", "Drag the arrows or type a value");
    gui.set_slider_callback(size, |_, value| tracing::debug!(value, "size changed"));
    gui.add_child(toolbar, size)?;

    let name = gui.new_text_box(0, 0, 10, 32, "Name", "world");
    gui.set_text_callback(name, |_, text| tracing::info!(text, "name edited"));
    gui.add_child(toolbar, name)?;

    let quit_button = gui.new_button("Quit", "Leave the gallery");
    gui.set_click_callback(quit_button, move |_, _| quit.set(true));
    gui.add_child(toolbar, quit_button)?;

    let row = gui.new_hbox(30, 1, Some(1));
    for label in ["One", "Two", "Three"] {
        let button = gui.new_button(label, "A button in a row");
        gui.add_child(row, button)?;
    }

    Ok(Footer {
        log_line: gui.new_label(1, 0, ""),
        status: gui.new_status_bar(Rect::new(0, 0, 80, 3)),
    })
}

fn main() -> io::Result<()> {
    let mut logging = logging::init();
    let lines = logging.as_mut().and_then(|guard| guard.take_lines());
    if let Some(guard) = &logging {
        tracing::debug!(dir = %guard.log_dir().display(), "logging to file");
    }

    let settings = settings();
    let cell_pixels = settings.cell_pixels;
    let mut gui = Gui::with_settings(settings);
    let quit = Rc::new(Cell::new(false));
    let footer = build(&mut gui, quit.clone()).map_err(io::Error::other)?;

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    gridgui::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut input = CrosstermInput::new(cell_pixels);
    let mut canvas = Canvas::new(0, 0);
    let mut exit_code = None;

    while !quit.get() {
        if let Ok(signal) = signal_rx.try_recv() {
            exit_code = Some(signal.exit_code());
            break;
        }
        if crossterm::event::poll(FRAME)? {
            while crossterm::event::poll(Duration::ZERO)? {
                input.handle_event(crossterm::event::read()?);
            }
        }

        input.begin_frame();
        let key = input.next_key();
        if key == Key::ctrl(KeyCode::Char('q')) {
            break;
        }
        if let Some(line) = lines.as_ref().and_then(|rx| rx.try_iter().last()) {
            gui.set_label(footer.log_line, &line);
        }

        gui.update_widgets(&mut input, key);
        terminal.draw(|backend, area| {
            gui.move_widget(footer.log_line, 1, area.h - 4);
            gui.move_widget(footer.status, 0, area.h - 3);
            gui.resize_widget(footer.status, area.w, 3);
            canvas.resize(area.w, area.h);
            canvas.clear();
            gui.render_widgets(&mut canvas);
            backend.draw(area, canvas.cmds());
        })?;
    }

    drop(terminal);
    drop(guard);
    if let Some(code) = exit_code {
        std::process::exit(code);
    }
    Ok(())
}
