use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, View};
use crate::ui;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Dispatch a terminal event to the app
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        // Redraw happens on the next iteration
        Event::Resize(_, height) => app.terminal_height = height,
        _ => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),

        // Direct view access
        KeyCode::Char('1') => app.set_view(View::Dashboard),
        KeyCode::Char('2') => app.set_view(View::Alerts),
        KeyCode::Char('3') => app.set_view(View::History),

        // Navigation (up/down for items, left/right for tabs)
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::PageUp => app.select_prev_n(10),
        KeyCode::PageDown => app.select_next_n(10),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Back to the dashboard
        KeyCode::Esc => app.set_view(View::Dashboard),

        // Alerts
        KeyCode::Char('c') => app.clear_alerts(),

        // Poll now
        KeyCode::Char('r') => {
            let _ = app.reload_data();
        }

        // Export
        KeyCode::Char('e') => app.export(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        MouseEventKind::Down(MouseButton::Left) => {
            let clicked_row = mouse.row;

            // Click a list row to select it
            if let Some(index) = list_index_at_row(app, clicked_row) {
                app.select_first();
                app.select_next_n(index);
            }

            // Tab clicks (row 1, after header)
            if clicked_row == 1 {
                if let Some(view) = tab_at_column(mouse.column) {
                    app.set_view(view);
                }
            }
        }

        _ => {}
    }
}

/// Which list item is drawn on a screen row, using the scroll offset the
/// last frame was rendered with.
fn list_index_at_row(app: &App, row: u16) -> Option<usize> {
    let (first, visible) = ui::list_body(app.current_view, app.terminal_height)?;
    if row < first || row >= first + visible {
        return None;
    }
    let (len, selected) = app.list_position()?;
    let index = ui::list_offset(selected, visible) + usize::from(row - first);
    (index < len).then_some(index)
}

/// Which tab sits under a column of the tab bar.
///
/// Tabs render as " N:Label " separated by a one-column divider.
fn tab_at_column(column: u16) -> Option<View> {
    let mut start = 0u16;
    for view in View::ALL {
        let width = (view.label().len() + 4) as u16;
        if column < start + width {
            return Some(view);
        }
        start += width + 1;
    }
    None
}
