//! Drawing the text area and the keyboard with egui

use crate::core::events::KeyState;
use crate::keyboard::{KeyView, TextArea, TextBuffer};
use crate::layout::ROW_COUNT;
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{vec2, Align2, Color32, FontId, Rect, Sense, Stroke};

/// Hint shown under the keyboard
pub const HINT_TEXT: &str = "Virtual keyboard for Windows, switch between languages: Ctrl + Shift";

/// Gap between keys in logical pixels
const KEY_GAP: f32 = 6.0;

const KEY_ROUNDING: f32 = 6.0;
const KEY_FILL: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x3A);
const SYSTEM_KEY_FILL: Color32 = Color32::from_rgb(0x26, 0x26, 0x26);
const ACTIVE_KEY_FILL: Color32 = Color32::from_rgb(0xD9, 0x77, 0x57);
const KEY_TEXT: Color32 = Color32::from_rgb(0xDC, 0xDC, 0xDC);
const INDICATOR: Color32 = Color32::from_rgb(0x4C, 0xD9, 0x64);

/// Render the text area bound to `text`
///
/// The widget is read-only; only its cursor and selection are taken back
/// into the buffer. Typing goes through the keyboard.
pub fn render_text_area(ui: &mut egui::Ui, text: &mut TextArea, id: egui::Id, font_size: f32) {
    let mut state = TextEditState::load(ui.ctx(), id).unwrap_or_default();
    let (start, end) = text.selection();
    state.cursor.set_char_range(Some(CCursorRange::two(
        CCursor::new(start),
        CCursor::new(end),
    )));
    state.store(ui.ctx(), id);

    let mut view: &str = text.text();
    let output = egui::TextEdit::multiline(&mut view)
        .id(id)
        .font(FontId::monospace(font_size))
        .desired_width(f32::INFINITY)
        .desired_rows(6)
        .lock_focus(true)
        .show(ui);

    if !output.response.has_focus() {
        output.response.request_focus();
    }

    if let Some(range) = output.state.cursor.char_range() {
        text.set_selection(range.primary.index, range.secondary.index);
    }
}

/// Render the keyboard and report pointer presses and releases
///
/// `pointer_key` remembers which key the pointer is holding between frames.
pub fn render_keyboard(
    ui: &mut egui::Ui,
    views: &[KeyView],
    font_size: f32,
    pointer_key: &mut Option<&'static str>,
) -> Vec<(&'static str, KeyState)> {
    let mut actions = Vec::new();

    let mut row_units = [0.0_f32; ROW_COUNT as usize];
    for view in views {
        if let Some(units) = row_units.get_mut(view.row as usize) {
            *units += view.width;
        }
    }
    let max_units = row_units.iter().copied().fold(1.0_f32, f32::max);

    let available_width = ui.available_width();
    let unit = ((available_width - (max_units - 1.0) * KEY_GAP) / max_units).max(12.0);
    let key_height = (unit * 0.9).clamp(28.0, 64.0);
    let rows = ROW_COUNT as f32;
    let total = vec2(available_width, rows * key_height + (rows - 1.0) * KEY_GAP);

    let (keyboard_rect, _) = ui.allocate_exact_size(total, Sense::hover());

    let mut cursor_x = [keyboard_rect.min.x; ROW_COUNT as usize];
    for view in views {
        let row = view.row as usize;
        let Some(x) = cursor_x.get_mut(row) else {
            continue;
        };

        let width = view.width * unit + (view.width - 1.0) * KEY_GAP;
        let min = egui::pos2(*x, keyboard_rect.min.y + row as f32 * (key_height + KEY_GAP));
        let rect = Rect::from_min_size(min, vec2(width, key_height));
        *x += width + KEY_GAP;

        let response = ui.interact(rect, ui.id().with(view.code), Sense::click_and_drag());
        if response.is_pointer_button_down_on() && pointer_key.is_none() {
            *pointer_key = Some(view.code);
            actions.push((view.code, KeyState::Pressed));
        } else if response.clicked() && pointer_key.is_none() {
            // Down and up landed in the same frame
            actions.push((view.code, KeyState::Pressed));
            actions.push((view.code, KeyState::Released));
        }

        let fill = if view.active || *pointer_key == Some(view.code) {
            ACTIVE_KEY_FILL
        } else if view.is_system {
            SYSTEM_KEY_FILL
        } else {
            KEY_FILL
        };
        let stroke = if response.hovered() {
            Stroke::new(1.0, KEY_TEXT)
        } else {
            Stroke::NONE
        };

        let painter = ui.painter();
        painter.rect(rect, KEY_ROUNDING, fill, stroke);
        let label_size = if view.is_system { font_size * 0.75 } else { font_size };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &view.label,
            FontId::proportional(label_size),
            KEY_TEXT,
        );
        if view.indicator {
            painter.circle_filled(rect.right_top() + vec2(-8.0, 8.0), 3.0, INDICATOR);
        }
    }

    if let Some(code) = *pointer_key {
        if !ui.input(|i| i.pointer.any_down()) {
            actions.push((code, KeyState::Released));
            *pointer_key = None;
        }
    }

    actions
}

/// Render the language switch hint
pub fn render_hint(ui: &mut egui::Ui) {
    ui.add_space(KEY_GAP);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(HINT_TEXT).weak());
    });
}
