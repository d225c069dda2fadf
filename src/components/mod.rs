pub mod create_group_dialog;
pub mod group_card;
pub mod group_form;
pub mod members_table;

use egui::{Color32, Visuals};

use crate::model::Status;

/// Cuts `str` down to `max_len` characters.
fn clamp_str(str: &str, max_len: usize) -> &str {
    match str.char_indices().nth(max_len) {
        None => str,
        Some((end, _)) => &str[..end],
    }
}

fn stars(rating: f32) -> String {
    let full = rating.clamp(0., 5.).round() as usize;
    format!("{}{} {rating:.1}", "★".repeat(full), "☆".repeat(5 - full))
}

fn status_color(status: Status, visuals: &Visuals) -> Color32 {
    match status {
        Status::Active => Color32::from_rgb(0x2e, 0xa0, 0x43),
        Status::Inactive => visuals.weak_text_color(),
        Status::Archived => visuals.warn_fg_color,
        Status::Pending => Color32::from_rgb(0x3b, 0x82, 0xf6),
    }
}
