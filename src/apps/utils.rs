pub fn text(ui: &mut egui::Ui, val: &mut String) {
    ui.add(egui::TextEdit::singleline(val));
}

pub fn multiline(ui: &mut egui::Ui, val: &mut String) {
    ui.add(egui::TextEdit::multiline(val).desired_rows(3));
}

/// Edits an optional value; clearing the text sets it back to `None`.
pub fn optional_text(ui: &mut egui::Ui, val: &mut Option<String>) {
    let mut buffer = val.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::singleline(&mut buffer).hint_text("none"))
        .changed()
    {
        *val = (!buffer.trim().is_empty()).then_some(buffer);
    }
}

/// Only user edits are kept within 0 to 5, a stored rating outside that range is left as is.
pub fn rating_slider(ui: &mut egui::Ui, val: &mut f32) -> egui::Response {
    ui.add(
        egui::Slider::new(val, 0.0..=5.0)
            .clamping(egui::SliderClamping::Edits)
            .step_by(0.1)
            .fixed_decimals(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn_rating(mut rating: f32) -> (f32, bool) {
        let ctx = egui::Context::default();
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed |= rating_slider(ui, &mut rating).changed();
            });
        });
        (rating, changed)
    }

    #[test]
    fn test_rating_slider_keeps_out_of_range_rating() {
        assert_eq!(drawn_rating(9.5), (9.5, false));
        assert_eq!(drawn_rating(-1.), (-1., false));
    }

    #[test]
    fn test_rating_slider_leaves_rating_untouched() {
        assert_eq!(drawn_rating(4.2), (4.2, false));
    }
}
