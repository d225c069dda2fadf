use std::hash::Hash;

use egui::{ComboBox, Grid, Ui};

use crate::{
    apps::utils::{multiline, optional_text, rating_slider, text},
    model::{Group, GroupDraft, Status},
};

/// The editable fields shared by the create and edit dialogs.
pub struct GroupFields<'a> {
    pub name: &'a mut String,
    pub description: &'a mut String,
    pub status: &'a mut Status,
    pub rating: &'a mut f32,
    pub image: &'a mut Option<String>,
}

impl<'a> GroupFields<'a> {
    pub fn of_draft(draft: &'a mut GroupDraft) -> Self {
        Self {
            name: &mut draft.name,
            description: &mut draft.description,
            status: &mut draft.status,
            rating: &mut draft.rating,
            image: &mut draft.image,
        }
    }

    pub fn of_group(group: &'a mut Group) -> Self {
        Self {
            name: &mut group.name,
            description: &mut group.description,
            status: &mut group.status,
            rating: &mut group.rating,
            image: &mut group.image,
        }
    }

    pub fn show(self, ui: &mut Ui, id_salt: impl Hash) {
        Grid::new(id_salt).num_columns(2).show(ui, |ui| {
            ui.label("Name");
            text(ui, self.name);
            ui.end_row();

            ui.label("Description");
            multiline(ui, self.description);
            ui.end_row();

            ui.label("Status");
            ComboBox::from_id_salt("group status")
                .selected_text(self.status.label())
                .show_ui(ui, |ui| {
                    for status in Status::ALL {
                        ui.selectable_value(&mut *self.status, status, status.label());
                    }
                });
            ui.end_row();

            ui.label("Rating");
            rating_slider(ui, self.rating);
            ui.end_row();

            ui.label("Image");
            optional_text(ui, self.image);
            ui.end_row();
        });
    }
}

/// A group needs at least a name and a description.
pub fn fields_are_set(name: &str, description: &str) -> bool {
    !name.trim().is_empty() && !description.trim().is_empty()
}
