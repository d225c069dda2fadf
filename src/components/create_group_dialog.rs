use std::mem;

use egui::{Id, Modal, Ui};

use crate::model::GroupDraft;

use super::group_form::{fields_are_set, GroupFields};

#[derive(Default)]
pub struct CreateGroupState {
    is_open: bool,
    draft: GroupDraft,
}

impl CreateGroupState {
    fn take_create_vars(&mut self) -> GroupDraft {
        mem::take(&mut self.draft)
    }

    fn create_are_set(&self) -> bool {
        fields_are_set(&self.draft.name, &self.draft.description)
    }
}

pub trait CreateGroupDialog {
    /// Returns the draft once the user saves it.
    fn create_group_dialog(&mut self, state: &mut CreateGroupState) -> Option<GroupDraft>;
}

impl CreateGroupDialog for Ui {
    fn create_group_dialog(&mut self, state: &mut CreateGroupState) -> Option<GroupDraft> {
        self.add_enabled_ui(!state.is_open, |ui| {
            if ui.button("➕ Create Group").clicked() {
                state.is_open = true;
            }
        });

        if !state.is_open {
            return None;
        }

        let mut created = None;
        let modal = Modal::new(Id::new("Modal for Creating Groups")).show(self.ctx(), |ui| {
            ui.heading("Create Group");
            ui.label("You will be added to the new group as its leader.");
            ui.separator();
            GroupFields::of_draft(&mut state.draft).show(ui, "create group fields");
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("cancel").clicked() {
                    state.is_open = false;
                }
                ui.add_enabled_ui(state.create_are_set(), |ui| {
                    if ui.button("save").clicked() {
                        created = Some(state.take_create_vars());
                        state.is_open = false;
                    }
                });
            });
        });
        if modal.should_close() {
            state.is_open = false;
        }

        created
    }
}
