use egui::{TextEdit, Ui};

use crate::model::{
    view::{empty_message, filter_groups},
    Group, Groups, Status, StatusFilter,
};

/// Search text and status menu of the groups screen.
#[derive(Default)]
pub(super) struct FilterState {
    search: String,
    statuses: StatusFilter,
}

impl FilterState {
    pub(super) fn visible<'a>(&'a self, groups: &'a Groups) -> impl Iterator<Item = &'a Group> + 'a {
        filter_groups(groups.as_slice(), &self.search, &self.statuses)
    }

    pub(super) fn empty_message(&self) -> &'static str {
        empty_message(&self.search, &self.statuses)
    }

    pub(super) fn display_filters(&mut self, ui: &mut Ui) {
        ui.add(
            TextEdit::singleline(&mut self.search)
                .hint_text("Search groups...")
                .desired_width(280.),
        );
        if !self.search.is_empty() && ui.button("clear").clicked() {
            self.search.clear();
        }

        let statuses = &mut self.statuses;
        ui.menu_button(filter_title(statuses), |ui| {
            for status in Status::ALL {
                let mut checked = statuses.contains(status);
                if ui.checkbox(&mut checked, status.label()).changed() {
                    statuses.toggle(status);
                }
            }
        });
    }
}

fn filter_title(statuses: &StatusFilter) -> String {
    if statuses.is_complete() {
        String::from("Filter")
    } else {
        format!("Filter ({})", statuses.iter().count())
    }
}
