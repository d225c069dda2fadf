mod filterstate;

use std::collections::HashMap;

use egui::{Align, Grid, Layout, ScrollArea, Ui};
use tracing::info;

use crate::{
    components::{
        create_group_dialog::{CreateGroupDialog, CreateGroupState},
        group_card::{GroupCard, GroupCardState},
    },
    model::{
        permissions::{is_allowed, ActionKind},
        groups::Applied,
        GroupAction, GroupId, Groups, Member,
    },
};

use self::filterstate::FilterState;

const CARDS_PER_ROW: usize = 3;

#[derive(Default)]
pub(super) struct GroupsManagement {
    filter_state: FilterState,
    create_state: CreateGroupState,
    cards: HashMap<GroupId, GroupCardState>,
    last_error: Option<String>,
}

impl GroupsManagement {
    pub(super) fn view(&mut self, ui: &mut Ui, groups: &mut Groups, current_user: &Member) {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            self.filter_state.display_filters(ui);
            if is_allowed(current_user, ActionKind::Create) {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if let Some(draft) = ui.create_group_dialog(&mut self.create_state) {
                        actions.push(GroupAction::Create(draft));
                    }
                });
            }
        });

        if let Some(err) = &self.last_error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        ui.separator();

        let visible = self.filter_state.visible(groups).collect::<Vec<_>>();
        if visible.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(20.);
                ui.label(self.filter_state.empty_message());
            });
        } else {
            let cards = &mut self.cards;
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("group cards")
                    .num_columns(CARDS_PER_ROW)
                    .spacing([12., 12.])
                    .show(ui, |ui| {
                        for row in visible.chunks(CARDS_PER_ROW) {
                            for group in row {
                                let state = cards.entry(group.id().clone()).or_default();
                                ui.group_card(state, group, current_user, &mut actions);
                            }
                            ui.end_row();
                        }
                    });
            });
        }

        self.apply(groups, current_user, actions);
    }

    fn apply(&mut self, groups: &mut Groups, current_user: &Member, actions: Vec<GroupAction>) {
        for action in actions {
            match groups.apply(current_user, action) {
                Ok(applied) => {
                    log_applied(groups, &applied);
                    self.last_error = None;
                }
                Err(err) => self.last_error = Some(err.to_string()),
            }
        }
        self.cards.retain(|id, _| groups.contains(id));
    }
}

fn log_applied(groups: &Groups, applied: &Applied) {
    let name_of = |id: &GroupId| {
        groups
            .get(id)
            .map(|group| group.name.clone())
            .unwrap_or_default()
    };
    match applied {
        Applied::Created(id) => info!(group = %id, name = %name_of(id), "created group"),
        Applied::Updated(id) => info!(group = %id, name = %name_of(id), "updated group"),
        Applied::Deleted(group) => info!(group = %group.id(), name = %group.name, "deleted group"),
        Applied::MemberAdded { group, member } => {
            info!(group = %group, name = %name_of(group), member = %member, "added member");
        }
        Applied::MemberDeleted { group, member } => {
            info!(group = %group, member = %member.id, email = %member.email, "removed member");
        }
        Applied::Rated(id) => {
            let rating = groups.get(id).map(|group| group.rating);
            info!(group = %id, ?rating, "rated group");
        }
    }
}
