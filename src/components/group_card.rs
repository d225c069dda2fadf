use std::mem;

use egui::{Id, Modal, RichText, Ui};

use crate::{
    apps::utils::{rating_slider, text},
    model::{
        permissions::{is_allowed, ActionKind},
        Group, GroupAction, Member, MemberDraft, Role,
    },
};

use super::{
    clamp_str,
    group_form::{fields_are_set, GroupFields},
    members_table::members_table,
    stars, status_color,
};

const CARD_WIDTH: f32 = 320.;
const DESCRIPTION_LEN: usize = 80;

/// Per card ui state that outlives a frame.
#[derive(Default)]
pub struct GroupCardState {
    editing: Option<Group>,
    new_member: MemberDraft,
}

pub trait GroupCard {
    /// Draws one group. Changes are pushed to `actions` instead of being applied.
    fn group_card(
        &mut self,
        state: &mut GroupCardState,
        group: &Group,
        current_user: &Member,
        actions: &mut Vec<GroupAction>,
    );
}

impl GroupCard for Ui {
    fn group_card(
        &mut self,
        state: &mut GroupCardState,
        group: &Group,
        current_user: &Member,
        actions: &mut Vec<GroupAction>,
    ) {
        self.push_id(group.id().as_str(), |ui| {
            ui.group(|ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    card_header(ui, group);
                    rating_row(ui, group, current_user, actions);
                    if !group.has_leader() {
                        ui.colored_label(ui.visuals().warn_fg_color, NO_LEADER_TEXT);
                    }

                    ui.separator();
                    members_table(ui, group, current_user, actions);

                    if is_allowed(current_user, ActionKind::AddMember) {
                        add_member_form(ui, state, group, actions);
                    }

                    ui.horizontal(|ui| {
                        if is_allowed(current_user, ActionKind::Update) && ui.button("edit").clicked() {
                            state.editing = Some(group.clone());
                        }
                        if is_allowed(current_user, ActionKind::Delete)
                            && ui.button("delete group").clicked()
                        {
                            actions.push(GroupAction::Delete(group.id().clone()));
                        }
                    });
                });
            });
            edit_dialog(ui, state, actions);
        });
    }
}

fn card_header(ui: &mut Ui, group: &Group) {
    ui.horizontal(|ui| {
        ui.heading(&group.name);
        ui.label(
            RichText::new(group.status.label())
                .color(status_color(group.status, ui.visuals()))
                .strong(),
        );
    });
    ui.label(clamp_str(&group.description, DESCRIPTION_LEN));
    ui.label(
        RichText::new(format!(
            "created {} · {} members",
            group.created_at().format("%b %-d, %Y"),
            group.members.len()
        ))
        .weak(),
    );
}

fn rating_row(ui: &mut Ui, group: &Group, current_user: &Member, actions: &mut Vec<GroupAction>) {
    ui.horizontal(|ui| {
        ui.label("Rating");
        ui.label(stars(group.rating));
        if is_allowed(current_user, ActionKind::Rate) {
            let mut rating = group.rating;
            if rating_slider(ui, &mut rating).changed() {
                actions.push(GroupAction::UpdateRating(group.id().clone(), rating));
            }
        }
    });
}

fn add_member_form(
    ui: &mut Ui,
    state: &mut GroupCardState,
    group: &Group,
    actions: &mut Vec<GroupAction>,
) {
    ui.collapsing("Add member", |ui| {
        let draft = &mut state.new_member;
        ui.horizontal(|ui| {
            ui.label("Name");
            text(ui, &mut draft.name);
        });
        ui.horizontal(|ui| {
            ui.label("Email");
            text(ui, &mut draft.email);
        });
        ui.horizontal(|ui| {
            ui.label("Role");
            for role in Role::ALL {
                ui.selectable_value(&mut draft.role, role, role.label());
            }
        });
        ui.add_enabled_ui(fields_are_set(&draft.name, &draft.email), |ui| {
            if ui.button("add").clicked() {
                actions.push(GroupAction::AddMember(group.id().clone(), mem::take(draft)));
            }
        });
    });
}

fn edit_dialog(ui: &mut Ui, state: &mut GroupCardState, actions: &mut Vec<GroupAction>) {
    let Some(editing) = &mut state.editing else {
        return;
    };

    let mut close = false;
    let modal_id = Id::new("Modal for Editing Groups").with(editing.id().as_str());
    let modal = Modal::new(modal_id).show(ui.ctx(), |ui| {
        ui.heading("Edit Group");
        ui.separator();
        GroupFields::of_group(editing).show(ui, "edit group fields");
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("cancel").clicked() {
                close = true;
            }
            ui.add_enabled_ui(fields_are_set(&editing.name, &editing.description), |ui| {
                if ui.button("save").clicked() {
                    actions.push(GroupAction::Update(editing.clone()));
                    close = true;
                }
            });
        });
    });

    if close || modal.should_close() {
        state.editing = None;
    }
}

const NO_LEADER_TEXT: &str = "⚠ This group has no leader.";
