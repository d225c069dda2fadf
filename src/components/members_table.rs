use egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::model::{
    permissions::{is_allowed, ActionKind},
    Group, GroupAction, Member,
};

const ROW_HEIGHT: f32 = 18.;

pub fn members_table(
    ui: &mut Ui,
    group: &Group,
    current_user: &Member,
    actions: &mut Vec<GroupAction>,
) {
    if group.members.is_empty() {
        ui.label(NO_MEMBERS_TEXT);
        return;
    }

    let can_remove = is_allowed(current_user, ActionKind::DeleteMember);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .column(Column::remainder().clip(true))
        .column(Column::auto());
    if can_remove {
        table = table.column(Column::auto());
    }

    table
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Email");
            });
            header.col(|ui| {
                ui.strong("Role");
            });
            if can_remove {
                header.col(|_| {});
            }
        })
        .body(|mut body| {
            for member in &group.members {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(&member.name);
                    });
                    row.col(|ui| {
                        ui.label(&member.email);
                    });
                    row.col(|ui| {
                        ui.label(member.role.label());
                    });
                    if can_remove {
                        row.col(|ui| {
                            if ui
                                .small_button("x")
                                .on_hover_text("remove member")
                                .clicked()
                            {
                                actions.push(GroupAction::DeleteMember(
                                    group.id().clone(),
                                    member.id.clone(),
                                ));
                            }
                        });
                    }
                });
            }
        });
}

const NO_MEMBERS_TEXT: &str = "This group has no members.";
