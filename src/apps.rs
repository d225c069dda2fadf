mod dashboard;
mod groups;
pub(crate) mod utils;

use eframe::{egui, App};
use egui::global_theme_preference_switch;
use tracing::{debug, error, info};

use crate::{
    config::Settings,
    model::{
        nav::{self, DashboardNav, DASHBOARD_NAVS},
        Groups, Member,
    },
};

use self::{dashboard::Dashboard, groups::GroupsManagement};

pub struct State {
    groups: Groups,
    current_user: Member,
    groups_management: GroupsManagement,
    dashboard: Dashboard,
    selected_anchor: &'static DashboardNav,
}

pub struct GroupApp {
    state: State,
}

impl GroupApp {
    pub fn init(settings: &Settings) -> Self {
        let groups = settings.load_groups().unwrap_or_else(|err| {
            error!(
                msg = format!("Loading groups from the seed file failed, using the built in seed: [{err}]")
            );
            Groups::seeded()
        });
        let current_user = settings.current_user();
        info!(
            groups = groups.len(),
            user = %current_user.id,
            role = %current_user.role,
            "starting group manager"
        );

        Self {
            state: State {
                groups,
                current_user,
                groups_management: GroupsManagement::default(),
                dashboard: Dashboard,
                selected_anchor: nav::find("groups").unwrap_or(&DASHBOARD_NAVS[0]),
            },
        }
    }

    fn bar_contents(&mut self, ui: &mut egui::Ui) {
        global_theme_preference_switch(ui);

        ui.separator();

        let user = &self.state.current_user;
        ui.label(format!("{} ({})", user.name, user.role.label()));

        ui.separator();

        let mut selected_anchor = self.state.selected_anchor;
        for nav in DASHBOARD_NAVS.iter() {
            let label = format!("{} {}", nav.icon.glyph(), nav.title());
            if ui
                .selectable_label(selected_anchor.link == nav.link, label)
                .on_hover_text(format!("/{}", nav.link))
                .clicked()
            {
                debug!(section = nav.name, icon = nav.icon.as_str(), "selected section");
                selected_anchor = nav;
            }
        }
        self.state.selected_anchor = selected_anchor;
    }

    fn show_selected_app(&mut self, ctx: &egui::Context) {
        let State {
            groups,
            current_user,
            groups_management,
            dashboard,
            selected_anchor,
        } = &mut self.state;

        egui::CentralPanel::default().show(ctx, |ui| match selected_anchor.name {
            "groups" => groups_management.view(ui, groups, current_user),
            "dashboard" => dashboard.view(ui, groups),
            _ => {
                ui.heading(selected_anchor.title());
                ui.label(UNAVAILABLE_SECTION_TEXT);
            }
        });
    }
}

impl App for GroupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("wrap_app_top_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.visuals_mut().button_frame = false;
                self.bar_contents(ui);
            });
        });
        self.show_selected_app(ctx);
    }
}

const UNAVAILABLE_SECTION_TEXT: &str = "This section has nothing to show yet.";
