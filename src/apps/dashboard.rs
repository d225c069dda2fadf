use std::collections::HashMap;

use egui::{Grid, Ui};
use egui_plot::{Bar, BarChart, Plot};
use itertools::Itertools;

use crate::model::{Groups, Status};

pub(super) struct Dashboard;

#[derive(Debug, PartialEq)]
struct Summary {
    per_status: HashMap<Status, usize>,
    members: usize,
    leaderless: usize,
    average_rating: Option<f32>,
}

impl Summary {
    fn of(groups: &Groups) -> Self {
        let per_status = groups.iter().counts_by(|group| group.status);
        let members = groups.iter().map(|group| group.members.len()).sum();
        let leaderless = groups.iter().filter(|group| !group.has_leader()).count();
        let average_rating = (!groups.is_empty())
            .then(|| groups.iter().map(|group| group.rating).sum::<f32>() / groups.len() as f32);
        Self {
            per_status,
            members,
            leaderless,
            average_rating,
        }
    }

    fn count(&self, status: Status) -> usize {
        self.per_status.get(&status).copied().unwrap_or(0)
    }
}

fn rating_bars(groups: &Groups) -> Vec<Bar> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| Bar::new(index as f64, f64::from(group.rating)).name(&group.name))
        .collect()
}

impl Dashboard {
    pub(super) fn view(&mut self, ui: &mut Ui, groups: &Groups) {
        ui.heading("Dashboard");

        let summary = Summary::of(groups);
        Grid::new("group summary").striped(true).show(ui, |ui| {
            for status in Status::ALL {
                ui.label(status.label());
                ui.label(summary.count(status).to_string());
                ui.end_row();
            }
            ui.label("Members");
            ui.label(summary.members.to_string());
            ui.end_row();
            ui.label("Without leader");
            ui.label(summary.leaderless.to_string());
            ui.end_row();
            ui.label("Average rating");
            ui.label(
                summary
                    .average_rating
                    .map_or_else(|| String::from("-"), |rating| format!("{rating:.2}")),
            );
            ui.end_row();
        });

        ui.separator();
        ui.label("ratings per group");
        let bars = rating_bars(groups);
        Plot::new("group ratings")
            .view_aspect(2.0)
            .include_y(0.)
            .include_y(5.)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("ratings", bars));
            });
    }
}
