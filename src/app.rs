// app.rs — egui shell: commentary inputs on the left, the live comparison
// canvas in the center.

use egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel};

use crate::analysis::AnalysisReport;
use crate::sport::Sport;
use crate::viz::Visualization;

pub struct FormVizApp {
    pub sport_input: String,
    pub skill_input: String,
    pub commentary: String,
    pub report: Option<AnalysisReport>,
    pub viz: Option<Visualization>,
    pub status_message: String,
    pub status_timer: f32,
    surface_warned: bool,
}

impl Default for FormVizApp {
    fn default() -> Self {
        Self {
            sport_input: "basketball".into(),
            skill_input: "Jump shot".into(),
            commentary: String::new(),
            report: None,
            viz: None,
            status_message: String::new(),
            status_timer: 0.0,
            surface_warned: false,
        }
    }
}

impl FormVizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, msg: &str, dur: f32) {
        self.status_message = msg.to_string();
        self.status_timer = dur;
    }

    /// Run the extraction pipeline once and (re)start the visualization.
    /// Extraction happens here, on new commentary only — never per frame.
    pub fn analyze(&mut self) {
        let report = AnalysisReport::from_commentary(&self.commentary);
        let sport = Sport::from_label(&self.sport_input);
        tracing::info!(
            score = ?report.score,
            corrections = report.corrections.len(),
            %sport,
            "analyzed commentary"
        );

        let same_sport = self.viz.as_ref().is_some_and(|v| v.sport() == sport);
        if same_sport {
            // Same sport: keep the running loop, swap the focus set in for
            // the next tick.
            if let Some(viz) = self.viz.as_mut() {
                viz.set_focus(report.focus.clone());
            }
        } else {
            // Replacing drops the old instance and its clock with it; two
            // live loops can never coexist.
            self.viz = Some(Visualization::new(sport, report.focus.clone()));
        }
        self.report = Some(report);
        self.set_status("Commentary analyzed", 2.5);
    }

    fn copy_report_json(&mut self, ctx: &Context) {
        let Some(report) = &self.report else { return };
        match serde_json::to_string_pretty(report) {
            Ok(json) => {
                ctx.copy_text(json);
                self.set_status("Report JSON copied", 2.5);
            }
            Err(err) => {
                tracing::error!(%err, "failed to serialize report");
                self.set_status("Could not serialize report", 2.5);
            }
        }
    }

    fn input_panel(&mut self, ctx: &Context) {
        SidePanel::left("inputs").min_width(300.0).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Attempt details");
            ui.add_space(4.0);
            egui::Grid::new("attempt_fields").num_columns(2).show(ui, |ui| {
                ui.label("Sport:");
                ui.text_edit_singleline(&mut self.sport_input);
                ui.end_row();
                ui.label("Skill:");
                ui.text_edit_singleline(&mut self.skill_input);
                ui.end_row();
            });
            ui.add_space(6.0);
            ui.label("Coach / AI commentary:");
            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.commentary)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY)
                        .hint_text("Paste the feedback text here…"),
                );
            });
            ui.add_space(6.0);
            if ui.button("Analyze commentary").clicked() {
                self.analyze();
            }
            ui.separator();
            self.results_section(ui, ctx);
        });
    }

    fn results_section(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        let Some(report) = self.report.clone() else {
            ui.weak("No analysis yet.");
            return;
        };

        // "No score" renders as N/A, never as zero.
        let score_text = match report.score {
            Some(s) => format!("AI score: {s}/100"),
            None => "AI score: N/A".to_string(),
        };
        ui.label(RichText::new(score_text).strong());
        if let Some(delta) = report.rating_delta {
            let sign = if delta > 0 { "+" } else { "" };
            ui.label(format!("Rating adjustment: {sign}{delta}"));
        }

        if !report.corrections.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new("Key improvements needed:").strong());
            for correction in &report.corrections {
                ui.label(format!("→ {correction}"));
            }
        }
        if let Some(caption) = report.focus.caption() {
            ui.add_space(4.0);
            ui.weak(caption);
        }
        ui.add_space(6.0);
        if ui.button("Copy report JSON").clicked() {
            self.copy_report_json(ctx);
        }
    }

    fn canvas_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Some(viz) = self.viz.as_mut() else {
                ui.centered_and_justified(|ui| {
                    ui.weak("Analyze some commentary to start the comparison.");
                });
                return;
            };
            ui.heading(format!("{} — {}", viz.sport(), self.skill_input));
            ui.add_space(4.0);
            match viz.show(ui) {
                Ok(_) => self.surface_warned = false,
                Err(err) => {
                    // Not fatal: the app keeps running, the canvas just
                    // doesn't mount until there is room for it.
                    if !self.surface_warned {
                        tracing::warn!(%err, "visualization did not start");
                        self.surface_warned = true;
                    }
                    ui.weak("Not enough room to show the comparison.");
                }
            }
        });
    }
}

impl eframe::App for FormVizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.status_timer > 0.0 {
            self.status_timer -= ctx.input(|i| i.stable_dt);
            let msg = self.status_message.clone();
            TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(msg);
            });
        }
        self.input_panel(ctx);
        self.canvas_panel(ctx);
    }
}
