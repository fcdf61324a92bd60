//! The table-and-form window.

use std::collections::BTreeSet;

use eframe::egui;
use tracing::{info, warn};

use crate::error::Error;
use crate::form::FormInput;
use crate::journal::Journal;
use crate::measurement::MeasurementKind;

/// Single-window UI over a [`Journal`]: a selectable table of rendered
/// records above an input strip with add and delete actions.
///
/// The table re-renders from the journal every frame, so there is no
/// separate refresh step after a mutation. The window has no modal states.
pub struct MeteoApp {
    journal: Journal,
    form: FormInput,
    /// Selected table rows, by position.
    selected: BTreeSet<usize>,
    /// Outcome of the last add/delete, shown in the status line.
    status: Option<String>,
}

impl MeteoApp {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            form: FormInput::default(),
            selected: BTreeSet::new(),
            status: None,
        }
    }

    /// Open the window and run until it is closed.
    pub fn run(journal: Journal) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([600.0, 400.0])
                .with_min_inner_size([480.0, 320.0]),
            ..Default::default()
        };
        eframe::run_native(
            "Измерения",
            options,
            Box::new(|_cc| Ok(Box::new(MeteoApp::new(journal)))),
        )
    }

    fn add_measurement(&mut self) {
        match self.journal.add(&self.form) {
            Ok(line) => {
                info!(%line, "measurement added");
                self.form.clear_values();
                self.status = Some(format!("Добавлено: {line}"));
            }
            // The record is already in memory; only the file is stale.
            Err(err @ Error::Io(_)) => {
                warn!("save failed after add: {err}");
                self.status = Some(format!("Ошибка сохранения файла: {err}"));
            }
            Err(err) => {
                info!("add rejected: {err}");
                self.status = Some(format!(
                    "Ошибка: {err}. Проверьте формат даты (гггг.мм.дд) и чисел."
                ));
            }
        }
    }

    fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let rows: Vec<usize> = self.selected.iter().copied().collect();
        self.selected.clear();
        match self.journal.remove_rows(rows) {
            Ok(removed) => {
                for record in &removed {
                    info!(%record, "measurement removed");
                }
                self.status = Some(format!("Удалено записей: {}", removed.len()));
            }
            Err(err) => {
                warn!("save failed after delete: {err}");
                self.status = Some(format!("Ошибка сохранения файла: {err}"));
            }
        }
    }

    fn table_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Данные измерения");
        ui.separator();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (row, record) in self.journal.measurements().iter().enumerate() {
                    let is_selected = self.selected.contains(&row);
                    // A click toggles membership, so multi-select needs no
                    // keyboard modifier.
                    if ui.selectable_label(is_selected, record.to_string()).clicked() {
                        if is_selected {
                            self.selected.remove(&row);
                        } else {
                            self.selected.insert(row);
                        }
                    }
                }
            });
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        egui::Grid::new("input_form").num_columns(4).show(ui, |ui| {
            ui.label("Тип:");
            egui::ComboBox::from_id_salt("kind")
                .selected_text(self.form.kind.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.form.kind,
                        MeasurementKind::Temperature,
                        "temperature",
                    );
                    ui.selectable_value(&mut self.form.kind, MeasurementKind::Pressure, "pressure");
                });
            ui.label("Дата (гггг.мм.дд):");
            ui.text_edit_singleline(&mut self.form.date);
            ui.end_row();

            ui.label("Место:");
            ui.text_edit_singleline(&mut self.form.place);
            ui.label("Значение 1:");
            ui.text_edit_singleline(&mut self.form.value1);
            ui.end_row();

            ui.label("");
            ui.label("");
            ui.label("Значение 2:");
            ui.text_edit_singleline(&mut self.form.value2);
            ui.end_row();
        });
        ui.horizontal(|ui| {
            if ui.button("Добавить").clicked() {
                self.add_measurement();
            }
            if ui.button("Удалить").clicked() {
                self.delete_selected();
            }
        });
        if let Some(status) = &self.status {
            ui.separator();
            ui.label(status);
        }
        ui.add_space(4.0);
    }
}

impl eframe::App for MeteoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.form_ui(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.table_ui(ui);
        });
    }
}
