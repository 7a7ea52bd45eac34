use std::time::Instant;

use anyhow::Context;
use eframe::egui::{self, Color32, FontId, RichText, Stroke};
use tracing::info;
use weather_core::{WeatherProvider, lookup};

use crate::{
    sound::{SoundBoard, SoundCue},
    view::ViewState,
};

const CITY_INPUT_ID: &str = "city_input";

/// The single weather window. Every event handler runs to completion on the
/// UI thread before the next event is processed.
#[derive(Debug)]
pub struct WeatherApp {
    city: String,
    view: ViewState,
    sounds: SoundBoard,
    provider: Box<dyn WeatherProvider>,
    runtime: tokio::runtime::Runtime,
    button_hovered: bool,
}

impl WeatherApp {
    pub fn new(provider: Box<dyn WeatherProvider>, sounds: SoundBoard) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the request runtime")?;

        Ok(Self {
            city: String::new(),
            view: ViewState::default(),
            sounds,
            provider,
            runtime,
            button_hovered: false,
        })
    }

    /// Run the query for the current input. Blocks until the request
    /// completes or times out.
    pub fn submit(&mut self) {
        let result = self
            .runtime
            .block_on(lookup(self.provider.as_ref(), &self.city));

        match &result {
            Ok(report) => info!(condition_id = report.condition_id, "Weather query succeeded"),
            Err(err) => info!(error = %err, "Weather query failed"),
        }

        let cue = self.view.apply(&result);
        self.sounds.play(cue, Instant::now());
    }

    /// Plays the hover cue when the pointer enters the button.
    pub fn pointer_over_button(&mut self, hovered: bool, now: Instant) {
        if hovered && !self.button_hovered {
            self.sounds.play(SoundCue::Hover, now);
        }
        self.button_hovered = hovered;
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Enter your city: ")
                .size(40.0)
                .italics()
                .color(Color32::WHITE),
        );
        ui.add_space(8.0);

        let input = ui.add(
            egui::TextEdit::singleline(&mut self.city)
                .id(egui::Id::new(CITY_INPUT_ID))
                .font(FontId::monospace(35.0))
                .desired_width(f32::INFINITY),
        );
        let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);

        let button = ui
            .scope(|ui| {
                button_visuals(ui.visuals_mut());
                ui.add(
                    egui::Button::new(RichText::new("Get weather").size(35.0))
                        .rounding(15.0)
                        .min_size(egui::vec2(ui.available_width(), 0.0)),
                )
            })
            .inner;

        self.pointer_over_button(button.hovered(), Instant::now());
        if button.clicked() || entered {
            self.submit();
        }
        if entered {
            // Enter leaves the cursor in the field, like a return-pressed handler.
            input.request_focus();
        }

        ui.add_space(16.0);

        let color = if self.view.is_error() {
            Color32::RED
        } else {
            Color32::WHITE
        };
        ui.label(
            RichText::new(self.view.temperature())
                .size(self.view.temperature_style().font_size())
                .color(color),
        );
        ui.label(RichText::new(self.view.icon()).size(75.0));
        ui.label(
            RichText::new(self.view.description())
                .size(50.0)
                .color(Color32::WHITE),
        );
    }
}

/// Black text on white at rest; inverted with a white border while the
/// pointer is over the button or it is pressed.
fn button_visuals(visuals: &mut egui::Visuals) {
    let widgets = &mut visuals.widgets;

    widgets.inactive.weak_bg_fill = Color32::WHITE;
    widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::BLACK);
    widgets.inactive.bg_stroke = Stroke::NONE;

    for state in [&mut widgets.hovered, &mut widgets.active] {
        state.weak_bg_fill = Color32::BLACK;
        state.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        state.bg_stroke = Stroke::new(2.5, Color32::WHITE);
    }
}

impl eframe::App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::default()
            .fill(Color32::BLACK)
            .inner_margin(24.0);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| self.show(ui));
        });
    }
}
