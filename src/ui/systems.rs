use crate::landscape::components::{LandscapeModel, ModelReady};
use crate::landscape::events::{SetTemperature, SetTime, SetWeather, TeardownView};
use crate::landscape::resources::{CurrentWeather, ModelLoad, ModelStatus};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

pub const WEATHER_LABELS: [&str; 5] = ["clear", "cloudy", "rain", "snow", "storm"];

#[derive(Resource, Clone, PartialEq)]
pub struct ControlPanelState {
    pub hour: f32,
    pub temperature: f32,
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self {
            hour: 12.0,
            temperature: 20.0,
        }
    }
}

/// `ready` is whether the spawned scene has been instanced and framed
fn model_status_text(model_load: &ModelLoad, ready: bool) -> String {
    match &model_load.status {
        ModelStatus::NotRequested => "not requested".into(),
        ModelStatus::Loading(_) => format!("loading '{}'...", model_load.url),
        ModelStatus::Spawned(_) if !ready => format!("instancing '{}'...", model_load.url),
        ModelStatus::Spawned(_) => format!("'{}'", model_load.url),
        ModelStatus::Failed => format!("failed to load '{}'", model_load.url),
        ModelStatus::Cancelled => "cancelled".into(),
    }
}

pub fn render_control_panel(
    mut contexts: EguiContexts,
    mut panel: ResMut<ControlPanelState>,
    model_load: Res<ModelLoad>,
    ready_q: Query<(), (With<LandscapeModel>, With<ModelReady>)>,
    current_weather: Res<CurrentWeather>,
    mut time_events: MessageWriter<SetTime>,
    mut temperature_events: MessageWriter<SetTemperature>,
    mut weather_events: MessageWriter<SetWeather>,
    mut teardown_events: MessageWriter<TeardownView>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("landscape_panel")
        .default_width(260.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Landscape");
            let ready = !ready_q.is_empty();
            ui.label(format!("Model: {}", model_status_text(&model_load, ready)));
            ui.add_space(10.0);
            ui.separator();

            ui.label("Time of day (h)");
            if ui
                .add(egui::Slider::new(&mut panel.hour, 0.0..=24.0).step_by(0.25))
                .changed()
            {
                time_events.write(SetTime { hours: panel.hour });
            }

            ui.label("Temperature (°C)");
            if ui
                .add(egui::Slider::new(&mut panel.temperature, -10.0..=50.0).step_by(0.5))
                .changed()
            {
                temperature_events.write(SetTemperature {
                    celsius: panel.temperature,
                });
            }

            ui.add_space(10.0);
            ui.label("Weather");
            ui.horizontal_wrapped(|ui| {
                for label in WEATHER_LABELS {
                    let selected = current_weather.0.as_deref() == Some(label);
                    if ui.selectable_label(selected, label).clicked() && !selected {
                        weather_events.write(SetWeather {
                            label: label.to_string(),
                        });
                    }
                }
            });

            ui.add_space(20.0);
            ui.separator();
            if ui.button("Tear down view").clicked() {
                teardown_events.write(TeardownView);
            }
        });
}
