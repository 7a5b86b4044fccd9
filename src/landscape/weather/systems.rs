use crate::landscape::events::SetWeather;
use crate::landscape::resources::CurrentWeather;
use bevy::prelude::*;

/// Remember the requested weather. There is no visual effect yet.
pub fn record_weather(
    mut weather_events: MessageReader<SetWeather>,
    mut current: ResMut<CurrentWeather>,
) {
    for event in weather_events.read() {
        info!("setWeather: {}", event.label);
        current.0 = Some(event.label.clone());
    }
}
