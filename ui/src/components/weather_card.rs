use providers::weather::{CurrentWeather, WeatherClient, HOME_CITY};
use yew::prelude::*;

use crate::components::{ErrorAlert, LoadingIndicator};
use crate::config;
use crate::hooks::use_tracked_fetch;

/// Current conditions for the home city, shown at the top of the
/// dashboard. Fetches once on mount.
#[function_component]
pub fn WeatherCard() -> Html {
    let fetch = use_tracked_fetch((), true, |_| async {
        let client = WeatherClient::new(config::keys().openweather)?;
        client.current(HOME_CITY).await
    });

    let today = jiff::Zoned::now().strftime("%A, %B %d").to_string();

    html! {
        <div
            class="bg-gradient-to-br from-blue-500 to-blue-700 rounded-xl \
                   shadow-lg p-6 text-white"
        >
            if let Some(message) = fetch.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if let Some(weather) = &fetch.data {
                <WeatherBody weather={weather.clone()} {today} />
            } else if fetch.status.is_loading() {
                <LoadingIndicator label="Checking the weather..." />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BodyProps {
    weather: CurrentWeather,
    today: String,
}

#[function_component]
fn WeatherBody(props: &BodyProps) -> Html {
    let weather = &props.weather;

    html! {
        <div class="flex items-center justify-between">
            <div>
                <h2 class="text-2xl font-bold">{&weather.name}</h2>
                <p class="text-blue-100 text-sm">{&props.today}</p>
                <p class="text-4xl font-bold mt-2">
                    {format!("{:.0}\u{b0}C", weather.main.temp)}
                </p>
                <p class="text-blue-100 text-sm">
                    {format!("Feels like {:.0}\u{b0}C \u{b7} Humidity {}%",
                        weather.main.feels_like, weather.main.humidity)}
                </p>
            </div>
            if let Ok(condition) = weather.condition() {
                <div class="text-center">
                    <img
                        src={CurrentWeather::icon_url(&condition.icon)}
                        alt={condition.description.clone()}
                        class="w-24 h-24"
                    />
                    <p class="capitalize text-blue-100">
                        {&condition.description}
                    </p>
                </div>
            }
        </div>
    }
}
