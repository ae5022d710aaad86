pub mod app_grid;
pub mod error_alert;
pub mod layout;
pub mod loading_indicator;
pub mod lock_gate;
pub mod pagination_controls;
pub mod search_box;
pub mod weather_card;

pub use app_grid::AppGrid;
pub use error_alert::ErrorAlert;
pub use loading_indicator::LoadingIndicator;
pub use lock_gate::LockGate;
pub use pagination_controls::PaginationControls;
pub use search_box::{EmptySubmit, SearchBox};
pub use weather_card::WeatherCard;
