mod app_events;
mod app_render;
mod app_state;
pub mod users;

pub use app_state::App;
