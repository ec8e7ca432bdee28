//! Terminal UI: play against the computer with turn pacing, score keeping
//! and transient notifications.

mod app;
mod game_view;
mod notification;

pub use app::App;
pub use notification::{Notification, NotificationKind};
