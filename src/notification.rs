//! Notification module for wayfinder
//!
//! Transient one-line messages (validation problems, hints) shown at the
//! bottom of the screen until they expire.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState};
