//! Domain entities - core business objects

use chrono::{DateTime, SubsecRound, Utc};

mod favorite;
mod notification;

pub use favorite::Favorite;
pub use notification::{NewNotification, Notification, NotificationType};

/// Current time at the precision a `TIMESTAMPTZ` column keeps (microseconds)
///
/// Entities are stamped with this so the value handed back on creation is
/// the same one every later read returns.
pub fn stored_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
