use chrono::NaiveDateTime;

use crate::domain::Route;

/// Programmatic navigation to another client route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
