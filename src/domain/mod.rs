pub mod entry;
pub mod enums;
pub mod scope;
pub mod views;

pub use entry::{Entry, EntryMap, EntryStore};
pub use enums::{Band, Status, UiMode};
pub use scope::{
    days_in_month, month_short, Scope, DAYS_IN_YEAR, MONTH_NAMES, TRACKED_YEAR,
};
pub use views::{calendar_weeks, grid_rows, GridRow};
