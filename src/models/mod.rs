//! Data model for the Data Sources screen.
//!
//! - [`Category`] - the four selectable data domains
//! - [`UserRecord`] - a single user as returned by a provider
//! - [`CategoryData`] - one category's fetched result list
//! - [`StatisticsSnapshot`] - randomly generated dashboard figures

mod category;
mod data;
pub mod statistics;
mod user;

pub use category::Category;
pub use data::CategoryData;
pub use statistics::{format_thousands, StatisticsSnapshot};
pub use user::UserRecord;
