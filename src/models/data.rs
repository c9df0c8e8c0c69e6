//! A fetched result list tagged with its category.

use super::{Category, UserRecord};

/// The result of one successful fetch.
///
/// Users carry structured records; the other three categories are plain
/// display-ready text lines.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryData {
    Users(Vec<UserRecord>),
    Products(Vec<String>),
    News(Vec<String>),
    Statistics(Vec<String>),
}

impl CategoryData {
    /// The category this list belongs to.
    pub fn category(&self) -> Category {
        match self {
            CategoryData::Users(_) => Category::Users,
            CategoryData::Products(_) => Category::Products,
            CategoryData::News(_) => Category::News,
            CategoryData::Statistics(_) => Category::Statistics,
        }
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        match self {
            CategoryData::Users(users) => users.len(),
            CategoryData::Products(lines)
            | CategoryData::News(lines)
            | CategoryData::Statistics(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
