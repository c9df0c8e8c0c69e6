//! The state behind the Data Sources screen.

use crate::error::FetchError;
use crate::models::{Category, CategoryData, UserRecord};

use super::ContentView;

/// Result lists for all four categories.
///
/// After any completed fetch at most one of them is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryResults {
    users: Vec<UserRecord>,
    products: Vec<String>,
    news: Vec<String>,
    statistics: Vec<String>,
}

impl CategoryResults {
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn news(&self) -> &[String] {
        &self.news
    }

    pub fn statistics(&self) -> &[String] {
        &self.statistics
    }

    /// Text lines for a text category; `None` for Users.
    pub fn lines(&self, category: Category) -> Option<&[String]> {
        match category {
            Category::Users => None,
            Category::Products => Some(&self.products),
            Category::News => Some(&self.news),
            Category::Statistics => Some(&self.statistics),
        }
    }

    /// Number of entries stored for `category`.
    pub fn len_of(&self, category: Category) -> usize {
        match category {
            Category::Users => self.users.len(),
            Category::Products => self.products.len(),
            Category::News => self.news.len(),
            Category::Statistics => self.statistics.len(),
        }
    }

    pub fn is_empty_for(&self, category: Category) -> bool {
        self.len_of(category) == 0
    }

    /// Number of categories whose list is non-empty.
    pub fn non_empty_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| !self.is_empty_for(**c))
            .count()
    }

    /// Store `data` under its category and empty every sibling list.
    pub(crate) fn replace_exclusive(&mut self, data: CategoryData) {
        *self = Self::default();
        match data {
            CategoryData::Users(users) => self.users = users,
            CategoryData::Products(lines) => self.products = lines,
            CategoryData::News(lines) => self.news = lines,
            CategoryData::Statistics(lines) => self.statistics = lines,
        }
    }

    pub(crate) fn clear(&mut self, category: Category) {
        match category {
            Category::Users => self.users.clear(),
            Category::Products => self.products.clear(),
            Category::News => self.news.clear(),
            Category::Statistics => self.statistics.clear(),
        }
    }
}

/// Observable state of the Data Sources screen.
///
/// Fields are read-only from outside the crate; only the coordinator moves
/// the state through its transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    current_category: Category,
    is_loading: bool,
    error_message: Option<String>,
    results: CategoryResults,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(Category::Users)
    }
}

impl ScreenState {
    /// Idle state with `category` current and nothing loaded.
    pub fn new(category: Category) -> Self {
        Self {
            current_category: category,
            is_loading: false,
            error_message: None,
            results: CategoryResults::default(),
        }
    }

    pub fn current_category(&self) -> Category {
        self.current_category
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn results(&self) -> &CategoryResults {
        &self.results
    }

    pub fn users(&self) -> &[UserRecord] {
        self.results.users()
    }

    pub fn products(&self) -> &[String] {
        self.results.products()
    }

    pub fn news(&self) -> &[String] {
        self.results.news()
    }

    pub fn statistics(&self) -> &[String] {
        self.results.statistics()
    }

    /// What the content area shows, in priority order: loading, error, the
    /// current category's list, then the empty state.
    pub fn content(&self) -> ContentView<'_> {
        let category = self.current_category;
        if self.is_loading {
            return ContentView::Loading { category };
        }
        if let Some(message) = self.error_message.as_deref() {
            return ContentView::Error { category, message };
        }
        match category {
            Category::Users if !self.results.users.is_empty() => {
                ContentView::Users(&self.results.users)
            }
            Category::Users => ContentView::Empty { category },
            _ => match self.results.lines(category) {
                Some(lines) if !lines.is_empty() => ContentView::Lines { category, lines },
                _ => ContentView::Empty { category },
            },
        }
    }

    /// Selection transition: make `category` current, start loading, clear
    /// the error. Lists are left alone until the fetch resolves.
    pub(crate) fn begin_fetch(&mut self, category: Category) {
        self.current_category = category;
        self.is_loading = true;
        self.error_message = None;
    }

    /// A fetch for the current category succeeded.
    pub(crate) fn complete_success(&mut self, data: CategoryData) {
        self.results.replace_exclusive(data);
        self.is_loading = false;
    }

    /// A fetch for the current category failed. The category's own list is
    /// dropped so a list and an error are never shown for it together.
    pub(crate) fn complete_failure(&mut self, error: &FetchError) {
        self.results.clear(self.current_category);
        self.is_loading = false;
        self.error_message = Some(error.user_message().to_string());
    }

    /// Stop loading without touching anything else (teardown).
    pub(crate) fn abandon_loading(&mut self) {
        self.is_loading = false;
    }
}
