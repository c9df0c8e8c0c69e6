//! The four selectable data categories.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// One of the four data domains the screen can display.
///
/// Exactly one category is current at any time. The default is
/// [`Category::Users`], which is also what the screen loads first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Users,
    Products,
    News,
    Statistics,
}

impl Category {
    /// All categories in button order.
    pub const ALL: [Category; 4] = [
        Category::Users,
        Category::Products,
        Category::News,
        Category::Statistics,
    ];

    /// Short label used on the category buttons.
    pub fn label(self) -> &'static str {
        match self {
            Category::Users => "Users",
            Category::Products => "Products",
            Category::News => "News",
            Category::Statistics => "Stats",
        }
    }

    /// Emoji shown in front of the button label.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Users => "👥",
            Category::Products => "🛍️",
            Category::News => "📰",
            Category::Statistics => "📊",
        }
    }

    /// Full button text, icon included.
    pub fn button_text(self) -> String {
        format!("{} {}", self.icon(), self.label())
    }

    /// Lowercase name, as used in "Loading users..." and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Category::Users => "users",
            Category::Products => "products",
            Category::News => "news",
            Category::Statistics => "statistics",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Users => 0,
            Category::Products => 1,
            Category::News => 2,
            Category::Statistics => 3,
        }
    }

    /// Category at the given position in [`Category::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next category, wrapping from Statistics back to Users.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category, wrapping from Users to Statistics.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Simulated latency of the local provider for this category.
    pub fn simulated_delay(self) -> Duration {
        match self {
            Category::Users => Duration::from_millis(1500),
            Category::Products => Duration::from_millis(1200),
            Category::News => Duration::from_millis(1000),
            Category::Statistics => Duration::from_millis(800),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" | "user" | "1" => Ok(Category::Users),
            "products" | "product" | "2" => Ok(Category::Products),
            "news" | "3" => Ok(Category::News),
            "statistics" | "stats" | "4" => Ok(Category::Statistics),
            _ => Err(ConfigError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_users() {
        assert_eq!(Category::default(), Category::Users);
    }

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(4), None);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Category::Users.next(), Category::Products);
        assert_eq!(Category::Statistics.next(), Category::Users);
        assert_eq!(Category::Users.previous(), Category::Statistics);
        assert_eq!(Category::News.previous(), Category::Products);
    }

    #[test]
    fn test_button_text() {
        assert_eq!(Category::Users.button_text(), "👥 Users");
        assert_eq!(Category::Statistics.button_text(), "📊 Stats");
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Category::News.to_string(), "news");
        assert_eq!(Category::Statistics.to_string(), "statistics");
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("Users".parse::<Category>(), Ok(Category::Users));
        assert_eq!("stats".parse::<Category>(), Ok(Category::Statistics));
        assert_eq!(" news ".parse::<Category>(), Ok(Category::News));
        assert_eq!("2".parse::<Category>(), Ok(Category::Products));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "weather".parse::<Category>(),
            Err(ConfigError::UnknownCategory("weather".to_string()))
        );
    }

    #[test]
    fn test_simulated_delays_are_ordered() {
        assert!(Category::Users.simulated_delay() > Category::Products.simulated_delay());
        assert!(Category::Products.simulated_delay() > Category::News.simulated_delay());
        assert!(Category::News.simulated_delay() > Category::Statistics.simulated_delay());
    }
}
