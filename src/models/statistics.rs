//! Randomly generated figures for the Statistics category.
//!
//! The values are flavor data. They are drawn from an injected
//! [`RandomSource`] so tests can pin them or check only their shape.

use std::ops::Range;

use crate::traits::RandomSource;

pub const REVENUE_RANGE: Range<u32> = 50_000..150_000;
pub const ACTIVE_USERS_RANGE: Range<u32> = 10_000..50_000;
pub const GROWTH_RATE_RANGE: Range<f64> = 5.0..25.0;
pub const SATISFACTION_RANGE: Range<f64> = 85.0..98.0;
pub const CONVERSION_RATE_RANGE: Range<f64> = 2.0..8.0;
pub const RESPONSE_TIME_RANGE: Range<u32> = 50..200;
pub const RETURN_CUSTOMERS_RANGE: Range<f64> = 60.0..85.0;
pub const MOBILE_USERS_RANGE: Range<f64> = 65.0..80.0;
pub const COUNTRIES_RANGE: Range<u32> = 25..50;
pub const TICKETS_RANGE: Range<u32> = 100..500;

/// One draw of the dashboard figures.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    pub revenue: u32,
    pub active_users: u32,
    pub growth_rate: f64,
    pub satisfaction: f64,
    pub conversion_rate: f64,
    pub response_time_ms: u32,
    pub return_customers: f64,
    pub mobile_users: f64,
    pub countries: u32,
    pub tickets_resolved: u32,
}

impl StatisticsSnapshot {
    /// Draw a fresh set of figures from `random`.
    pub fn generate(random: &mut dyn RandomSource) -> Self {
        Self {
            revenue: random.int_in(REVENUE_RANGE),
            active_users: random.int_in(ACTIVE_USERS_RANGE),
            growth_rate: random.float_in(GROWTH_RATE_RANGE),
            satisfaction: random.float_in(SATISFACTION_RANGE),
            conversion_rate: random.float_in(CONVERSION_RATE_RANGE),
            response_time_ms: random.int_in(RESPONSE_TIME_RANGE),
            return_customers: random.float_in(RETURN_CUSTOMERS_RANGE),
            mobile_users: random.float_in(MOBILE_USERS_RANGE),
            countries: random.int_in(COUNTRIES_RANGE),
            tickets_resolved: random.int_in(TICKETS_RANGE),
        }
    }

    /// Format the figures as the ten display lines of the Statistics list.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("💰 Monthly Revenue: ${}", format_thousands(self.revenue.into())),
            format!("👥 Active Users: {}", format_thousands(self.active_users.into())),
            format!("📈 Growth Rate: {:.1}%", self.growth_rate),
            format!("⭐ Customer Satisfaction: {:.1}%", self.satisfaction),
            format!("🎯 Conversion Rate: {:.2}%", self.conversion_rate),
            format!("⏱️ Avg. Response Time: {}ms", self.response_time_ms),
            format!("🔄 Return Customers: {:.1}%", self.return_customers),
            format!("📱 Mobile Users: {:.1}%", self.mobile_users),
            format!("🌐 Global Reach: {} countries", self.countries),
            format!("💬 Support Tickets: {} resolved", self.tickets_resolved),
        ]
    }
}

/// Format an integer with comma thousands separators (`75000` -> `75,000`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
