//! Summary figures shown as cards on the dashboard home page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Revenue {
    pub amount_cents: i64,
    pub currency: String,
}

impl Revenue {
    /// Formats the amount with two decimals followed by the currency code.
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{sign}{}.{:02} {}", cents / 100, cents % 100, self.currency)
            .trim_end()
            .to_string()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub courses: u64,
    pub chapters: u64,
    pub stories: u64,
    pub music: u64,
    pub games: u64,
    pub users: u64,
    pub new_users_last_30_days: u64,
    pub hospitals: u64,
    pub active_popups: u64,
    pub revenue: Revenue,
}
