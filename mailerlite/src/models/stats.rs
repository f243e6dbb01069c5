use serde::{Deserialize, Serialize};

/// Account-wide totals as reported by `GET /stats`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Stats {
    #[serde(default)]
    pub subscribed: u64,
    #[serde(default)]
    pub unsubscribed: u64,
    #[serde(default)]
    pub campaigns: u64,
    #[serde(default)]
    pub sent_emails: u64,
    #[serde(default)]
    pub open_rate: f64,
    #[serde(default)]
    pub click_rate: f64,
    #[serde(default)]
    pub bounce_rate: f64,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Account {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub subdomain: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct AccountEnvelope {
    pub account: Account,
}
