use super::Rate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub id: u64,
    pub title: String,
    pub filter: Option<serde_json::Value>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub opened: Rate,
    #[serde(default)]
    pub clicked: Rate,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub timed_out: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub total_pages: u64,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SegmentMeta {
    #[serde(default)]
    pub pagination: Pagination,
}

/// Segments are the one v2 list endpoint that wraps its items in a
/// `data`/`meta` envelope.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SegmentPage {
    pub data: Vec<Segment>,
    #[serde(default)]
    pub meta: SegmentMeta,
}
