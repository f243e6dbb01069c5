use super::Rate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// The three buckets `GET /campaigns/{status}` can list.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Sent,
    Draft,
    Outbox,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Sent => "sent",
            CampaignStatus::Draft => "draft",
            CampaignStatus::Outbox => "outbox",
        }
    }
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sent" => Ok(CampaignStatus::Sent),
            "draft" => Ok(CampaignStatus::Draft),
            "outbox" => Ok(CampaignStatus::Outbox),
            other => Err(Error::invalid(format!("unknown campaign status `{other}`"))),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Regular,
    Ab,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub name: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub date_created: Option<String>,
    pub date_send: Option<String>,
    #[serde(default)]
    pub total_recipients: u64,
    #[serde(default)]
    pub opened: Rate,
    #[serde(default)]
    pub clicked: Rate,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbSendType {
    Subject,
    Sender,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbWinType {
    Opens,
    Clicks,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinnerAfterUnit {
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "d")]
    Days,
}

/// Split-test settings, only valid on `ab` campaigns.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AbSettings {
    pub send_type: AbSendType,
    pub values: Vec<String>,
    pub ab_win_type: AbWinType,
    pub winner_after: u32,
    pub winner_after_type: WinnerAfterUnit,
    /// Percentage of recipients that receive the test variants.
    pub split_part: u8,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct NewCampaign {
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ab_settings: Option<AbSettings>,
}

impl NewCampaign {
    pub fn regular<S: Into<String>>(subject: S, groups: Vec<u64>) -> Self {
        Self {
            subject: subject.into(),
            groups,
            ..Default::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(Error::invalid("campaign subject cannot be empty"));
        }
        if self.groups.is_empty() && self.segments.is_empty() {
            return Err(Error::invalid("campaign needs at least one group or segment"));
        }
        if let Some(from) = &self.from {
            super::groups::validate_email(from)?;
        }
        match (self.kind, &self.ab_settings) {
            (CampaignType::Ab, None) => Err(Error::invalid("ab campaigns need ab_settings")),
            (CampaignType::Regular, Some(_)) => {
                Err(Error::invalid("ab_settings can only be set on ab campaigns"))
            }
            (CampaignType::Ab, Some(ab)) => {
                if ab.values.len() < 2 {
                    return Err(Error::invalid("ab_settings needs at least two values"));
                }
                if ab.split_part == 0 || ab.split_part > 100 {
                    return Err(Error::invalid("ab_settings split_part must be in 1..=100"));
                }
                Ok(())
            }
            (CampaignType::Regular, None) => Ok(()),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CreatedCampaign {
    pub id: u64,
    pub mail_id: Option<u64>,
    pub campaign_type: Option<String>,
    pub campaign_name: Option<String>,
    pub date: Option<String>,
    pub account_id: Option<u64>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct CampaignContent {
    pub html: String,
    pub plain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_inline: Option<bool>,
}

impl CampaignContent {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.html.trim().is_empty() {
            return Err(Error::invalid("campaign html content cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendType {
    #[default]
    Immediate,
    Scheduled,
}

// The API takes the send type as a bare integer.
impl Serialize for SendType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SendType::Immediate => serializer.serialize_u8(1),
            SendType::Scheduled => serializer.serialize_u8(2),
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SendOptions {
    #[serde(rename = "type")]
    pub send_type: SendType,
    /// `YYYY-MM-DD HH:MM`, required for scheduled sends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<u32>,
}

impl SendOptions {
    pub fn now() -> Self {
        Self::default()
    }

    pub fn scheduled<S: Into<String>>(date: S) -> Self {
        Self {
            send_type: SendType::Scheduled,
            date: Some(date.into()),
            timezone_id: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match (self.send_type, self.date.as_deref()) {
            (SendType::Scheduled, None) => Err(Error::invalid("scheduled sends need a date")),
            (_, Some(date)) if !is_schedule_date(date) => Err(Error::invalid(format!(
                "`{date}` is not a `YYYY-MM-DD HH:MM` date"
            ))),
            _ => Ok(()),
        }
    }
}

fn is_schedule_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[derive(Deserialize)]
pub(crate) struct CampaignCount {
    pub count: u64,
}
