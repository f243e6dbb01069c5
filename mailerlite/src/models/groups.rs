use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};

const MAX_GROUP_NAME_LEN: usize = 255;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub unsubscribed: u64,
    #[serde(default)]
    pub bounced: u64,
    #[serde(default)]
    pub unconfirmed: u64,
    #[serde(default)]
    pub junk: u64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub opened: u64,
    #[serde(default)]
    pub clicked: u64,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
}

/// Body of the create and rename group calls.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewGroup {
    pub name: String,
}

impl NewGroup {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::invalid("group name cannot be empty"));
        }
        if name.chars().count() > MAX_GROUP_NAME_LEN {
            return Err(Error::invalid(format!(
                "group name cannot be longer than {MAX_GROUP_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberType {
    Active,
    Unsubscribed,
    Bounced,
    Junk,
    Unconfirmed,
}

impl SubscriberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberType::Active => "active",
            SubscriberType::Unsubscribed => "unsubscribed",
            SubscriberType::Bounced => "bounced",
            SubscriberType::Junk => "junk",
            SubscriberType::Unconfirmed => "unconfirmed",
        }
    }
}

impl Display for SubscriberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriberType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(SubscriberType::Active),
            "unsubscribed" => Ok(SubscriberType::Unsubscribed),
            "bounced" => Ok(SubscriberType::Bounced),
            "junk" => Ok(SubscriberType::Junk),
            "unconfirmed" => Ok(SubscriberType::Unconfirmed),
            other => Err(Error::invalid(format!("unknown subscriber type `{other}`"))),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SubscriberField {
    pub key: String,
    pub value: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Subscriber {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub opened: u64,
    #[serde(default)]
    pub clicked: u64,
    #[serde(rename = "type")]
    pub kind: Option<SubscriberType>,
    #[serde(default)]
    pub fields: Vec<SubscriberField>,
    pub date_subscribe: Option<String>,
    pub date_unsubscribe: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
}

/// A subscriber to add to a group, either one at a time or as part of an
/// import.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct NewSubscriber {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resubscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoresponders: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SubscriberType>,
}

impl NewSubscriber {
    pub fn new<S: Into<String>>(email: S) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_email(&self.email)
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ImportRequest {
    pub subscribers: Vec<NewSubscriber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resubscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoresponders: Option<bool>,
}

impl ImportRequest {
    pub fn new(subscribers: Vec<NewSubscriber>) -> Self {
        Self {
            subscribers,
            ..Default::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.subscribers.is_empty() {
            return Err(Error::invalid("import needs at least one subscriber"));
        }
        self.subscribers.iter().try_for_each(NewSubscriber::validate)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ImportResult {
    #[serde(default)]
    pub imported: Vec<Subscriber>,
    #[serde(default)]
    pub updated: Vec<Subscriber>,
    #[serde(default)]
    pub unchanged: Vec<Subscriber>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Loose sanity check: one `@`, something on both sides, no whitespace.
/// MailerLite does the real validation and answers 400 when it disagrees.
pub(crate) fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::invalid(format!("`{email}` is not a valid email address")))
    }
}

/// A subscriber can be addressed by numeric id or by email.
pub(crate) fn validate_subscriber_ref(subscriber: &str) -> Result<()> {
    if subscriber.trim().is_empty() {
        return Err(Error::invalid("subscriber id or email cannot be empty"));
    }
    // It ends up as a raw path segment, and dot segments would be resolved away
    if subscriber.contains(['/', '\\', '?', '#', '%']) || matches!(subscriber, "." | "..") {
        return Err(Error::invalid(format!(
            "`{subscriber}` is not a valid subscriber id or email"
        )));
    }
    Ok(())
}
