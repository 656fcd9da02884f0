#[cfg(feature = "serde")]
use serde::Serialize;

/// Raw event fields as declared by the markup at the time of the click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct EventData {
    pub title: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub location: String,
}
