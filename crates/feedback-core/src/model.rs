//! Feedback Entities
//!
//! Data structures matching the feedback store's JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned feedback identifier (`_id` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub String);

impl FeedbackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeedbackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "feature")]
    Feature,
    #[serde(rename = "UI", alias = "ui")]
    Ui,
    #[serde(rename = "UX", alias = "ux")]
    Ux,
    #[serde(alias = "enhancement")]
    Enhancement,
    #[serde(alias = "bug")]
    Bug,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Feature,
        Category::Ui,
        Category::Ux,
        Category::Enhancement,
        Category::Bug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Feature => "Feature",
            Category::Ui => "UI",
            Category::Ux => "UX",
            Category::Enhancement => "Enhancement",
            Category::Bug => "Bug",
        }
    }

    /// Exact form label; lowercase server forms are only accepted by serde
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a feedback item
///
/// Serialized with the form labels; the lowercase server forms are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(alias = "suggestion")]
    Suggestion,
    #[serde(alias = "planned")]
    Planned,
    #[serde(rename = "In-Progress", alias = "in-progress")]
    InProgress,
    #[serde(alias = "live")]
    Live,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Suggestion,
        Status::Planned,
        Status::InProgress,
        Status::Live,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Suggestion => "Suggestion",
            Status::Planned => "Planned",
            Status::InProgress => "In-Progress",
            Status::Live => "Live",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Whether items with this status appear on the roadmap board
    pub fn is_roadmap(&self) -> bool {
        match self {
            Status::Planned | Status::InProgress | Status::Live => true,
            Status::Suggestion => false,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub image: String,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "replyingTo")]
    pub replying_to: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Reply>>,
}

impl Comment {
    pub fn replies(&self) -> &[Reply] {
        self.replies.as_deref().unwrap_or_default()
    }
}

/// A feedback item as stored by the feedback store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    #[serde(rename = "_id")]
    pub id: FeedbackId,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub upvotes: u32,
    pub status: Status,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl FeedbackItem {
    pub fn comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or_default()
    }

    /// Number of top-level comments
    pub fn comment_count(&self) -> usize {
        self.comments().len()
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackData {
    pub title: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub description: String,
}

impl From<&FeedbackItem> for FeedbackData {
    fn from(item: &FeedbackItem) -> Self {
        Self {
            title: item.title.clone(),
            category: item.category,
            status: Some(item.status),
            description: item.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_accepts_server_and_form_labels() {
        let lower: Status = serde_json::from_value(json!("in-progress")).unwrap();
        let form: Status = serde_json::from_value(json!("In-Progress")).unwrap();
        assert_eq!(lower, Status::InProgress);
        assert_eq!(form, Status::InProgress);
        assert_eq!(serde_json::to_value(Status::InProgress).unwrap(), json!("In-Progress"));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(serde_json::to_value(Category::Ui).unwrap(), json!("UI"));
        assert_eq!(Category::from_label("UX"), Some(Category::Ux));
        assert_eq!(Category::from_label("ux"), None);
        assert_eq!(Category::from_label("Docs"), None);
        assert_eq!(Status::from_label("In-Progress"), Some(Status::InProgress));
        assert_eq!(Status::from_label("in-progress"), None);
    }

    #[test]
    fn test_feedback_item_from_server_json() {
        let item: FeedbackItem = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "Add tags for solutions",
            "category": "Enhancement",
            "upvotes": 112,
            "status": "suggestion",
            "description": "Easier to search for solutions based on a specific stack.",
            "comments": [{
                "_id": "c1",
                "content": "Awesome idea!",
                "user": { "image": "a.jpg", "name": "Suzanne Chang", "username": "upbeat1811" },
                "replies": [{
                    "_id": "r1",
                    "content": "Agreed.",
                    "replyingTo": "upbeat1811",
                    "user": { "image": "b.jpg", "name": "Anne Valentine", "username": "annev1990" }
                }]
            }]
        }))
        .unwrap();

        assert_eq!(item.id.as_str(), "abc123");
        assert_eq!(item.status, Status::Suggestion);
        assert_eq!(item.comment_count(), 1);
        assert_eq!(item.comments()[0].replies()[0].replying_to, "upbeat1811");
    }

    #[test]
    fn test_missing_comments_count_as_zero() {
        let item: FeedbackItem = serde_json::from_value(json!({
            "_id": "x",
            "title": "Dark mode",
            "category": "Feature",
            "upvotes": 3,
            "status": "Planned",
            "description": "Please add a dark theme."
        }))
        .unwrap();
        assert_eq!(item.comment_count(), 0);
    }

    #[test]
    fn test_feedback_data_omits_absent_status() {
        let data = FeedbackData {
            title: "Add dark mode support".to_string(),
            category: Category::Feature,
            status: None,
            description: "A dark theme for late night browsing..".to_string(),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("status").is_none());
        assert_eq!(value["category"], json!("Feature"));
    }
}
