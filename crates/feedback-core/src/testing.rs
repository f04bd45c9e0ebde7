//! Test fixtures shared by the unit tests

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, FeedbackApi};
use crate::model::{Category, Comment, FeedbackData, FeedbackId, FeedbackItem, Status, User};

pub fn make_item(id: &str, status: Status) -> FeedbackItem {
    FeedbackItem {
        id: FeedbackId::from(id),
        title: format!("Feedback {}", id),
        category: Category::Feature,
        upvotes: 0,
        status,
        description: format!("Description of feedback {}", id),
        comments: None,
    }
}

pub fn make_comment(id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        content: format!("Comment {}", id),
        user: User {
            image: "./assets/user-images/image-elijah.jpg".to_string(),
            name: "Elijah Moss".to_string(),
            username: "hexagon.bestagon".to_string(),
        },
        replies: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(FeedbackData),
    List,
    Get(FeedbackId),
    Update(FeedbackId, FeedbackData),
    Delete(FeedbackId),
}

impl Call {
    pub fn data(&self) -> Option<&FeedbackData> {
        match self {
            Call::Create(data) | Call::Update(_, data) => Some(data),
            _ => None,
        }
    }
}

/// In-memory `FeedbackApi` that records every request
#[derive(Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    items: RefCell<Vec<FeedbackItem>>,
    failure: Option<ApiError>,
}

impl RecordingApi {
    pub fn failing(error: ApiError) -> Self {
        Self { failure: Some(error), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn build(id: FeedbackId, data: &FeedbackData) -> FeedbackItem {
        FeedbackItem {
            id,
            title: data.title.clone(),
            category: data.category,
            upvotes: 0,
            status: data.status.unwrap_or(Status::Suggestion),
            description: data.description.clone(),
            comments: None,
        }
    }
}

#[async_trait(?Send)]
impl FeedbackApi for RecordingApi {
    async fn create(&self, data: &FeedbackData) -> ApiResult<FeedbackItem> {
        self.record(Call::Create(data.clone()))?;
        let id = FeedbackId::new(format!("new-{}", self.items.borrow().len() + 1));
        let item = Self::build(id, data);
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> ApiResult<Vec<FeedbackItem>> {
        self.record(Call::List)?;
        Ok(self.items.borrow().clone())
    }

    async fn get(&self, id: &FeedbackId) -> ApiResult<FeedbackItem> {
        self.record(Call::Get(id.clone()))?;
        self.items
            .borrow()
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound { id: id.clone() })
    }

    async fn update(&self, id: &FeedbackId, data: &FeedbackData) -> ApiResult<FeedbackItem> {
        self.record(Call::Update(id.clone(), data.clone()))?;
        Ok(Self::build(id.clone(), data))
    }

    async fn delete(&self, id: &FeedbackId) -> ApiResult<()> {
        self.record(Call::Delete(id.clone()))?;
        self.items.borrow_mut().retain(|i| &i.id != id);
        Ok(())
    }
}
