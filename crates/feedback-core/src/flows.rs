//! Submission Flows
//!
//! What the forms and the detail page do with the API: validate, send,
//! and say where to navigate next.

use log::info;
use thiserror::Error;

use crate::api::{ApiError, ApiResult, FeedbackApi};
use crate::model::{FeedbackId, FeedbackItem};
use crate::route::Route;
use crate::validation::{validate, FeedbackForm, StatusRule, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("please correct the highlighted fields")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl SubmitError {
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Remote(_) => None,
        }
    }
}

/// Validate and create; lands on the suggestions list
pub async fn submit_new_feedback<A: FeedbackApi + ?Sized>(
    api: &A,
    form: &FeedbackForm,
) -> Result<Route, SubmitError> {
    let data = validate(form, StatusRule::Optional).map_err(SubmitError::Invalid)?;
    let created = api.create(&data).await?;
    info!("[FLOW] created feedback {}", created.id);
    Ok(Route::Suggestions)
}

/// Validate and update; lands back on the item's detail page
pub async fn submit_feedback_edit<A: FeedbackApi + ?Sized>(
    api: &A,
    id: &FeedbackId,
    form: &FeedbackForm,
) -> Result<Route, SubmitError> {
    let data = validate(form, StatusRule::Required).map_err(SubmitError::Invalid)?;
    api.update(id, &data).await?;
    info!("[FLOW] updated feedback {}", id);
    Ok(Route::FeedbackDetail(id.clone()))
}

pub async fn remove_feedback<A: FeedbackApi + ?Sized>(api: &A, id: &FeedbackId) -> Result<Route, ApiError> {
    api.delete(id).await?;
    info!("[FLOW] deleted feedback {}", id);
    Ok(Route::Suggestions)
}

/// What the detail page shows for a fetch result
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(FeedbackItem),
    NotFound(FeedbackId),
    Failed(String),
}

impl DetailState {
    pub fn from_result(result: ApiResult<FeedbackItem>) -> Self {
        match result {
            Ok(item) => DetailState::Loaded(item),
            Err(ApiError::NotFound { id }) => DetailState::NotFound(id),
            Err(err) => DetailState::Failed(err.to_string()),
        }
    }

    pub fn item(&self) -> Option<&FeedbackItem> {
        match self {
            DetailState::Loaded(item) => Some(item),
            _ => None,
        }
    }
}
