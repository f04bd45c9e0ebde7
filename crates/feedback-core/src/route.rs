//! Hash Routes
//!
//! Page addresses of the board (`#/roadmap`, `#/feedback-detail/:id`, ...).

use percent_encoding::percent_decode_str;

use crate::api::encode_segment;
use crate::model::FeedbackId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Suggestions,
    FeedbackDetail(FeedbackId),
    NewFeedback,
    EditFeedback(FeedbackId),
    Roadmap,
    NotFound,
}

fn decode_id(segment: &str) -> Option<FeedbackId> {
    let id = percent_decode_str(segment).decode_utf8().ok()?;
    (!id.is_empty()).then(|| FeedbackId::new(id.into_owned()))
}

impl Route {
    /// Parse a location hash (`#/...`); a missing hash is the suggestions page
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [""] | ["suggestions"] => Route::Suggestions,
            ["new-feedback"] => Route::NewFeedback,
            ["roadmap"] => Route::Roadmap,
            ["feedback-detail", id] => decode_id(id).map_or(Route::NotFound, Route::FeedbackDetail),
            ["edit-feedback", id] => decode_id(id).map_or(Route::NotFound, Route::EditFeedback),
            _ => Route::NotFound,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Suggestions => "#/suggestions".to_string(),
            Route::FeedbackDetail(id) => format!("#/feedback-detail/{}", encode_segment(id.as_str())),
            Route::NewFeedback => "#/new-feedback".to_string(),
            Route::EditFeedback(id) => format!("#/edit-feedback/{}", encode_segment(id.as_str())),
            Route::Roadmap => "#/roadmap".to_string(),
            Route::NotFound => "#/not-found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Suggestions);
        assert_eq!(Route::parse("#/"), Route::Suggestions);
        assert_eq!(Route::parse("#/suggestions"), Route::Suggestions);
        assert_eq!(Route::parse("#/roadmap/"), Route::Roadmap);
        assert_eq!(Route::parse("#/new-feedback"), Route::NewFeedback);
        assert_eq!(
            Route::parse("#/feedback-detail/66b2f0"),
            Route::FeedbackDetail(FeedbackId::from("66b2f0"))
        );
        assert_eq!(Route::parse("#/edit-feedback/a%20b"), Route::EditFeedback(FeedbackId::from("a b")));
        assert_eq!(Route::parse("#/feedback-detail"), Route::NotFound);
        assert_eq!(Route::parse("#/login"), Route::NotFound);
    }

    #[test]
    fn test_hash_is_parseable() {
        let routes = [
            Route::Suggestions,
            Route::Roadmap,
            Route::NewFeedback,
            Route::FeedbackDetail(FeedbackId::from("x/y")),
            Route::EditFeedback(FeedbackId::from("42")),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }
}
