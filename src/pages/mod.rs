//! Pages
//!
//! One component per route.

mod edit_feedback;
mod feedback_detail;
mod new_feedback;
mod not_found;
mod roadmap;
mod suggestions;

pub use edit_feedback::EditFeedbackPage;
pub use feedback_detail::FeedbackDetailPage;
pub use new_feedback::NewFeedbackPage;
pub use not_found::NotFoundPage;
pub use roadmap::RoadmapPage;
pub use suggestions::SuggestionsPage;
