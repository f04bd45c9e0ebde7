//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod feedback_card;
mod feedback_comments;
mod feedback_form;
mod header;
mod option_picker;
mod roadmap_column;
mod sidebar;
mod sync_notice;

pub use delete_confirm_button::DeleteConfirmButton;
pub use feedback_card::FeedbackCard;
pub use feedback_comments::FeedbackComments;
pub use feedback_form::{FeedbackFormFields, FormSignals};
pub use header::SuggestionsHeader;
pub use option_picker::OptionPicker;
pub use roadmap_column::RoadmapColumn;
pub use sidebar::Sidebar;
pub use sync_notice::SyncNotice;
