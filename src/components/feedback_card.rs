//! Feedback Card Component

use leptos::prelude::*;

use feedback_core::{FeedbackItem, Route};

/// One feedback summary: upvotes, title link, description, category, comment count
#[component]
pub fn FeedbackCard(
    item: FeedbackItem,
    /// Show the status marker (roadmap cards)
    #[prop(optional)]
    show_status: bool,
) -> impl IntoView {
    let href = Route::FeedbackDetail(item.id.clone()).to_hash();
    let status = item.status;
    let comment_count = item.comment_count();

    view! {
        <article class="feedback-card">
            {show_status.then(|| view! {
                <span class="feedback-card-status" data-status=status.as_str()>{status.as_str()}</span>
            })}
            <div class="feedback-card-upvotes">
                <span class="upvote-arrow">"▲"</span>
                <span class="upvote-count">{item.upvotes}</span>
            </div>
            <div class="feedback-card-body">
                <a class="feedback-card-title" href=href>
                    <h3>{item.title}</h3>
                </a>
                <p class="feedback-card-description">{item.description}</p>
                <span class="category-tag">{item.category.as_str()}</span>
            </div>
            <div class="feedback-card-comments">
                <span class="comment-icon">"💬"</span>
                <span class="comment-count">{comment_count}</span>
            </div>
        </article>
    }
}
