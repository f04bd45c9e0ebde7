//! Feedback Comments Component
//!
//! Comment thread of one feedback item. Reply and comment boxes keep their
//! drafts locally; the feedback API has no comment endpoint.

use leptos::prelude::*;

use feedback_core::{Comment, Reply, User};

/// Longest reply or comment draft, in UTF-16 units like `maxlength`
pub const REPLY_MAX: usize = 250;

/// Cut a draft down to `REPLY_MAX`
fn clamp_draft(text: &str) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= REPLY_MAX
        })
        .collect()
}

fn chars_left(draft: &str) -> usize {
    REPLY_MAX.saturating_sub(draft.encode_utf16().count())
}

#[component]
fn ReplyView(reply: Reply) -> impl IntoView {
    let User { image, name, username } = reply.user;
    let alt = name.clone();

    view! {
        <div class="reply">
            <img class="avatar" src=image alt=alt />
            <div class="reply-body">
                <h5>{name}</h5>
                <p class="username">"@" {username}</p>
                <p class="reply-content">
                    <span class="replying-to">"@" {reply.replying_to}</span>
                    " "
                    {reply.content}
                </p>
            </div>
        </div>
    }
}

#[component]
fn CommentView(comment: Comment) -> impl IntoView {
    let (replying, set_replying) = signal(false);
    let draft = RwSignal::new(String::new());
    let replies = comment.replies().to_vec();
    let User { image, name, username } = comment.user;
    let alt = name.clone();

    view! {
        <div class="comment">
            <img class="avatar" src=image alt=alt />
            <div class="comment-body">
                <div class="comment-head">
                    <div>
                        <h4>{name}</h4>
                        <p class="username">"@" {username}</p>
                    </div>
                    <button
                        type="button"
                        class="reply-btn"
                        on:click=move |_| set_replying.set(true)
                    >
                        "Reply"
                    </button>
                </div>
                <p class="comment-content">{comment.content}</p>
                <Show when=move || replying.get()>
                    <div class="reply-form">
                        <textarea
                            placeholder="Type your reply here"
                            maxlength=REPLY_MAX
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(clamp_draft(&event_target_value(&ev)))
                        ></textarea>
                        <button
                            type="button"
                            class="btn-primary"
                            on:click=move |_| {
                                draft.set(String::new());
                                set_replying.set(false);
                            }
                        >
                            "Post Reply"
                        </button>
                    </div>
                </Show>
                <div class="replies">
                    {replies.into_iter().map(|reply| view! { <ReplyView reply=reply /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FeedbackComments(comments: Vec<Comment>) -> impl IntoView {
    let count = comments.len();
    let (comment_draft, set_comment_draft) = signal(String::new());

    view! {
        <section class="comments">
            <div class="comments-list">
                <h3>{count} " Comments"</h3>
                {comments.into_iter().map(|comment| view! { <CommentView comment=comment /> }).collect_view()}
            </div>
            <div class="add-comment">
                <h3>"Add Comment"</h3>
                <textarea
                    placeholder="Type your comment here"
                    maxlength=REPLY_MAX
                    prop:value=move || comment_draft.get()
                    on:input=move |ev| set_comment_draft.set(clamp_draft(&event_target_value(&ev)))
                ></textarea>
                <div class="add-comment-footer">
                    <span>{move || chars_left(&comment_draft.get())} " Characters left"</span>
                    <button type="button" class="btn-primary" on:click=move |_| set_comment_draft.set(String::new())>
                        "Post Comment"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_draft() {
        assert_eq!(clamp_draft("short"), "short");
        let long = "x".repeat(300);
        assert_eq!(clamp_draft(&long).len(), REPLY_MAX);
        // Astral chars count twice
        let emoji = "😀".repeat(200);
        assert_eq!(clamp_draft(&emoji).chars().count(), 125);
    }

    #[test]
    fn test_chars_left() {
        assert_eq!(chars_left(""), 250);
        assert_eq!(chars_left("hello"), 245);
        assert_eq!(chars_left(&"x".repeat(260)), 0);
    }
}
