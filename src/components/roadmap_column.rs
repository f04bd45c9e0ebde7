//! Roadmap Column Component
//!
//! One status column of the roadmap. Cards are draggable with
//! leptos-dragdrop; gaps between cards are drop slots.

use leptos::prelude::*;
use leptos_dragdrop::*;

use feedback_core::{FeedbackItem, Status};

use crate::components::FeedbackCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Column subtitle
pub fn column_blurb(status: Status) -> &'static str {
    match status {
        Status::Planned => "Ideas prioritized for research",
        Status::InProgress => "Currently being developed",
        Status::Live => "Released features",
        Status::Suggestion => "",
    }
}

/// Accent color of a column
pub fn column_color(status: Status) -> &'static str {
    match status {
        Status::Planned => "#F49F85",
        Status::InProgress => "#AD1FEA",
        Status::Live => "#62BCFA",
        Status::Suggestion => "#647196",
    }
}

/// Drop slot rendered before card `index` (or after the last card)
#[component]
fn DropGap(dnd: DndSignals<Status>, slot: Slot<Status>, #[prop(optional)] tail: bool) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let is_target = move || dnd.drop_target_read.get() == Some(slot);
    let is_dragging = move || dnd.dragging_read.get().is_some();

    view! {
        <div
            class=move || {
                let mut c = String::from("drop-gap");
                if tail { c.push_str(" tail"); }
                if is_target() { c.push_str(" active"); }
                if !is_dragging() { c.push_str(" hidden"); }
                c
            }
            on:mouseenter=on_mouseenter
        ></div>
    }
}

#[component]
fn DraggableCard(dnd: DndSignals<Status>, slot: Slot<Status>, item: FeedbackItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id.clone();

    let on_mousedown = make_on_mousedown(dnd, slot);
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let is_dragging = move || dnd.dragging_read.get() == Some(slot);
    let is_target = move || dnd.drop_target_read.get() == Some(slot);
    let is_syncing = Memo::new(move |_| store.board().with(|board| board.is_syncing(&id)));

    view! {
        <div
            class=move || {
                let mut c = String::from("roadmap-card");
                if is_dragging() { c.push_str(" dragging"); }
                if is_target() { c.push_str(" drop-before"); }
                if is_syncing.get() { c.push_str(" syncing"); }
                c
            }
            style=format!("border-top-color: {};", column_color(slot.column))
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:click=move |ev| {
                // The release of a drag must not follow the title link
                if dnd.drag_just_ended_read.get_untracked() {
                    ev.prevent_default();
                }
            }
        >
            <FeedbackCard item=item show_status=true />
            <Show when=move || is_syncing.get()>
                <span class="sync-marker">"Saving…"</span>
            </Show>
        </div>
    }
}

#[component]
pub fn RoadmapColumn(
    status: Status,
    dnd: DndSignals<Status>,
    /// Mobile tabs show cards without drag-and-drop
    #[prop(default = true)]
    draggable: bool,
) -> impl IntoView {
    let store = use_app_store();
    let items = Memo::new(move |_| {
        store
            .board()
            .with(|board| board.columns().get(status).map(|c| c.items.clone()).unwrap_or_default())
    });
    let on_mouseleave = make_on_mouseleave(dnd);

    view! {
        <section class="roadmap-column" on:mouseleave=on_mouseleave>
            <h3>{status.as_str()} " (" {move || items.with(Vec::len)} ")"</h3>
            <p class="roadmap-column-blurb">{column_blurb(status)}</p>
            <div class="roadmap-column-cards">
                {move || {
                    let items = items.get();
                    let len = items.len();
                    if !draggable {
                        return items
                            .into_iter()
                            .map(|item| view! { <FeedbackCard item=item show_status=true /> })
                            .collect_view()
                            .into_any();
                    }
                    view! {
                        {items.into_iter().enumerate().map(|(index, item)| {
                            let slot = Slot::new(status, index);
                            view! {
                                <DropGap dnd=dnd slot=slot />
                                <DraggableCard dnd=dnd slot=slot item=item />
                            }
                        }).collect_view()}
                        <DropGap dnd=dnd slot=Slot::new(status, len) tail=true />
                    }
                    .into_any()
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_blurbs() {
        assert_eq!(column_blurb(Status::Planned), "Ideas prioritized for research");
        assert_eq!(column_blurb(Status::InProgress), "Currently being developed");
        assert_eq!(column_blurb(Status::Live), "Released features");
        assert_eq!(column_color(Status::InProgress), "#AD1FEA");
    }
}
