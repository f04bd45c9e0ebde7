//! Leptos DragDrop Utilities
//!
//! Column drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! each gesture as a [`DragEnd`] with a source slot and an optional
//! destination slot.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Anything usable as a column identifier
pub trait ColumnKey: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> ColumnKey for T {}

/// A position in a column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<C> {
    pub column: C,
    pub index: usize,
}

impl<C> Slot<C> {
    pub fn new(column: C, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a finished drag gesture. `destination` is the final index of
/// the dragged card, or `None` when it was released outside every column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEnd<C> {
    pub source: Slot<C>,
    pub destination: Option<Slot<C>>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<C: ColumnKey> {
    /// Slot of the card being dragged
    pub dragging_read: ReadSignal<Option<Slot<C>>>,
    pub dragging_write: WriteSignal<Option<Slot<C>>>,
    /// Slot the card would be inserted before
    pub drop_target_read: ReadSignal<Option<Slot<C>>>,
    pub drop_target_write: WriteSignal<Option<Slot<C>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending slot (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<Slot<C>>>,
    pub pending_write: WriteSignal<Option<Slot<C>>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<C: ColumnKey>() -> DndSignals<C> {
    let (dragging_read, dragging_write) = signal(None::<Slot<C>>);
    let (drop_target_read, drop_target_write) = signal(None::<Slot<C>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<Slot<C>>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Convert a hovered "insert before" slot into the card's final index.
/// Within the source column, slots after the card shift down by one once
/// the card is lifted out.
pub fn resolve_destination<C: PartialEq + Copy>(source: Slot<C>, hovered: Slot<C>) -> Slot<C> {
    if hovered.column == source.column && hovered.index > source.index {
        Slot::new(hovered.column, hovered.index - 1)
    } else {
        hovered
    }
}

/// End drag operation
pub fn end_drag<C: ColumnKey>(dnd: &DndSignals<C>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a card: records a pending drag
pub fn make_on_mousedown<C: ColumnKey>(dnd: DndSignals<C>, slot: Slot<C>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(slot));
            dnd.start_write.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Create mouseenter handler for a card or gap: dropping inserts before `slot`
pub fn make_on_slot_mouseenter<C: ColumnKey>(dnd: DndSignals<C>, slot: Slot<C>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<C: ColumnKey>(dnd: DndSignals<C>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mousemove: starts the drag once the pointer leaves the threshold
fn bind_global_mousemove<C, S>(dnd: DndSignals<C>, on_drag_start: S)
where
    C: ColumnKey,
    S: Fn(Slot<C>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.get_untracked() else { return };
        if dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        if exceeds_threshold(dnd.start_read.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
            on_drag_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouse handlers for one board.
///
/// `on_drag_start` fires when a pending press turns into a drag;
/// `on_drag_end` fires on release of an active drag.
pub fn bind_global_mouseup<C, S, F>(dnd: DndSignals<C>, on_drag_start: S, on_drag_end: F)
where
    C: ColumnKey,
    S: Fn(Slot<C>) + 'static,
    F: Fn(DragEnd<C>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let hovered = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);
        end_drag(&dnd);

        // A press that never moved is a click; the click event fires on its own
        if let Some(source) = dragging {
            let destination = hovered.map(|slot| resolve_destination(source, slot));
            on_drag_end(DragEnd { source, destination });
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_drag_start);
}
