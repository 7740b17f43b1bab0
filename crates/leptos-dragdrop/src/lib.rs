//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop for Leptos, generic over the token that
//! identifies what is dragged and what it is dropped on.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// True once the pointer moved far enough from the press point to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// DnD state signals
pub struct DndSignals<T: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pressed token (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

impl<T> DndSignals<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self, token: &T) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(token))
    }

    pub fn is_drop_target(&self, token: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(token))
    }

    pub fn any_dragging(&self) -> bool {
        self.dragging_read.with(|d| d.is_some())
    }
}

pub fn create_dnd_signals<T>() -> DndSignals<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<T>(dnd: &DndSignals<T>)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Suppress the click that follows the mouseup of a real drag.
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable element.
/// Records a pending drag with the start position.
pub fn make_on_mousedown<T>(dnd: DndSignals<T>, token: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Innermost draggable wins (a card inside a column).
        ev.stop_propagation();
        dnd.pending_write.set(Some(token.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document mousemove: promotes a pending press to a drag once the
/// pointer moves past the threshold, then calls `on_start`.
pub fn bind_global_mousemove<T, S>(dnd: DndSignals<T>, on_start: S)
where
    T: Clone + PartialEq + Send + Sync + 'static,
    S: Fn(T) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        if dnd.dragging_read.with_untracked(|d| d.is_some()) {
            return;
        }
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            dnd.dragging_write.set(Some(pending.clone()));
            on_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<T>(dnd: DndSignals<T>, token: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        if let Some(dragging) = dragging {
            // Don't target self
            if dragging != token {
                dnd.drop_target_write.set(Some(token.clone()));
            }
        }
    }
}

/// Create mouseleave handler.
///
/// `fallback` is the enclosing target the pointer returns to, e.g. the
/// column around a card; `None` clears the target.
pub fn make_on_mouseleave<T>(dnd: DndSignals<T>, fallback: Option<T>) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(|d| d.is_some()) {
            dnd.drop_target_write.set(fallback.clone());
        }
    }
}

/// Bind document mouseup for drop detection.
///
/// `on_drop(active, over)` fires for every finished drag; `over` is `None`
/// when released outside any target. Also binds the global mousemove that
/// starts drags (see [`bind_global_mousemove`]).
pub fn bind_global_mouseup<T, S, F>(dnd: DndSignals<T>, on_start: S, on_drop: F)
where
    T: Clone + PartialEq + Send + Sync + 'static,
    S: Fn(T) + 'static,
    F: Fn(T, Option<T>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        match dragging {
            Some(dragged) => {
                end_drag(&dnd);
                on_drop(dragged, drop_target);
            }
            // Plain click: the click event fires on the element as usual
            None => dnd.pending_write.set(None),
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_start);
}
