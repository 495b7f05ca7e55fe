//! Stack of modal dialogs rendered above the page
//!
//! Pages push a builder; the builder receives a [`ModalHandle`] so the
//! dialog can close itself after save or cancel. Escape closes the topmost.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    width: Option<String>,
    builder: ModalBuilder,
}

#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Open dialogs bottom to top, with their depth
    fn layers(&self) -> Vec<(usize, ModalEntry)> {
        self.stack.get().into_iter().enumerate().collect::<Vec<_>>()
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Opens a dialog titled `title` on top of the stack.
    pub fn push<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_sized(title, None, builder)
    }

    /// Same as [`push`](Self::push) with a CSS width for the surface.
    pub fn push_sized<F>(
        &self,
        title: impl Into<String>,
        width: Option<&str>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                title: title.into(),
                width: width.map(str::to_string),
                builder: Arc::new(builder),
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    // Removing a modal inside its own click dispatch drops the running handler.
    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not provided in context")
}

/// Renders the stack. Mount once at the app root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    Effect::new(move |_| {
        let on_key = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                    let svc = svc;
                    spawn_local(async move {
                        TimeoutFuture::new(0).await;
                        svc.pop();
                    });
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
            // host lives as long as the app
            on_key.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || { svc.layers() }
                key=|(_, entry)| entry.id
                children=move |(depth, entry): (usize, ModalEntry)| {
                    let handle = ModalHandle { id: entry.id, svc };
                    let close_handle = handle.clone();
                    let on_close = Callback::new(move |_: ()| close_handle.close());
                    let body = (entry.builder)(handle);
                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            z_index=1000 + depth as i32
                            width=entry.width.clone().unwrap_or_default()
                            on_close=on_close
                        >
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(svc: &ModalStackService) -> Vec<(usize, String)> {
        svc.layers()
            .into_iter()
            .map(|(depth, entry)| (depth, entry.title))
            .collect()
    }

    #[test]
    fn test_layers_follow_push_order() {
        let svc = ModalStackService::new();
        let first = svc.push("Nouveau menu", |_| view! { <p>"Texte"</p> }.into_any());
        svc.push_sized("Confirmation", Some("420px"), |_| view! { <p>"Texte"</p> }.into_any());

        assert!(svc.is_open());
        assert_eq!(
            titles(&svc),
            vec![(0, "Nouveau menu".to_string()), (1, "Confirmation".to_string())]
        );

        svc.close(first.id);
        assert_eq!(titles(&svc), vec![(0, "Confirmation".to_string())]);

        svc.pop();
        assert!(!svc.is_open());
        assert!(svc.layers().is_empty());
    }
}
