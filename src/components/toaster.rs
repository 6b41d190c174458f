use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::services::NotificationSink;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Toast queue handle; each toast expires after `duration_ms`.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.retain(|t| t.id != id));
    }
}

impl NotificationSink for Toasts {
    fn notify(&self, title: &str, description: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.queue.update(|queue| {
            queue.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
            })
        });

        let toasts = *self;
        spawn_local(async move {
            TimeoutFuture::new(toasts.duration_ms).await;
            toasts.dismiss(id);
        });
    }
}

pub fn provide_toasts(duration_ms: u32) -> Toasts {
    let toasts = Toasts::new(duration_ms);
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("toasts context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="toaster">
            <For
                each=move || toasts.queue.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <li class="toast" on:click=move |_| toasts.dismiss(id)>
                            <strong class="toast-title">{toast.title}</strong>
                            <p class="toast-description">{toast.description}</p>
                        </li>
                    }
                }
            />
        </ol>
    }
}
