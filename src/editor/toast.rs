use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

pub static TOAST: GlobalSignal<Option<Toast>> = Signal::global(|| None);

static NEXT_TOAST: AtomicU64 = AtomicU64::new(1);

/// Shows a toast for a few seconds. A newer toast replaces it and is not
/// hidden by the older one's timer.
pub fn show_toast(kind: ToastKind, message: impl Into<String>) {
    let id = NEXT_TOAST.fetch_add(1, Ordering::Relaxed);
    *TOAST.write() = Some(Toast {
        id,
        kind,
        message: message.into(),
    });

    spawn(async move {
        TimeoutFuture::new(TOAST_MS).await;
        if is_showing(TOAST.peek().as_ref(), id) {
            *TOAST.write() = None;
        }
    });
}

/// True while toast `id` is still the one on screen.
fn is_showing(current: Option<&Toast>, id: u64) -> bool {
    current.is_some_and(|t| t.id == id)
}

#[component]
pub fn ToastHost() -> Element {
    let toast = TOAST.read();
    let Some(toast) = toast.as_ref() else {
        return rsx! { div { id: "toast", class: "toast" } };
    };
    let class = format!("toast {} show", toast.kind.class());

    rsx! {
        div { id: "toast", class: "{class}", "{toast.message}" }
    }
}
