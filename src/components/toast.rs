//! Transient toast notifications. Every user-visible failure and success in
//! the app flows through the `Toaster` context handle.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 3_500;

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = const { Cell::new(1) };
}

fn next_toast_id() -> u64 {
    NEXT_TOAST_ID.with(|cell| {
        let id = cell.get();
        cell.set(id + 1);
        id
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

#[derive(Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct Toaster {
    handle: UseReducerHandle<ToastState>,
}

impl Toaster {
    pub fn new(handle: UseReducerHandle<ToastState>) -> Self {
        Self { handle }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = next_toast_id();
        self.handle.dispatch(ToastAction::Push(Toast { id, kind, text }));

        // Auto-dismiss. The provider lives at the app root, so the dispatcher
        // outlives every page; the one-shot always has a live target.
        let dispatcher = self.handle.dispatcher();
        Timeout::new(TOAST_DISMISS_MS, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }

    fn toasts(&self) -> Vec<Toast> {
        self.handle.toasts.clone()
    }

    fn dismiss(&self, id: u64) {
        self.handle.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster context not provided")
}

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toaster = use_toaster();

    html! {
        <div class="toast-stack" aria-live="polite">
            { for toaster.toasts().into_iter().map(|toast| {
                let onclick = {
                    let toaster = toaster.clone();
                    let id = toast.id;
                    Callback::from(move |_| toaster.dismiss(id))
                };
                html! {
                    <div key={toast.id.to_string()} class={toast.kind.class()} role="status">
                        <span>{&toast.text}</span>
                        <button class="toast-close" {onclick} aria-label="Dismiss notification">
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
