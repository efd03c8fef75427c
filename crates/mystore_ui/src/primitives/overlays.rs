use super::*;

#[component]
/// Shared modal dialog with a dismissable backdrop.
///
/// Clicking the backdrop or pressing Escape fires `on_dismiss`; clicks inside
/// the dialog surface do not propagate to the backdrop.
pub fn Modal(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let dismiss = move || {
        if let Some(on_dismiss) = on_dismiss.as_ref() {
            on_dismiss.call(());
        }
    };

    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |_| dismiss()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    dismiss();
                }
            }
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=move || aria_label.get()
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Tone of a transient toast notification.
pub enum ToastTone {
    /// Neutral/progress notification.
    #[default]
    Info,
    /// Success notification.
    Success,
    /// Failure notification.
    Danger,
}

impl ToastTone {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[component]
/// Transient toast notification surface.
pub fn Toast(
    #[prop(default = ToastTone::Info)] tone: ToastTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="message">{children()}</span>
            {on_dismiss.map(|on_dismiss| view! {
                <button
                    type="button"
                    data-ui-slot="dismiss"
                    aria-label="Dismiss notification"
                    on:click=move |_| on_dismiss.call(())
                >
                    <Icon icon=IconName::Close size=IconSize::Sm />
                </button>
            })}
        </div>
    }
}
