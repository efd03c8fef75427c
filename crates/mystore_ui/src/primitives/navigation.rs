use super::*;

#[component]
/// Shared toolbar row for screen-level actions.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="toolbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared breadcrumb trail container.
pub fn BreadcrumbTrail(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-breadcrumbs", layout_class)
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="breadcrumbs"
        >
            <ol data-ui-slot="trail">{children()}</ol>
        </nav>
    }
}

#[component]
/// One breadcrumb trail segment.
///
/// Non-current segments render as links; the current segment renders as plain
/// text with `aria-current` set. The separator glyph precedes every segment
/// after the first.
pub fn BreadcrumbSegment(
    #[prop(into)] label: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] current: MaybeSignal<bool>,
    #[prop(optional)] leading_separator: bool,
) -> impl IntoView {
    let link = href.filter(|_| !current.get_untracked());
    view! {
        <li
            data-ui-primitive="true"
            data-ui-kind="breadcrumb-segment"
            data-ui-selected=move || bool_token(current.get())
            aria-current=move || if current.get() { Some("page") } else { None }
        >
            {leading_separator.then(|| view! { <Icon icon=IconName::ChevronRight size=IconSize::Sm /> })}
            {match link {
                Some(href) => view! { <a href=href data-ui-slot="link">{label}</a> }.into_view(),
                None => view! { <span data-ui-slot="label">{label}</span> }.into_view(),
            }}
        </li>
    }
}
