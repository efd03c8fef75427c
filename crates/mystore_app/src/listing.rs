//! Listing screen view and reducer-effect execution.

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::*;
use mystore_ui::prelude::*;
use storage_host::{load_listing_prefs, save_listing_prefs, ListingPrefs, SortColumn};
use storage_host_web::file_bytes;

use crate::breadcrumb::ListingBreadcrumbs;
use crate::file_item::FileCard;
use crate::model::{ListingPhase, ListingState, ToastKind, ToastMessage};
use crate::reducer::{reduce_listing, ListingAction, ListingEffect};
use crate::services::{use_store_services, StoreServices};

#[derive(Clone, PartialEq)]
struct ToastEntry {
    id: usize,
    message: ToastMessage,
}

const fn toast_tone(kind: ToastKind) -> ToastTone {
    match kind {
        ToastKind::Progress => ToastTone::Info,
        ToastKind::Success => ToastTone::Success,
        ToastKind::Failure => ToastTone::Danger,
    }
}

const TOAST_DISMISS_DELAY: Duration = Duration::from_secs(2);

// Progress toasts stay until the settled outcome replaces them.
const fn auto_dismisses(kind: ToastKind) -> bool {
    !matches!(kind, ToastKind::Progress)
}

/// Dispatches reducer actions and executes the emitted effects.
///
/// One controller lives per mounted listing screen; async completions are
/// discarded once the screen unmounts or has navigated to another prefix.
#[derive(Clone)]
struct ListingController {
    services: StoreServices,
    state: RwSignal<ListingState>,
    toasts: RwSignal<Vec<ToastEntry>>,
    next_toast_id: Rc<Cell<usize>>,
    pending_file: RwSignal<Option<web_sys::File>>,
    alive: Rc<Cell<bool>>,
}

impl ListingController {
    fn dispatch(&self, action: ListingAction) {
        let Some(outcome) = self.state.try_update(|state| reduce_listing(state, action)) else {
            return;
        };
        match outcome {
            Ok(effects) => {
                for effect in effects {
                    self.run(effect);
                }
            }
            Err(err) => logging::warn!("listing action rejected: {err}"),
        }
    }

    fn run(&self, effect: ListingEffect) {
        match effect {
            ListingEffect::IssueList { prefix, options } => {
                let this = self.clone();
                spawn_local(async move {
                    let outcome = this.services.objects.list(&prefix, options).await;
                    // Stale completions: the screen unmounted or moved on to
                    // another prefix while this fetch was in flight.
                    if !this.alive.get() || this.state.get_untracked().prefix != prefix {
                        return;
                    }
                    match outcome {
                        Ok(entries) => this.dispatch(ListingAction::ListResolved { entries }),
                        Err(err) => this.dispatch(ListingAction::ListFailed {
                            message: err.message().to_string(),
                        }),
                    }
                });
            }
            ListingEffect::IssueUpload { key } => {
                let Some(file) = self.pending_file.get_untracked() else {
                    logging::warn!("upload issued without a picked file");
                    return;
                };
                self.pending_file.set(None);
                let this = self.clone();
                spawn_local(async move {
                    let file_name = file.name();
                    let result = match file_bytes(&file).await {
                        Ok(bytes) => this
                            .services
                            .objects
                            .upload(&key, &file.type_(), bytes)
                            .await
                            .map_err(|err| err.message().to_string()),
                        Err(message) => Err(message),
                    };
                    if !this.alive.get() {
                        return;
                    }
                    this.dispatch(ListingAction::UploadSettled { file_name, result });
                });
            }
            ListingEffect::ShowToast { kind, text } => {
                let id = self.next_toast_id.get();
                self.next_toast_id.set(id + 1);
                self.toasts.update(|toasts| {
                    // A settled outcome replaces any progress toast.
                    if kind != ToastKind::Progress {
                        toasts.retain(|t| t.message.kind != ToastKind::Progress);
                    }
                    toasts.push(ToastEntry {
                        id,
                        message: ToastMessage { kind, text },
                    });
                });
                if auto_dismisses(kind) {
                    let this = self.clone();
                    set_timeout(
                        move || {
                            if !this.alive.get() {
                                return;
                            }
                            this.toasts.update(|list| list.retain(|t| t.id != id));
                        },
                        TOAST_DISMISS_DELAY,
                    );
                }
            }
            ListingEffect::PersistSortPref { column } => {
                let this = self.clone();
                spawn_local(async move {
                    let prefs = ListingPrefs { sort_by: column };
                    if let Err(err) = save_listing_prefs(this.services.prefs.as_ref(), &prefs).await
                    {
                        logging::warn!("sort preference save failed: {err}");
                    }
                });
            }
        }
    }
}

#[component]
/// Folder listing screen for one route-driven storage prefix.
pub fn StoreListingView(#[prop(into)] prefix: Signal<String>) -> impl IntoView {
    let services = use_store_services();
    let state = create_rw_signal(ListingState::new(prefix.get_untracked()));
    let toasts = create_rw_signal(Vec::<ToastEntry>::new());
    let pending_file = create_rw_signal::<Option<web_sys::File>>(None);
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let controller = ListingController {
        services: services.clone(),
        state,
        toasts,
        next_toast_id: Rc::new(Cell::new(0)),
        pending_file,
        alive: alive.clone(),
    };

    // Restore the persisted sort column, then issue the first fetch.
    {
        let controller = controller.clone();
        let prefs = services.prefs.clone();
        spawn_local(async move {
            let restored = load_listing_prefs(prefs.as_ref()).await;
            if !controller.alive.get() {
                return;
            }
            if let Some(restored) = restored {
                controller.dispatch(ListingAction::SortHydrated {
                    column: restored.sort_by,
                });
            }
            controller.dispatch(ListingAction::ListRequested);
        });
    }

    create_effect({
        let controller = controller.clone();
        move |_| {
            let current = prefix.get();
            if current != state.with_untracked(|s| s.prefix.clone()) {
                controller.dispatch(ListingAction::PrefixChanged { prefix: current });
            }
        }
    });

    let phase = Signal::derive(move || state.with(|s| s.phase));
    let entries = Signal::derive(move || state.with(|s| s.entries.clone()));
    let sort = Signal::derive(move || state.with(|s| s.sort));
    let modal_open = Signal::derive(move || state.with(|s| s.modal_open));
    let folder_name = Signal::derive(move || state.with(|s| s.folder_name.clone()));
    let upload_in_flight = Signal::derive(move || state.with(|s| s.upload_in_flight));
    let current_prefix = Signal::derive(move || state.with(|s| s.prefix.clone()));

    let open_modal = Callback::new({
        let controller = controller.clone();
        move |_| controller.dispatch(ListingAction::UploadModalOpened)
    });
    let dismiss_modal = Callback::new({
        let controller = controller.clone();
        move |_: ()| controller.dispatch(ListingAction::UploadModalDismissed)
    });
    let select_sort = {
        let controller = controller.clone();
        move |column: SortColumn| {
            Callback::new({
                let controller = controller.clone();
                move |_| controller.dispatch(ListingAction::SortSelected { column })
            })
        }
    };
    let edit_folder_name = Callback::new({
        let controller = controller.clone();
        move |ev: web_sys::Event| {
            controller.dispatch(ListingAction::FolderNameEdited {
                value: event_target_value(&ev),
            });
        }
    });

    let file_input = create_node_ref::<html::Input>();
    let open_picker = Callback::new(move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    });
    let on_file_picked = {
        let controller = controller.clone();
        move |ev: web_sys::Event| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file_name = file.name();
            controller.pending_file.set(Some(file));
            input.set_value("");
            controller.dispatch(ListingAction::UploadSubmitted { file_name });
        }
    };

    let toast_controller = controller.clone();

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg layout_class="store-screen">
            <Cluster justify=LayoutJustify::Between ui_slot="header">
                <Heading>"MyStore"</Heading>
                <ToolBar aria_label="Listing actions">
                    <SegmentedControl aria_label="Sort entries">
                        <SegmentedControlOption
                            selected=Signal::derive(move || sort.get() == SortColumn::Name)
                            disabled=Signal::derive(move || phase.get() == ListingPhase::Loading)
                            on_click=select_sort(SortColumn::Name)
                        >
                            "Name"
                        </SegmentedControlOption>
                        <SegmentedControlOption
                            selected=Signal::derive(move || sort.get() == SortColumn::UpdatedAt)
                            disabled=Signal::derive(move || phase.get() == ListingPhase::Loading)
                            on_click=select_sort(SortColumn::UpdatedAt)
                        >
                            "Last updated"
                        </SegmentedControlOption>
                    </SegmentedControl>
                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Upload
                        on_click=open_modal
                    >
                        "Upload File"
                    </Button>
                </ToolBar>
            </Cluster>

            <ListingBreadcrumbs prefix=current_prefix />

            <Show when=move || {
                phase.get() == ListingPhase::Loading && entries.with(|e| e.is_empty())
            }>
                <Text tone=TextTone::Secondary>"Loading files..."</Text>
            </Show>

            <Show when=move || entries.with(|e| !e.is_empty())>
                <Grid gap=LayoutGap::Lg layout_class="store-grid">
                    <For
                        each=move || entries.get()
                        key=move |entry| {
                            format!("{}/{}", current_prefix.get_untracked(), entry.name)
                        }
                        children=move |entry| {
                            view! { <FileCard entry prefix=current_prefix.get_untracked() /> }
                        }
                    />
                </Grid>
            </Show>

            <Show when=move || {
                phase.get() == ListingPhase::Loaded && entries.with(|e| e.is_empty())
            }>
                <EmptyState>
                    <Text tone=TextTone::Secondary>"This folder is empty."</Text>
                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Upload
                        on_click=open_modal
                    >
                        "Upload File"
                    </Button>
                </EmptyState>
            </Show>

            <input
                type="file"
                class="store-file-input"
                style="display: none"
                node_ref=file_input
                on:change=on_file_picked
            />

            <Show when=move || modal_open.get()>
                <Modal aria_label="Upload a file" on_dismiss=dismiss_modal>
                    <Stack gap=LayoutGap::Md>
                        <Heading>"Upload to MyStore"</Heading>
                        <FieldGroup
                            title="Folder name"
                            description="Optional folder to place the file under"
                        >
                            <TextField
                                placeholder="e.g. archive"
                                value=folder_name
                                disabled=upload_in_flight
                                on_input=edit_folder_name
                            />
                        </FieldGroup>
                        <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                            <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| dismiss_modal.call(()))>
                                "Cancel"
                            </Button>
                            <Button
                                variant=ButtonVariant::Primary
                                leading_icon=IconName::Upload
                                disabled=upload_in_flight
                                on_click=open_picker
                            >
                                "Upload First File"
                            </Button>
                        </Cluster>
                    </Stack>
                </Modal>
            </Show>

            <div class="store-toasts" data-ui-slot="toasts">
                <For
                    each=move || toasts.get()
                    key=|toast| toast.id
                    children=move |toast| {
                        let controller = toast_controller.clone();
                        let id = toast.id;
                        view! {
                            <Toast
                                tone=toast_tone(toast.message.kind)
                                on_dismiss=Callback::new(move |_| {
                                    controller.toasts.update(|list| list.retain(|t| t.id != id));
                                })
                            >
                                {toast.message.text.clone()}
                            </Toast>
                        }
                    }
                />
            </div>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_toasts_expire_but_progress_waits_for_outcome() {
        assert!(!auto_dismisses(ToastKind::Progress));
        assert!(auto_dismisses(ToastKind::Success));
        assert!(auto_dismisses(ToastKind::Failure));
    }
}
