//! Entry cards for the listing grid.

use std::{cell::Cell, rc::Rc};

use leptos::*;
use leptos_router::use_navigate;
use mystore_ui::prelude::*;
use storage_host::{upload_key, StorageEntry};
use storage_host_web::{object_url_from_bytes, revoke_object_url, save_object_url};

use crate::format::{date_label, format_size_mb};
use crate::preview::{preview_variant, should_fetch_preview, PreviewVariant};
use crate::services::use_store_services;

#[component]
/// Card for one listing entry; folders navigate, files preview and download.
pub fn FileCard(entry: StorageEntry, #[prop(into)] prefix: String) -> impl IntoView {
    if entry.is_folder() {
        view! { <FolderCard entry prefix /> }.into_view()
    } else {
        view! { <FileEntryCard entry prefix /> }.into_view()
    }
}

#[component]
fn FolderCard(entry: StorageEntry, prefix: String) -> impl IntoView {
    let services = use_store_services();
    let navigate = use_navigate();
    let target = services
        .config
        .route_for_prefix(&upload_key(&prefix, None, &entry.name));
    let aria_label = format!("Open folder {}", entry.name);

    view! {
        <Card layout_class="store-card" ui_slot="folder" aria_label=aria_label>
            <PreviewFrame ui_slot="cover">
                <Icon icon=IconName::Folder size=IconSize::Lg />
            </PreviewFrame>
            <Button
                variant=ButtonVariant::Quiet
                leading_icon=IconName::Folder
                layout_class="store-folder-open"
                on_click=Callback::new(move |_| navigate(&target, Default::default()))
            >
                {entry.name}
            </Button>
        </Card>
    }
}

#[component]
fn FileEntryCard(entry: StorageEntry, prefix: String) -> impl IntoView {
    let services = use_store_services();
    let variant = preview_variant(&entry);
    let blob_url = create_rw_signal::<Option<String>>(None);
    let video_open = create_rw_signal(false);
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || {
            alive.set(false);
            if let Some(url) = blob_url.try_get_untracked().flatten() {
                revoke_object_url(&url);
            }
        }
    });

    let key = upload_key(&prefix, None, &entry.name);
    let mime_type = entry
        .metadata
        .as_ref()
        .map(|m| m.mime_type.clone())
        .unwrap_or_default();

    if should_fetch_preview(&entry) {
        let objects = services.objects.clone();
        let alive = alive.clone();
        let key = key.clone();
        let mime_type = mime_type.clone();
        spawn_local(async move {
            match objects.download(&key).await {
                Ok(bytes) => match object_url_from_bytes(&bytes, &mime_type) {
                    Ok(url) => {
                        if !alive.get() {
                            revoke_object_url(&url);
                            return;
                        }
                        blob_url.set(Some(url));
                    }
                    Err(err) => logging::warn!("preview blob failed for {key}: {err}"),
                },
                Err(err) => logging::warn!("preview fetch failed for {key}: {err}"),
            }
        });
    }

    let cover = match variant {
        PreviewVariant::Image => {
            let alt = entry.name.clone();
            (move || match blob_url.get() {
                Some(url) => view! { <img src=url alt=alt.clone() data-ui-slot="image" /> }
                    .into_view(),
                None => view! { <Icon icon=IconName::FileGeneric size=IconSize::Lg /> }.into_view(),
            })
            .into_view()
        }
        PreviewVariant::PdfIcon => {
            view! { <Icon icon=IconName::FilePdf size=IconSize::Lg /> }.into_view()
        }
        PreviewVariant::VideoPlayer => {
            let aria_label = format!("Play {}", entry.name);
            view! {
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label=aria_label
                    on_click=Callback::new(move |_| video_open.set(true))
                >
                    <Icon icon=IconName::FileVideo size=IconSize::Lg />
                </Button>
            }
            .into_view()
        }
        _ => view! { <Icon icon=IconName::FileGeneric size=IconSize::Lg /> }.into_view(),
    };

    let size_label = entry
        .metadata
        .as_ref()
        .map(|m| format_size_mb(m.size_bytes))
        .unwrap_or_default();
    let updated_label = entry
        .updated_at
        .as_deref()
        .map(date_label)
        .unwrap_or_default();

    let download_disabled = Signal::derive(move || blob_url.get().is_none());
    let file_name = entry.name.clone();
    let on_download = Callback::new(move |_| {
        if let Some(url) = blob_url.get_untracked() {
            if let Err(err) = save_object_url(&url, &file_name) {
                logging::warn!("download failed for {file_name}: {err}");
            }
        }
    });
    let video_label = format!("Video player for {}", entry.name);

    view! {
        <Card layout_class="store-card" ui_slot="file" aria_label=entry.name.clone()>
            <PreviewFrame ui_slot="cover">{cover}</PreviewFrame>
            <Stack gap=LayoutGap::Sm ui_slot="details">
                <Text role=TextRole::Label>{entry.name.clone()}</Text>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{size_label}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{updated_label}</Text>
                </Cluster>
                <Button
                    leading_icon=IconName::Download
                    disabled=download_disabled
                    on_click=on_download
                >
                    "Download"
                </Button>
            </Stack>
        </Card>
        <Show when=move || video_open.get()>
            <Modal
                aria_label=video_label.clone()
                on_dismiss=Callback::new(move |_| video_open.set(false))
            >
                {move || match blob_url.get() {
                    Some(url) => view! { <video controls src=url data-ui-slot="player"></video> }
                        .into_view(),
                    None => view! { <Text tone=TextTone::Secondary>"Loading video..."</Text> }
                        .into_view(),
                }}
            </Modal>
        </Show>
    }
}
