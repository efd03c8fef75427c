//! Reducer actions, side-effect intents, and transition logic for the listing screen.

use thiserror::Error;

use storage_host::{filter_placeholder_entries, upload_key, ListOptions, SortColumn, StorageEntry};

use crate::model::{ListingPhase, ListingState, ToastKind};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_listing`] to mutate [`ListingState`].
pub enum ListingAction {
    /// The route-driven folder prefix changed.
    PrefixChanged {
        /// New folder prefix.
        prefix: String,
    },
    /// A persisted sort preference was restored at mount.
    SortHydrated {
        /// Restored sort column.
        column: SortColumn,
    },
    /// A listing fetch should be issued for the current prefix and sort.
    ListRequested,
    /// The user selected a sort column.
    SortSelected {
        /// Chosen sort column.
        column: SortColumn,
    },
    /// The in-flight listing fetch resolved.
    ListResolved {
        /// Entries as returned by the provider.
        entries: Vec<StorageEntry>,
    },
    /// The in-flight listing fetch failed.
    ListFailed {
        /// Provider failure message.
        message: String,
    },
    /// The upload modal was opened.
    UploadModalOpened,
    /// The upload modal was dismissed without submitting.
    UploadModalDismissed,
    /// The folder-name field value changed.
    FolderNameEdited {
        /// New field value.
        value: String,
    },
    /// A file was picked and the upload should start.
    UploadSubmitted {
        /// Name of the picked file.
        file_name: String,
    },
    /// The in-flight upload finished.
    UploadSettled {
        /// Name of the uploaded file.
        file_name: String,
        /// Upload outcome; the error side carries the provider message.
        result: Result<(), String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_listing`] for the view layer to execute.
pub enum ListingEffect {
    /// Fetch the listing for a prefix with the given options.
    IssueList {
        /// Folder prefix to list.
        prefix: String,
        /// Page and sort options.
        options: ListOptions,
    },
    /// Upload the picked file to a storage key.
    IssueUpload {
        /// Full storage key for the upload.
        key: String,
    },
    /// Show a transient toast notification.
    ShowToast {
        /// Notification category.
        kind: ToastKind,
        /// Message text.
        text: String,
    },
    /// Persist the selected sort column as a session preference.
    PersistSortPref {
        /// Column to persist.
        column: SortColumn,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that are invalid in the current state.
pub enum ReducerError {
    /// An upload is already in flight.
    #[error("upload already in progress")]
    UploadInFlight,
    /// The submitted upload has no file name.
    #[error("no file selected")]
    NoFileSelected,
}

fn issue_list(state: &ListingState) -> ListingEffect {
    ListingEffect::IssueList {
        prefix: state.prefix.clone(),
        options: ListOptions::sorted_by(state.sort),
    }
}

/// Applies a [`ListingAction`] to the listing state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for the listing
/// screen. Navigating to another prefix clears the previous folder's entries,
/// a failed listing keeps previously rendered entries, and a settled upload
/// always re-issues the listing fetch regardless of outcome.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an upload action is invalid in the current
/// state; the state is left unchanged in that case.
pub fn reduce_listing(
    state: &mut ListingState,
    action: ListingAction,
) -> Result<Vec<ListingEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ListingAction::PrefixChanged { prefix } => {
            state.prefix = prefix;
            state.phase = ListingPhase::Loading;
            state.entries.clear();
            effects.push(issue_list(state));
        }
        ListingAction::SortHydrated { column } => {
            state.sort = column;
        }
        ListingAction::ListRequested => {
            state.phase = ListingPhase::Loading;
            effects.push(issue_list(state));
        }
        ListingAction::SortSelected { column } => {
            state.sort = column;
            state.phase = ListingPhase::Loading;
            effects.push(ListingEffect::PersistSortPref { column });
            effects.push(issue_list(state));
        }
        ListingAction::ListResolved { entries } => {
            state.phase = ListingPhase::Loaded;
            state.entries = filter_placeholder_entries(entries);
        }
        ListingAction::ListFailed { message } => {
            state.phase = ListingPhase::Failed;
            effects.push(ListingEffect::ShowToast {
                kind: ToastKind::Failure,
                text: message,
            });
        }
        ListingAction::UploadModalOpened => {
            state.modal_open = true;
        }
        ListingAction::UploadModalDismissed => {
            state.modal_open = false;
        }
        ListingAction::FolderNameEdited { value } => {
            state.folder_name = value;
        }
        ListingAction::UploadSubmitted { file_name } => {
            if state.upload_in_flight {
                return Err(ReducerError::UploadInFlight);
            }
            if file_name.trim().is_empty() {
                return Err(ReducerError::NoFileSelected);
            }
            state.upload_in_flight = true;
            let folder = state.folder_name.trim();
            let key = upload_key(
                &state.prefix,
                (!folder.is_empty()).then_some(folder),
                &file_name,
            );
            effects.push(ListingEffect::ShowToast {
                kind: ToastKind::Progress,
                text: format!("Uploading {file_name}..."),
            });
            effects.push(ListingEffect::IssueUpload { key });
        }
        ListingAction::UploadSettled { file_name, result } => {
            state.upload_in_flight = false;
            state.modal_open = false;
            state.folder_name.clear();
            match result {
                Ok(()) => effects.push(ListingEffect::ShowToast {
                    kind: ToastKind::Success,
                    text: format!("Uploaded {file_name}"),
                }),
                Err(message) => effects.push(ListingEffect::ShowToast {
                    kind: ToastKind::Failure,
                    text: message,
                }),
            }
            state.phase = ListingPhase::Loading;
            effects.push(issue_list(state));
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use storage_host::{EntryMetadata, PLACEHOLDER_OBJECT_NAME};

    use super::*;

    fn file_entry(name: &str) -> StorageEntry {
        StorageEntry {
            name: name.to_string(),
            updated_at: Some("2023-01-07T10:00:00.000Z".to_string()),
            metadata: Some(EntryMetadata {
                mime_type: "image/png".to_string(),
                size_bytes: 42,
            }),
        }
    }

    fn loaded_state(entries: Vec<StorageEntry>) -> ListingState {
        ListingState {
            prefix: "docs".to_string(),
            phase: ListingPhase::Loaded,
            entries,
            ..ListingState::new("docs")
        }
    }

    #[test]
    fn list_requested_issues_fetch_for_current_prefix_and_sort() {
        let mut state = ListingState::new("docs");
        state.sort = SortColumn::UpdatedAt;

        let effects = reduce_listing(&mut state, ListingAction::ListRequested).expect("reduce");
        assert_eq!(state.phase, ListingPhase::Loading);
        assert_eq!(
            effects,
            vec![ListingEffect::IssueList {
                prefix: "docs".to_string(),
                options: ListOptions::sorted_by(SortColumn::UpdatedAt),
            }]
        );
    }

    #[test]
    fn sort_selection_persists_pref_and_refetches() {
        let mut state = ListingState::new("");

        let effects = reduce_listing(
            &mut state,
            ListingAction::SortSelected {
                column: SortColumn::UpdatedAt,
            },
        )
        .expect("reduce");

        assert_eq!(state.sort, SortColumn::UpdatedAt);
        assert_eq!(state.phase, ListingPhase::Loading);
        assert_eq!(
            effects,
            vec![
                ListingEffect::PersistSortPref {
                    column: SortColumn::UpdatedAt,
                },
                ListingEffect::IssueList {
                    prefix: String::new(),
                    options: ListOptions::sorted_by(SortColumn::UpdatedAt),
                },
            ]
        );
    }

    #[test]
    fn sort_hydration_sets_column_without_effects() {
        let mut state = ListingState::new("");
        let effects = reduce_listing(
            &mut state,
            ListingAction::SortHydrated {
                column: SortColumn::UpdatedAt,
            },
        )
        .expect("reduce");
        assert_eq!(state.sort, SortColumn::UpdatedAt);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn resolved_listing_is_placeholder_filtered() {
        let mut state = ListingState::new("");
        state.phase = ListingPhase::Loading;

        let placeholder = StorageEntry {
            name: PLACEHOLDER_OBJECT_NAME.to_string(),
            updated_at: None,
            metadata: None,
        };
        let effects = reduce_listing(
            &mut state,
            ListingAction::ListResolved {
                entries: vec![file_entry("a.png"), placeholder, file_entry("b.png")],
            },
        )
        .expect("reduce");

        assert_eq!(state.phase, ListingPhase::Loaded);
        assert_eq!(
            state
                .entries
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["a.png", "b.png"]
        );
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn failed_listing_keeps_prior_entries_and_toasts() {
        let mut state = loaded_state(vec![file_entry("a.png")]);
        state.phase = ListingPhase::Loading;

        let effects = reduce_listing(
            &mut state,
            ListingAction::ListFailed {
                message: "bucket unavailable".to_string(),
            },
        )
        .expect("reduce");

        assert_eq!(state.phase, ListingPhase::Failed);
        assert_eq!(state.entries, vec![file_entry("a.png")]);
        assert_eq!(
            effects,
            vec![ListingEffect::ShowToast {
                kind: ToastKind::Failure,
                text: "bucket unavailable".to_string(),
            }]
        );
    }

    #[test]
    fn prefix_change_clears_entries_and_refetches_under_new_prefix() {
        let mut state = loaded_state(vec![file_entry("a.png")]);

        let effects = reduce_listing(
            &mut state,
            ListingAction::PrefixChanged {
                prefix: "docs/reports".to_string(),
            },
        )
        .expect("reduce");

        assert_eq!(state.prefix, "docs/reports");
        assert_eq!(state.phase, ListingPhase::Loading);
        assert_eq!(state.entries, Vec::new());
        assert_eq!(
            effects,
            vec![ListingEffect::IssueList {
                prefix: "docs/reports".to_string(),
                options: ListOptions::sorted_by(SortColumn::Name),
            }]
        );
    }

    #[test]
    fn upload_submit_computes_key_from_prefix_folder_and_file() {
        let mut state = ListingState::new("docs");
        state.modal_open = true;
        state.folder_name = "archive".to_string();

        let effects = reduce_listing(
            &mut state,
            ListingAction::UploadSubmitted {
                file_name: "x.pdf".to_string(),
            },
        )
        .expect("reduce");

        assert!(state.upload_in_flight);
        assert_eq!(
            effects,
            vec![
                ListingEffect::ShowToast {
                    kind: ToastKind::Progress,
                    text: "Uploading x.pdf...".to_string(),
                },
                ListingEffect::IssueUpload {
                    key: "docs/archive/x.pdf".to_string(),
                },
            ]
        );
    }

    #[test]
    fn upload_submit_rejects_missing_file_and_concurrent_upload() {
        let mut state = ListingState::new("");
        assert_eq!(
            reduce_listing(
                &mut state,
                ListingAction::UploadSubmitted {
                    file_name: "  ".to_string(),
                },
            ),
            Err(ReducerError::NoFileSelected)
        );
        assert!(!state.upload_in_flight);

        state.upload_in_flight = true;
        assert_eq!(
            reduce_listing(
                &mut state,
                ListingAction::UploadSubmitted {
                    file_name: "x.pdf".to_string(),
                },
            ),
            Err(ReducerError::UploadInFlight)
        );
    }

    #[test]
    fn settled_upload_always_relists_and_resets_modal() {
        for (result, expected_toast) in [
            (
                Ok(()),
                ListingEffect::ShowToast {
                    kind: ToastKind::Success,
                    text: "Uploaded x.pdf".to_string(),
                },
            ),
            (
                Err("quota exceeded".to_string()),
                ListingEffect::ShowToast {
                    kind: ToastKind::Failure,
                    text: "quota exceeded".to_string(),
                },
            ),
        ] {
            let mut state = ListingState::new("docs");
            state.modal_open = true;
            state.folder_name = "archive".to_string();
            state.upload_in_flight = true;

            let effects = reduce_listing(
                &mut state,
                ListingAction::UploadSettled {
                    file_name: "x.pdf".to_string(),
                    result,
                },
            )
            .expect("reduce");

            assert!(!state.upload_in_flight);
            assert!(!state.modal_open);
            assert_eq!(state.folder_name, "");
            assert_eq!(state.phase, ListingPhase::Loading);
            assert_eq!(
                effects,
                vec![
                    expected_toast,
                    ListingEffect::IssueList {
                        prefix: "docs".to_string(),
                        options: ListOptions::sorted_by(SortColumn::Name),
                    },
                ]
            );
        }
    }

    #[test]
    fn modal_open_and_dismiss_toggle_state_only() {
        let mut state = ListingState::new("");
        assert_eq!(
            reduce_listing(&mut state, ListingAction::UploadModalOpened).expect("reduce"),
            Vec::new()
        );
        assert!(state.modal_open);

        reduce_listing(
            &mut state,
            ListingAction::FolderNameEdited {
                value: "archive".to_string(),
            },
        )
        .expect("reduce");
        assert_eq!(state.folder_name, "archive");

        assert_eq!(
            reduce_listing(&mut state, ListingAction::UploadModalDismissed).expect("reduce"),
            Vec::new()
        );
        assert!(!state.modal_open);
    }
}
