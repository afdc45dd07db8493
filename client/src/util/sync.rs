//! Glue between a `RecordView` signal and the REST calls behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation follows the same path: send, then on success re-fetch the
//! whole collection; on failure show the message and leave the list alone.
//! Writes after an `await` go through `try_update`, so a view that was
//! unmounted while the request was in flight is silently skipped, and the
//! list's fetch tickets drop responses that a newer fetch has superseded.

use std::future::Future;

use leptos::prelude::*;
use records::banner::Banner;
use records::draft::Draft;
use records::editor::Submission;
use records::list::{FetchTicket, ListState, Resolution};
use records::view::RecordView;

/// Start a fresh load of the whole collection.
pub fn refresh<D, F, Fut>(view: RwSignal<RecordView<D>>, banner: RwSignal<Banner>, fetch: F)
where
    D: Draft,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<D::Record>, String>> + 'static,
{
    if let Some(ticket) = view.try_update(RecordView::refresh) {
        load(view, banner, ticket, fetch);
    }
}

/// Load a read-only collection that has no editor.
pub fn load_list<T, F, Fut>(list: RwSignal<ListState<T>>, banner: RwSignal<Banner>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let Some(ticket) = list.try_update(ListState::begin_fetch) else {
        return;
    };
    spawn(async move {
        let result = fetch().await;
        if let Some(Resolution::Failed(message)) = list.try_update(|l| l.resolve(ticket, result)) {
            banner.try_update(|b| b.show(message));
        }
    });
}

/// Validate and send the open editor's draft.
pub fn submit<D, S, SFut, F, Fut>(view: RwSignal<RecordView<D>>, banner: RwSignal<Banner>, save: S, fetch: F)
where
    D: Draft,
    S: FnOnce(Submission<D::Payload>) -> SFut + 'static,
    SFut: Future<Output = Result<(), String>> + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<D::Record>, String>> + 'static,
{
    let submission = match view.try_update(|v| v.editor.begin_submit()) {
        Some(Ok(Some(submission))) => submission,
        Some(Err(err)) => {
            banner.update(|b| b.show(err.to_string()));
            return;
        }
        // Already in flight, or unmounted.
        Some(Ok(None)) | None => return,
    };
    spawn(async move {
        match save(submission).await {
            Ok(()) => {
                if let Some(ticket) = view.try_update(RecordView::submit_succeeded) {
                    apply(view, banner, ticket, fetch().await);
                }
            }
            Err(message) => {
                view.try_update(|v| v.editor.on_failure(message.clone()));
                banner.try_update(|b| b.show(message));
            }
        }
    });
}

/// Delete one row, then re-fetch.
pub fn remove<D, R, RFut, F, Fut>(view: RwSignal<RecordView<D>>, banner: RwSignal<Banner>, delete: R, fetch: F)
where
    D: Draft,
    R: FnOnce() -> RFut + 'static,
    RFut: Future<Output = Result<(), String>> + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<D::Record>, String>> + 'static,
{
    spawn(async move {
        match delete().await {
            Ok(()) => {
                if let Some(ticket) = view.try_update(RecordView::delete_succeeded) {
                    apply(view, banner, ticket, fetch().await);
                }
            }
            Err(message) => {
                banner.try_update(|b| b.show(message));
            }
        }
    });
}

fn load<D, F, Fut>(view: RwSignal<RecordView<D>>, banner: RwSignal<Banner>, ticket: FetchTicket, fetch: F)
where
    D: Draft,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<D::Record>, String>> + 'static,
{
    spawn(async move {
        apply(view, banner, ticket, fetch().await);
    });
}

fn apply<D: Draft>(
    view: RwSignal<RecordView<D>>,
    banner: RwSignal<Banner>,
    ticket: FetchTicket,
    result: Result<Vec<D::Record>, String>,
) {
    match view.try_update(|v| v.list.resolve(ticket, result)) {
        Some(Resolution::Failed(message)) => {
            banner.try_update(|b| b.show(message));
        }
        Some(Resolution::Stale) => {
            #[cfg(feature = "csr")]
            log::debug!("discarded superseded list response");
        }
        Some(Resolution::Applied) | None => {}
    }
}

/// Run `task` on the browser event loop; a no-op off the browser.
pub fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}
