//! Notice Bar Component
//!
//! Shows the latest error; clears itself after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tally_core::config::NOTICE_TIMEOUT_MS;

use crate::store::{dismiss_notice, is_current_notice, use_ui_store, UiStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ui = use_ui_store();

    Effect::new(move |_| {
        let Some(seq) = ui.notice().with(|n| n.as_ref().map(|n| n.seq)) else { return };
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            // A newer notice keeps its own timer
            if ui.notice().with_untracked(|n| is_current_notice(n.as_ref(), seq)) {
                dismiss_notice(&ui);
            }
        });
    });

    view! {
        {move || ui.notice().get().map(|notice| view! {
            <div class="notice" role="alert">
                <span class="notice-text">{notice.message}</span>
                <button class="notice-close" on:click=move |_| dismiss_notice(&ui)>"×"</button>
            </div>
        })}
    }
}
