//! Spawn a request whose completion is tied to the issuing view.
//!
//! Views call [`bind_to_view`] once at mount, then [`spawn_bound`] per
//! request. The completion runs only while the ticket is current and the
//! view is still mounted; anything later is dropped.

use std::future::Future;

use leptos::prelude::on_cleanup;

use crate::state::view::RequestSeq;

/// Create a request sequence that closes when the current reactive owner
/// (the mounted view) is cleaned up.
pub fn bind_to_view() -> RequestSeq {
    let seq = RequestSeq::default();
    let on_unmount = seq.clone();
    on_cleanup(move || on_unmount.close());
    seq
}

/// Spawn `request` on the browser task queue and hand its output to `apply`
/// if the view still wants it.
pub fn spawn_bound<T, F, A>(seq: &RequestSeq, request: F, apply: A)
where
    T: 'static,
    F: Future<Output = T> + 'static,
    A: FnOnce(T) + 'static,
{
    let ticket = seq.issue();
    #[cfg(feature = "csr")]
    {
        let seq = seq.clone();
        leptos::task::spawn_local(async move {
            let output = request.await;
            if seq.is_current(ticket) {
                apply(output);
            } else {
                leptos::logging::log!("dropping stale response");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ticket, request, apply);
    }
}
