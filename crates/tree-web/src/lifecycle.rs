// Page lifecycle handling for the frame loop.
//
// Kept free of web types so host tests can include it directly.

use tree_core::CancelToken;

// A persisted pagehide means the page went into the back/forward cache. It is
// frozen, not gone, and its animation frames resume on restore, so the loop
// must stay live.
pub fn on_pagehide(token: &CancelToken, persisted: bool) {
    if persisted {
        log::debug!("page cached, frame loop kept");
    } else {
        token.cancel();
    }
}
