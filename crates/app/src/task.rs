use dioxus::prelude::*;
use shared_types::CancelToken;

/// Cancellation token scoped to the calling component.
///
/// Every clone observes the same flag, which flips when the component
/// unmounts. Async handlers check it before writing their result back.
pub fn use_cancel_token() -> CancelToken {
    let token = use_hook(CancelToken::new);
    let on_unmount = token.clone();
    use_drop(move || on_unmount.cancel());
    token
}
