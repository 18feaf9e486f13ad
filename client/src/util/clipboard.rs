//! Clipboard writes for share links.

/// Copy `text` to the system clipboard. Returns whether a clipboard was
/// available; the write itself completes asynchronously.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
            return false;
        };
        // The returned promise is dropped; the browser finishes the write.
        drop(clipboard.write_text(text));
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}
