pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// System clipboard through `navigator.clipboard`.
#[cfg(feature = "yew")]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BrowserClipboard;

#[cfg(feature = "yew")]
impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let promise = clipboard.write_text(text);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }
}
