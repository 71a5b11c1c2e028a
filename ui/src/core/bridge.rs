//! Window-level glue.
//!
//! Dioxus exposes element events but not window scroll, intersection
//! observers, document key presses or the global error event. Those are
//! wired here through `document::eval`, which works the same on web and in
//! the desktop webview. Each listener is a long-lived eval that pushes
//! values back with `dioxus.send`.

use dioxus::document::{self, Eval};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("eval failed: {0}")]
    Eval(String),
    #[error("unexpected payload: {0}")]
    Payload(#[from] serde_json::Error),
}

fn eval_error(err: impl std::fmt::Debug) -> BridgeError {
    BridgeError::Eval(format!("{err:?}"))
}

fn js_string(value: &str) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(value)?)
}

const SCROLL_JS: &str = r#"
const report = () => dioxus.send(window.scrollY);
window.addEventListener("scroll", report, { passive: true });
report();
await new Promise(() => {});
"#;

const ESCAPE_JS: &str = r#"
document.addEventListener("keydown", (event) => {
    if (event.key === "Escape") dioxus.send(event.key);
});
await new Promise(() => {});
"#;

const ERROR_JS: &str = r#"
window.addEventListener("error", (event) => {
    dioxus.send(String(event.error ?? event.message));
});
await new Promise(() => {});
"#;

/// A stream of values pushed from a window-level listener.
pub struct WindowListener {
    eval: Eval,
    name: &'static str,
}

impl WindowListener {
    /// Current `scrollY` once, then on every scroll event.
    pub fn scroll() -> Self {
        Self {
            eval: document::eval(SCROLL_JS),
            name: "scroll",
        }
    }

    /// The key name each time Escape is pressed anywhere on the page.
    pub fn escape_key() -> Self {
        Self {
            eval: document::eval(ESCAPE_JS),
            name: "escape",
        }
    }

    /// Messages of uncaught errors.
    pub fn errors() -> Self {
        Self {
            eval: document::eval(ERROR_JS),
            name: "error",
        }
    }

    /// Ids of elements matching `selector` as each first intersects.
    /// Elements are unobserved after reporting.
    pub fn visibility(
        selector: &str,
        threshold: f64,
        root_margin: &str,
    ) -> Result<Self, BridgeError> {
        let js = format!(
            r#"
const observer = new IntersectionObserver((entries, obs) => {{
    for (const entry of entries) {{
        if (entry.isIntersecting) {{
            obs.unobserve(entry.target);
            dioxus.send(entry.target.id);
        }}
    }}
}}, {{ threshold: {threshold}, rootMargin: {margin} }});
document.querySelectorAll({selector}).forEach((el) => observer.observe(el));
await new Promise(() => {{}});
"#,
            margin = js_string(root_margin)?,
            selector = js_string(selector)?,
        );
        Ok(Self {
            eval: document::eval(&js),
            name: "visibility",
        })
    }

    pub async fn next<T: DeserializeOwned>(&mut self) -> Result<T, BridgeError> {
        self.eval.recv::<T>().await.map_err(|err| {
            debug!(listener = self.name, "listener closed");
            eval_error(err)
        })
    }
}

/// Current vertical scroll offset.
pub async fn scroll_y() -> Result<f64, BridgeError> {
    document::eval("return window.scrollY;")
        .join::<f64>()
        .await
        .map_err(eval_error)
}

/// Write the vertical scroll offset.
pub fn scroll_to(y: f64) {
    let _ = document::eval(&format!("window.scrollTo(0, {y});"));
}

/// `offsetTop` of the element with `id`, `None` if absent.
pub async fn offset_top(id: &str) -> Result<Option<f64>, BridgeError> {
    let js = format!(
        "const el = document.getElementById({}); return el ? el.offsetTop : null;",
        js_string(id)?
    );
    document::eval(&js)
        .join::<Option<f64>>()
        .await
        .map_err(eval_error)
}

/// Reflect the active locale on `<html lang>`.
pub fn set_document_lang(tag: &str) {
    match js_string(tag) {
        Ok(tag) => {
            let _ = document::eval(&format!("document.documentElement.lang = {tag};"));
        }
        Err(err) => debug!("lang attribute not updated: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_embedded_as_js_literals() {
        assert_eq!(js_string("#about").unwrap(), "\"#about\"");
        assert_eq!(
            js_string("img[loading=\"lazy\"]").unwrap(),
            r#""img[loading=\"lazy\"]""#
        );
    }
}
