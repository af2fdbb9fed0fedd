//! Shared helpers for rendering and driving components in tests

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alert_dialog_ui::{Diagnostics, DiagnosticsConfig, WarningMode};
use dioxus::core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;
use tracing::subscriber::DefaultGuard;

/// Render `app` once and return its HTML
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Keep the accessibility audit off so nothing touches a browser document
pub fn quiet_diagnostics() -> Diagnostics {
    Diagnostics::new(DiagnosticsConfig::new(WarningMode::Never))
}

/// The first start tag containing `needle`
pub fn start_tag<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let open = html[..=at].rfind('<')?;
    let close = at + html[at..].find('>')?;
    Some(&html[open..=close])
}

/// Value of attribute `name` in a start tag
pub fn attr(tag: &str, name: &str) -> Option<String> {
    let marker = format!(" {}=\"", name);
    let start = tag.find(&marker)? + marker.len();
    let len = tag[start..].find('"')?;
    Some(tag[start..start + len].to_string())
}

/// Number of start tags of element `name`
pub fn count_elements(html: &str, name: &str) -> usize {
    let open_with_attrs = format!("<{} ", name);
    let open_bare = format!("<{}>", name);
    html.matches(&open_with_attrs).count() + html.matches(&open_bare).count()
}

/// Let effects and spawned tasks run, re-rendering whatever they dirty
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..16 {
        let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        if work.is_err() {
            return;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Log output collected by [`capture_logs`]
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Number of captured lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.text().lines().filter(|l| l.contains(needle)).count()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's `tracing` output into a buffer until the guard drops
pub fn capture_logs() -> (Captured, DefaultGuard) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (captured, tracing::subscriber::set_default(subscriber))
}
