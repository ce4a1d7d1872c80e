//! Document head with scoped script elements
//!
//! Scripts are attached through a guard and removed when the guard drops,
//! so a mounted view can never leak a head element past its lifetime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use maud::{html, Markup, PreEscaped};
use serde_json::{json, Value};

use crate::observability::{log_event_with_fields, Event};

pub const LD_JSON: &str = "application/ld+json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement {
    Meta { name: String, content: String },
    Script { id: u64, mime: String, body: String },
}

impl HeadElement {
    pub fn render(&self) -> Markup {
        match self {
            HeadElement::Meta { name, content } => html! {
                meta name=(name) content=(content);
            },
            // Script bodies are JSON; only the closing tag sequence needs guarding
            HeadElement::Script { mime, body, .. } => html! {
                script type=(mime) { (PreEscaped(body.replace("</", "<\\/"))) }
            },
        }
    }
}

#[derive(Debug)]
pub struct Document {
    title: String,
    head: Mutex<Vec<HeadElement>>,
    next_id: AtomicU64,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            title: title.into(),
            head: Mutex::new(vec![HeadElement::Meta {
                name: "viewport".to_string(),
                content: "width=device-width, initial-scale=1".to_string(),
            }]),
            next_id: AtomicU64::new(1),
        })
    }

    fn lock_head(&self) -> MutexGuard<'_, Vec<HeadElement>> {
        // A panic mid-render leaves the list itself intact
        self.head.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a script to the head. It stays until the guard drops.
    pub fn attach_script(self: &Arc<Self>, mime: &str, body: String) -> ScriptGuard {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock_head().push(HeadElement::Script {
            id,
            mime: mime.to_string(),
            body,
        });
        log_event_with_fields(Event::HeadScriptAttached, &[("mime", mime)]);

        ScriptGuard {
            document: Arc::clone(self),
            id,
        }
    }

    /// Number of scripts of the given type currently attached
    pub fn script_count(&self, mime: &str) -> usize {
        self.lock_head()
            .iter()
            .filter(|e| matches!(e, HeadElement::Script { mime: m, .. } if m == mime))
            .count()
    }

    pub fn render_head(&self) -> Markup {
        let head = self.lock_head();
        html! {
            meta charset="utf-8";
            title { (self.title) }
            @for element in head.iter() {
                (element.render())
            }
        }
    }

    fn detach(&self, id: u64) -> bool {
        let mut head = self.lock_head();
        let before = head.len();
        head.retain(|e| !matches!(e, HeadElement::Script { id: sid, .. } if *sid == id));
        head.len() != before
    }
}

/// Ownership of one attached script
#[derive(Debug)]
pub struct ScriptGuard {
    document: Arc<Document>,
    id: u64,
}

impl Drop for ScriptGuard {
    fn drop(&mut self) {
        if self.document.detach(self.id) {
            let id = self.id.to_string();
            log_event_with_fields(Event::HeadScriptReleased, &[("script_id", &id)]);
        }
    }
}

/// schema.org description of the dashboard, attached while it is mounted.
pub fn structured_data(name: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": name,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": "Real-time Azure cost analytics with AI forecasting, anomaly detection, and savings recommendations.",
    })
}
