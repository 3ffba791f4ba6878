//! Form info plugin: fetch form content from the host and show it
//!
//! Each invocation issues one request and reacts to its single response,
//! either by presenting the rendered items or by showing the failure prompt.
//! Invocations are numbered; a response arriving after a newer invocation has
//! started is dropped so it can never open a stale dialog.

use crate::error::FormInfoError;
use crate::host::{PluginCall, PluginHost};
use crate::presenter::Presenter;
use crate::renderer::FormContentRenderer;
use crate::state::{DisplayItem, FormContent};
use anyhow::Result;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Name under which the host registers the plugin
pub const PLUGIN_NAME: &str = "FormInfoPlugin";

/// Plugin method returning the content of a form
pub const GET_CONTENT: &str = "getContent";

/// Plugin method returning the main form procedure of a subform
pub const GET_MAIN_FORM_PROCEDURE_ID: &str = "getMainFormProcedureId";

pub const DIALOG_TITLE: &str = "Info";
pub const FAILURE_TITLE: &str = "Hinweis";
pub const FAILURE_MESSAGE: &str =
    "Plugin \"FormInfo\" nicht verfügbar oder Fehler beim Ermitteln der Formularinhalte.";

/// How one invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The info dialog was shown with this many items
    Presented { items: usize },
    /// The failure prompt was shown
    FetchFailed,
    /// A newer invocation started before the response arrived
    Superseded,
}

pub struct FormInfoPlugin<H, P> {
    host: H,
    presenter: Arc<P>,
    plugin_name: String,
    resolve_main_form: bool,
    generation: AtomicU64,
}

impl<H, P> FormInfoPlugin<H, P>
where
    H: PluginHost + 'static,
    P: Presenter + 'static,
{
    pub fn new(host: H, presenter: P) -> Self {
        Self {
            host,
            presenter: Arc::new(presenter),
            plugin_name: PLUGIN_NAME.to_string(),
            resolve_main_form: false,
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_plugin_name(mut self, plugin_name: impl Into<String>) -> Self {
        self.plugin_name = plugin_name.into();
        self
    }

    /// Show the main form of the given (sub)form procedure instead of the procedure itself
    pub fn with_main_form_resolution(mut self, enabled: bool) -> Self {
        self.resolve_main_form = enabled;
        self
    }

    /// Start loading and showing the content of a procedure's form.
    ///
    /// Returns immediately; the returned handle resolves once the dialog or the
    /// failure prompt has been dismissed.
    pub fn show_form_content_info(self: &Arc<Self>, procedure_id: i64) -> JoinHandle<Result<Outcome>> {
        let plugin = Arc::clone(self);
        tokio::spawn(async move { plugin.load_and_present(procedure_id).await })
    }

    /// Fetch, classify and present in the current task
    pub async fn load_and_present(&self, procedure_id: i64) -> Result<Outcome> {
        let generation = self.next_generation();
        let fetched = self.fetch_content(procedure_id).await;

        if !self.is_current(generation) {
            tracing::debug!(procedure_id, generation, "Dropping superseded form content response");
            return Ok(Outcome::Superseded);
        }

        match fetched {
            Ok(content) => {
                if content.is_empty() {
                    tracing::debug!(procedure_id, "Form has no content");
                }
                let items = FormContentRenderer::render(&content);
                tracing::info!(
                    procedure_id,
                    entries = content.len(),
                    items = items.len(),
                    "Presenting form content"
                );
                let count = items.len();
                self.present(items).await?;
                Ok(Outcome::Presented { items: count })
            }
            Err(e) => {
                tracing::warn!(procedure_id, "Failed to load form content: {e:#}");
                self.notify_failure().await?;
                Ok(Outcome::FetchFailed)
            }
        }
    }

    async fn fetch_content(&self, procedure_id: i64) -> Result<FormContent> {
        let procedure_id = if self.resolve_main_form {
            let result = self.call(GET_MAIN_FORM_PROCEDURE_ID, procedure_id).await?;
            let main_id = main_form_procedure_id(&result)?;
            tracing::debug!(procedure_id, main_id, "Resolved main form procedure");
            main_id
        } else {
            procedure_id
        };

        let result = self.call(GET_CONTENT, procedure_id).await?;
        Ok(FormContent::from_value(result)?)
    }

    async fn call(&self, method: &str, procedure_id: i64) -> Result<Value> {
        let response = self
            .host
            .execute_plugin_method(PluginCall {
                plugin: self.plugin_name.clone(),
                method: method.to_string(),
                payload: json!({ "id": procedure_id }),
                synchronous: false,
            })
            .await?;

        if response.status.is_failure() {
            return Err(FormInfoError::FetchFailed {
                method: method.to_string(),
                code: response.status.code,
                message: response.status.message,
            }
            .into());
        }
        Ok(response.result)
    }

    async fn present(&self, items: Vec<DisplayItem>) -> Result<()> {
        let presenter = Arc::clone(&self.presenter);
        tokio::task::spawn_blocking(move || presenter.present(DIALOG_TITLE, &items)).await?
    }

    async fn notify_failure(&self) -> Result<()> {
        let presenter = Arc::clone(&self.presenter);
        let choice =
            tokio::task::spawn_blocking(move || presenter.notify_failure(FAILURE_TITLE, FAILURE_MESSAGE))
                .await??;
        tracing::debug!(?choice, "Failure prompt dismissed");
        Ok(())
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Main form id as returned by `getMainFormProcedureId`: a bare number, a
/// numeric string, or an object with an `id` field
fn main_form_procedure_id(result: &Value) -> Result<i64, FormInfoError> {
    let id = match result {
        Value::Object(map) => map.get("id"),
        other => Some(other),
    };
    id.and_then(|id| match id {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
    .ok_or_else(|| FormInfoError::InvalidProcedureId(result.to_string()))
}
