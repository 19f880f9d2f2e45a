//! # Backdrop Preference Controller
//!
//! One controller instance runs per page load. [`Controller::initialize`]
//! fetches the saved choice and catalog, applies the choice to the style
//! state, and, when the page carries the picker, populates and synchronizes
//! the selection control. [`Controller::select`] handles a picker change:
//! apply first, then persist best-effort.
//!
//! Error policy (deliberate): a failed fetch falls back to the default image
//! and is not surfaced or retried; a failed persist is swallowed and the
//! visual change stands. Local state can therefore run ahead of what the
//! server has saved.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::choice::{Background, DEFAULT_IMAGE};
use crate::error::BackdropError;
use crate::selector::Selector;
use crate::style::BackdropStyle;
use crate::wire::{Listing, SetRequest};

/// The two endpoints the controller depends on.
///
/// The HTTP implementation is [`HttpPreferenceClient`]; tests substitute a
/// stub to exercise the failure paths.
#[async_trait]
pub trait PreferenceClient {
    /// Fetch the catalog and the saved choice.
    async fn fetch(&self) -> Result<Listing, BackdropError>;

    /// Persist a newly chosen backdrop.
    async fn persist(&self, choice: &str) -> Result<(), BackdropError>;
}

/// `PreferenceClient` over HTTP, talking to the backdrop server.
#[derive(Debug, Clone)]
pub struct HttpPreferenceClient {
    base: String,
    http: reqwest::Client,
}

impl HttpPreferenceClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PreferenceClient for HttpPreferenceClient {
    async fn fetch(&self) -> Result<Listing, BackdropError> {
        let response = self
            .http
            .get(format!("{}/bg/list", self.base))
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| BackdropError::Http(format!("GET /bg/list failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BackdropError::Http(format!(
                "GET /bg/list returned {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BackdropError::Http(format!("Failed to read /bg/list body: {e}")))?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn persist(&self, choice: &str) -> Result<(), BackdropError> {
        let body = serde_json::to_vec(&SetRequest {
            file: choice.to_string(),
        })?;
        let response = self
            .http
            .post(format!("{}/bg/set", self.base))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BackdropError::Http(format!("POST /bg/set failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BackdropError::Http(format!(
                "POST /bg/set returned {}",
                response.status()
            )));
        }
        // The response body is not consulted.
        Ok(())
    }
}

/// The per-page controller.
///
/// Two states: uninitialized and initialized. [`Controller::initialize`]
/// makes the single transition; calling it again is a no-op, mirroring the
/// page's once-per-load readiness hook.
#[derive(Debug)]
pub struct Controller<C> {
    client: C,
    style: BackdropStyle,
    selector: Option<Selector>,
    catalog: Catalog,
    initialized: bool,
}

impl<C: PreferenceClient> Controller<C> {
    /// A controller for a page without the picker: the style still applies,
    /// no selection control is built.
    pub fn new(client: C) -> Self {
        Self {
            client,
            style: BackdropStyle::new(),
            selector: None,
            catalog: Catalog::default(),
            initialized: false,
        }
    }

    /// A controller for a page that has the picker element.
    pub fn with_selector(client: C) -> Self {
        Self {
            selector: Some(Selector::new()),
            ..Self::new(client)
        }
    }

    /// Fetch, apply, and (if present) wire up the picker. Runs at most once.
    ///
    /// Never fails: any fetch problem applies the default image and moves on.
    pub async fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        match self.client.fetch().await {
            Ok(listing) => {
                let catalog = Catalog::new(listing.files, listing.labels);
                let current = listing
                    .current
                    .filter(|c| !c.is_empty())
                    .or_else(|| catalog.files.first().cloned())
                    .unwrap_or_else(|| DEFAULT_IMAGE.to_string());

                // Always applied, even on pages without the picker.
                self.style.apply(&Background::parse(&current));

                if let Some(selector) = &mut self.selector {
                    selector.populate(&catalog);
                    selector.sync(&current);
                }
                self.catalog = catalog;
            }
            Err(_) => {
                self.style.apply(&Background::default_image());
            }
        }
    }

    /// Handle a picker change: apply the new choice immediately, then
    /// persist it best-effort.
    ///
    /// Optimistic update: a failed persist never rolls the visuals back.
    /// Overlapping calls are last-applied-wins; their writes stay
    /// independent and unordered.
    pub async fn select(&mut self, choice: &str) {
        self.style.apply(&Background::parse(choice));
        if let Some(selector) = &mut self.selector {
            selector.sync(choice);
        }
        let _ = self.client.persist(choice).await;
    }

    /// The applied style state.
    pub fn style(&self) -> &BackdropStyle {
        &self.style
    }

    /// The picker model, when this page has one.
    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    /// The catalog from the last successful fetch.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
