//! Shared application state.

use crate::config::ServiceConfig;
use hypatia_docs::{DocsCache, DocsRefresher};
use hypatia_interface::Notify;
use hypatia_pipeline::ScriptGenerator;
use hypatia_render::Renderer;
use std::sync::Arc;

/// Everything the handlers need, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<ScriptGenerator>,
    renderer: Arc<Renderer>,
    notifier: Arc<dyn Notify>,
    docs: Arc<DocsCache>,
    refresher: Arc<DocsRefresher>,
    config: Arc<ServiceConfig>,
}

impl AppState {
    /// Assemble the state from its parts.
    pub fn new(
        generator: Arc<ScriptGenerator>,
        renderer: Arc<Renderer>,
        notifier: Arc<dyn Notify>,
        docs: Arc<DocsCache>,
        refresher: Arc<DocsRefresher>,
        config: Arc<ServiceConfig>,
    ) -> Self {
        Self {
            generator,
            renderer,
            notifier,
            docs,
            refresher,
            config,
        }
    }

    /// The script generation pipeline.
    pub fn generator(&self) -> &ScriptGenerator {
        &self.generator
    }

    /// The renderer invoker.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The notification channel.
    pub fn notifier(&self) -> &Arc<dyn Notify> {
        &self.notifier
    }

    /// The documentation cache.
    pub fn docs(&self) -> &DocsCache {
        &self.docs
    }

    /// The documentation refresher.
    pub fn refresher(&self) -> &DocsRefresher {
        &self.refresher
    }

    /// The service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
