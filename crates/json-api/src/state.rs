//! Shared request state.

use std::sync::Arc;

use souk_app::context::AppContext;

/// Injected into the depot by `affix_state`; handlers reach the domain
/// services through `state.app`.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
