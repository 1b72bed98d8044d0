use std::{
    env,
    process::Child,
    sync::{Arc, Mutex},
};

use crate::{gateway_url, DEFAULT_GATEWAY_URL, GATEWAY_URL_ENV};

/// Shared shell state. At most one gateway child is held at a time; the slot
/// is cleared by the exit watcher when the process dies on its own.
#[derive(Debug)]
pub(crate) struct GatewayState {
    pub(crate) child: Arc<Mutex<Option<Child>>>,
    pub(crate) gateway_url: String,
}

impl Default for GatewayState {
    fn default() -> Self {
        Self {
            child: Arc::new(Mutex::new(None)),
            gateway_url: gateway_url::normalize_gateway_url(
                &env::var(GATEWAY_URL_ENV).unwrap_or_default(),
                DEFAULT_GATEWAY_URL,
            ),
        }
    }
}
