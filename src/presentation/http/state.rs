// src/presentation/http/state.rs
use crate::{application::services::ApplicationServices, config::loopback_proxies};
use std::{net::IpAddr, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Peers whose `X-Forwarded-For` / `X-Real-IP` headers are believed.
    pub trusted_proxies: Arc<[IpAddr]>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            services,
            trusted_proxies: Arc::from(loopback_proxies()),
        }
    }

    pub fn with_trusted_proxies(mut self, proxies: Vec<IpAddr>) -> Self {
        self.trusted_proxies = Arc::from(proxies);
        self
    }
}
