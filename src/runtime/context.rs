use std::sync::Arc;

use crate::formats::{DefaultImageIo, ImageIo};

use super::{ExtractService, InfoService, Permissive, ResizeService, ValidationPolicy};

#[derive(Debug, Clone)]
pub struct AppContext {
    io: Arc<dyn ImageIo>,
    policy: Arc<dyn ValidationPolicy>,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            io: Arc::new(DefaultImageIo),
            policy: Arc::new(Permissive),
        }
    }
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_io(mut self, io: Arc<dyn ImageIo>) -> Self {
        self.io = io;
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn ValidationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn resize_service(&self) -> ResizeService<'_> {
        ResizeService::new(self.io.as_ref(), self.policy.as_ref())
    }

    pub fn extract_service(&self) -> ExtractService<'_> {
        ExtractService::new(self.io.as_ref(), self.policy.as_ref())
    }

    pub fn info_service(&self) -> InfoService<'_> {
        InfoService::new(self.io.as_ref())
    }
}
