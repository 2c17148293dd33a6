use crate::wire::HealthRes;

/// Health check shared by every KalpSağlık surface.
#[derive(Clone, Debug, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "KalpSağlık is alive".into(),
        }
    }
}
