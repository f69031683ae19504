use crate::pb::HealthRes;

/// Health check shared by the gRPC and REST APIs.
pub struct HealthService;

impl HealthService {
    /// Reports the service as alive.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Cardio is alive".into(),
        }
    }
}
