// Re-export the proto module from the shared `api-shared` crate so callers
// can reference `api_grpc::pb`.
pub use api_shared::pb;

use api_shared::pb::cardio_server::Cardio;
use api_shared::{AssessmentApi, HealthService};
use cardio_core::AssessmentError;
use tonic::{Request, Response, Status};

/// Maps a boundary error onto a gRPC status.
fn invalid_argument(err: AssessmentError) -> Status {
    tracing::warn!("rejected gRPC request: {}", err);
    Status::invalid_argument(err.to_string())
}

#[derive(Default, Clone)]
pub struct CardioService {
    api: AssessmentApi,
}

#[tonic::async_trait]
impl Cardio for CardioService {
    async fn health(&self, _req: Request<()>) -> Result<Response<pb::HealthRes>, Status> {
        Ok(Response::new(HealthService::check_health()))
    }

    async fn list_symptoms(
        &self,
        _req: Request<()>,
    ) -> Result<Response<pb::ListSymptomsRes>, Status> {
        Ok(Response::new(self.api.list_symptoms()))
    }

    async fn assess_risk(
        &self,
        req: Request<pb::AssessRiskReq>,
    ) -> Result<Response<pb::AssessRiskRes>, Status> {
        Ok(Response::new(self.api.assess_risk(req.into_inner())))
    }

    async fn check_symptoms(
        &self,
        req: Request<pb::CheckSymptomsReq>,
    ) -> Result<Response<pb::CheckSymptomsRes>, Status> {
        self.api
            .check_symptoms(req.into_inner())
            .map(Response::new)
            .map_err(invalid_argument)
    }

    async fn render_charts(
        &self,
        req: Request<pb::RenderChartsReq>,
    ) -> Result<Response<pb::RenderChartsRes>, Status> {
        self.api
            .render_charts(req.into_inner())
            .map(Response::new)
            .map_err(invalid_argument)
    }

    async fn assess(
        &self,
        req: Request<pb::AssessmentReq>,
    ) -> Result<Response<pb::AssessmentRes>, Status> {
        self.api
            .assess(req.into_inner())
            .map(Response::new)
            .map_err(invalid_argument)
    }
}
