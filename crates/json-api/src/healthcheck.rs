//! BengolSale JSON API Healthcheck Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[salvo::handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Json(HealthResponse {
        status: "ok".to_string(),
    }));
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let router = Router::new().push(Router::with_path("healthcheck").get(handler));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: HealthResponse = res.take_json().await?;

        assert_eq!(response.status, "ok");

        Ok(())
    }
}
