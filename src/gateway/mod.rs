use chrono::{Local, NaiveDate};
use tokio::runtime::Runtime;
use tracing::info;

use crate::wizard::Submission;

/// Archive returned by a successful generation call. Held in memory so a
/// repeated download re-uses the same artifact without another request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPack {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Every gateway failure collapses to one user-facing outcome: the design
/// does not distinguish a server rejection from a transport fault, so the
/// caller can only offer a manual retry.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("pack generation failed: {0}")]
    Failed(String),
    #[error("gateway runtime unavailable: {0}")]
    Runtime(String),
}

/// Outbound boundary to the document-generation service.
pub trait PackGateway: std::fmt::Debug {
    fn generate(&self, submission: &Submission) -> Result<GeneratedPack, GenerationError>;
}

/// Download name stamped with the ISO date of the request.
pub fn pack_file_name(date: NaiveDate) -> String {
    format!("tenancy_pack_{}.zip", date.format("%Y-%m-%d"))
}

/// HTTP implementation: one POST of the serialized submission, expecting the
/// archive bytes back. Wraps the async client behind an owned runtime so the
/// single-threaded wizard flow never sees async details.
pub struct HttpPackGateway {
    endpoint: String,
    client: reqwest::Client,
    runtime: Runtime,
}

impl HttpPackGateway {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GenerationError> {
        let runtime = Runtime::new().map_err(|err| GenerationError::Runtime(err.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
            runtime,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpPackGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPackGateway")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl PackGateway for HttpPackGateway {
    fn generate(&self, submission: &Submission) -> Result<GeneratedPack, GenerationError> {
        let result = self.runtime.block_on(async {
            let response = self
                .client
                .post(&self.endpoint)
                .json(submission)
                .send()
                .await?;
            let response = response.error_for_status()?;
            response.bytes().await
        });

        let bytes = result.map_err(|err| GenerationError::Failed(err.to_string()))?;
        let pack = GeneratedPack {
            file_name: pack_file_name(Local::now().date_naive()),
            bytes: bytes.to_vec(),
        };
        info!(
            file_name = %pack.file_name,
            size_bytes = pack.bytes.len(),
            "tenancy pack generated"
        );
        Ok(pack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_name_carries_the_request_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid date");
        assert_eq!(pack_file_name(date), "tenancy_pack_2026-08-23.zip");
    }

    #[test]
    fn http_gateway_reports_its_endpoint() {
        let gateway =
            HttpPackGateway::new("http://localhost:5000/api/generate-tenancy-pack")
                .expect("runtime available");
        assert_eq!(
            gateway.endpoint(),
            "http://localhost:5000/api/generate-tenancy-pack"
        );
    }
}
