//! Batch orchestration.
//!
//! One `MockupGenerator` per process (or per test harness) owns the
//! template/output directories and the result cache, and turns a
//! `MockupRequest` into one `MockupResult` per requested type. Types are
//! generated sequentially in caller order and a failure never stops the
//! rest of the batch.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::cache::{self, ResultCache, DEFAULT_TTL};
use crate::compositor::{ComposeJob, Compositor};
use crate::industry::{Industry, LogoPosition, MockupType};
use crate::logo::LogoSource;

/// Default distinct-color ceiling for the auto-vectorization pass.
pub const DEFAULT_MAX_VECTOR_COLORS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("companyName is required")]
    MissingCompanyName,
    #[error("at least one mockup type must be selected")]
    NoMockupTypes,
}

/// One mockup generation request. `lead_id` is carried for the excluded
/// CRM-fetch collaborator and plays no role in the core pipeline.
#[derive(Clone, Debug)]
pub struct MockupRequest {
    pub logo: LogoSource,
    pub industry: Industry,
    pub company_name: String,
    pub tagline: Option<String>,
    pub mockup_types: Vec<MockupType>,
    pub logo_position: Option<LogoPosition>,
    pub lead_id: Option<String>,
}

impl MockupRequest {
    pub fn new(logo: LogoSource, industry: Industry, company_name: impl Into<String>) -> Self {
        Self {
            logo,
            industry,
            company_name: company_name.into(),
            tagline: None,
            mockup_types: Vec::new(),
            logo_position: None,
            lead_id: None,
        }
    }

    /// The validation the external request layer applies before handing
    /// the request to the core.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.company_name.trim().is_empty() {
            return Err(RequestError::MissingCompanyName);
        }
        if self.mockup_types.is_empty() {
            return Err(RequestError::NoMockupTypes);
        }
        Ok(())
    }
}

/// Per-type outcome. Both success and failure flow through the cache, so
/// this stays a plain value rather than a `Result`.
#[derive(Clone, Debug, Serialize)]
pub struct MockupResult {
    #[serde(rename = "type")]
    pub mockup_type: MockupType,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MockupResult {
    pub fn ok(mockup_type: MockupType, output_path: PathBuf) -> Self {
        Self {
            mockup_type,
            success: true,
            output_path: Some(output_path),
            error: None,
        }
    }

    pub fn err(mockup_type: MockupType, error: String) -> Self {
        Self {
            mockup_type,
            success: false,
            output_path: None,
            error: Some(error),
        }
    }
}

/// Caller-facing aggregation: all-or-nothing over the per-type results.
#[derive(Clone, Debug, Serialize)]
pub struct MockupBatch {
    pub id: String,
    pub mockups: Vec<GeneratedMockup>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GeneratedMockup {
    #[serde(rename = "type")]
    pub mockup_type: MockupType,
    pub output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to generate some mockups: {0}")]
    Failed(String),
}

impl MockupBatch {
    /// Succeeds only if every member succeeded; otherwise joins the error
    /// messages, and no partial batch is committed.
    pub fn from_results(results: &[MockupResult]) -> Result<Self, BatchError> {
        let errors: Vec<&str> = results
            .iter()
            .filter(|r| !r.success)
            .filter_map(|r| r.error.as_deref())
            .collect();
        if !errors.is_empty() {
            return Err(BatchError::Failed(errors.join(", ")));
        }

        let created_at = Utc::now();
        Ok(Self {
            id: format!("mockup-{}", created_at.timestamp_millis()),
            mockups: results
                .iter()
                .filter_map(|r| {
                    r.output_path.as_ref().map(|p| GeneratedMockup {
                        mockup_type: r.mockup_type,
                        output_path: p.clone(),
                    })
                })
                .collect(),
            created_at,
        })
    }
}

/// Construction-time settings, overridable from the environment in
/// deployments that cannot pass explicit paths.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    pub cache_ttl: Duration,
    pub max_vector_colors: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("assets/templates"),
            output_dir: PathBuf::from("generated"),
            cache_ttl: DEFAULT_TTL,
            max_vector_colors: DEFAULT_MAX_VECTOR_COLORS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(dir) = std::env::var("MOCKGEN_TEMPLATES_DIR") {
            cfg.templates_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("MOCKGEN_OUTPUT_DIR") {
            cfg.output_dir = PathBuf::from(dir);
        }
        cfg
    }
}

pub struct MockupGenerator {
    config: GeneratorConfig,
    cache: ResultCache,
}

impl MockupGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            cache: ResultCache::new(),
        }
    }

    /// Operational access to the result cache (`stats`/`clear`).
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Generate every requested mockup type in order. Never short-circuits:
    /// each type gets its own success-or-error entry and failed siblings do
    /// not suppress successful outputs.
    pub fn generate_all(&self, request: &MockupRequest) -> Vec<MockupResult> {
        let compositor = Compositor::new(
            &self.config.templates_dir,
            &self.config.output_dir,
            self.config.max_vector_colors,
        );
        let profile = request.industry.profile();

        let mut results = Vec::with_capacity(request.mockup_types.len());
        for &mockup_type in &request.mockup_types {
            let key = cache::mockup_fingerprint(
                &request.logo,
                mockup_type,
                request.industry,
                &request.company_name,
                request.tagline.as_deref(),
                request.logo_position,
            );
            let result = self.cache.get_or_compute(&key, self.config.cache_ttl, || {
                let job = ComposeJob {
                    logo: &request.logo,
                    mockup_type,
                    company_name: &request.company_name,
                    tagline: request.tagline.as_deref(),
                    profile,
                    position: request.logo_position,
                };
                match compositor.compose(&job) {
                    Ok(path) => MockupResult::ok(mockup_type, path),
                    Err(e) => {
                        warn!(mockup_type = %mockup_type, error = %e, "mockup failed");
                        MockupResult::err(mockup_type, e.to_string())
                    }
                }
            });
            results.push(result);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_requires_name_and_types() {
        let mut req = MockupRequest::new(
            LogoSource::path("/tmp/logo.png"),
            Industry::Technology,
            "  ",
        );
        req.mockup_types = vec![MockupType::TshirtFront];
        assert_eq!(req.validate(), Err(RequestError::MissingCompanyName));

        req.company_name = "Acme".into();
        req.mockup_types.clear();
        assert_eq!(req.validate(), Err(RequestError::NoMockupTypes));

        req.mockup_types = vec![MockupType::TshirtFront];
        assert!(req.validate().is_ok());
    }

    #[test]
    fn batch_fails_whole_when_any_member_fails() {
        let results = vec![
            MockupResult::ok(MockupType::TshirtFront, PathBuf::from("/out/front.png")),
            MockupResult::err(MockupType::TshirtBack, "template not found".into()),
            MockupResult::err(MockupType::HoodieFront, "logo decode failed".into()),
        ];
        match MockupBatch::from_results(&results) {
            Err(BatchError::Failed(msg)) => {
                assert_eq!(msg, "template not found, logo decode failed")
            }
            Ok(_) => panic!("partial batch must not commit"),
        }
    }

    #[test]
    fn batch_aggregates_on_full_success() {
        let results = vec![
            MockupResult::ok(MockupType::TshirtFront, PathBuf::from("/out/front.png")),
            MockupResult::ok(MockupType::TshirtBack, PathBuf::from("/out/back.png")),
        ];
        let batch = MockupBatch::from_results(&results).unwrap();
        assert!(batch.id.starts_with("mockup-"));
        assert_eq!(batch.mockups.len(), 2);
        assert_eq!(batch.mockups[0].mockup_type, MockupType::TshirtFront);
    }

    #[test]
    fn batch_serializes_for_the_api_layer() {
        let results = vec![MockupResult::ok(
            MockupType::TankTopFront,
            PathBuf::from("/out/tank.png"),
        )];
        let batch = MockupBatch::from_results(&results).unwrap();
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["mockups"][0]["type"], "tank-top-front");
        assert!(json["id"].as_str().unwrap().starts_with("mockup-"));
    }
}
