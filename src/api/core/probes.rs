//
//  alfresco-client
//  api/core/probes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Readiness and liveness probes. No authentication required.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CoreApi;
use crate::api::common::{ApiError, Entry};
use crate::api::operation::{decode_json, Call, Endpoint, Outcome};
use crate::api::request::RequestSpec;

pub const READY_PROBE: &str = "-ready-";
pub const LIVE_PROBE: &str = "-live-";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Probe {
    /// e.g. `readyProbe: Success - Tested`
    pub message: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type ProbeEntry = Entry<Probe>;

/// `GET /probes/{probeId}`
#[derive(Debug, Clone)]
pub struct GetProbe {
    pub probe_id: String,
}

impl Endpoint for GetProbe {
    type Output = ProbeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (503, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/probes/{probeId}").path("probeId", self.probe_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl CoreApi {
    /// Runs the [`READY_PROBE`] or [`LIVE_PROBE`]. A 503 (not ready) yields `None`.
    pub fn get_probe(&self, probe_id: impl Into<String>) -> Call<'_, GetProbe> {
        Call::new(
            &self.client,
            GetProbe {
                probe_id: probe_id.into(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::UnexpectedStatusPolicy;
    use reqwest::StatusCode;

    #[test]
    fn test_probe_unavailable() {
        let parsed = GetProbe::parse_response(StatusCode::SERVICE_UNAVAILABLE, b"", UnexpectedStatusPolicy::Raise).unwrap();
        assert!(parsed.is_none());

        let parsed = GetProbe::parse_response(
            StatusCode::OK,
            br#"{"entry":{"message":"liveProbe: Success - Tested"}}"#,
            UnexpectedStatusPolicy::Raise,
        )
        .unwrap();
        assert_eq!(parsed.unwrap().entry.message, "liveProbe: Success - Tested");
    }
}
