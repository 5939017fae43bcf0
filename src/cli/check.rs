//
//  alfresco-client
//  cli/check.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connectivity check

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use crate::alfresco::{ConnectivityReport, ProbeResult};
use crate::output::{format_outcome, TableRow};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Exchange credentials for a ticket first and probe with it
    #[arg(long)]
    pub ticket: bool,
}

#[derive(Debug, Serialize)]
struct ProbeRow {
    api: String,
    base_url: String,
    reachable: bool,
    status: Option<u16>,
    error: Option<String>,
    #[serde(skip)]
    result: ProbeResult,
}

impl From<&ProbeResult> for ProbeRow {
    fn from(result: &ProbeResult) -> Self {
        use crate::alfresco::ProbeOutcome;

        let (status, error) = match &result.outcome {
            ProbeOutcome::Reachable(status) | ProbeOutcome::Rejected(status) => (Some(*status), None),
            ProbeOutcome::Failed(message) => (None, Some(message.clone())),
        };
        Self {
            api: result.api.to_string(),
            base_url: result.base_url.clone(),
            reachable: result.outcome.is_reachable(),
            status,
            error,
            result: result.clone(),
        }
    }
}

impl TableRow for ProbeRow {
    fn headers() -> &'static [&'static str] {
        &["API", "BASE URL", "RESULT"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.api.clone(),
            self.base_url.clone(),
            format_outcome(&self.result.outcome, color),
        ]
    }
}

impl CheckArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut alfresco = global.connect()?;
        if self.ticket {
            alfresco.authenticate().await?;
            alfresco.share_authentication()?;
        }

        let report = alfresco.check_connectivity().await;
        self.display(&report, global)
    }

    fn display(&self, report: &ConnectivityReport, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let rows: Vec<ProbeRow> = report.iter().map(ProbeRow::from).collect();
        writer.write_list(&rows)?;

        let failing = rows.iter().filter(|r| !r.reachable).count();
        if failing > 0 {
            bail!("{} of {} APIs did not answer successfully", failing, rows.len());
        }
        writer.write_success("All APIs reachable");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alfresco::ProbeOutcome;
    use crate::api::ApiKind;

    #[test]
    fn test_probe_row() {
        let result = ProbeResult {
            api: ApiKind::SearchSql,
            base_url: "http://localhost:8080/alfresco/api/-default-/public/search/versions/1".into(),
            outcome: ProbeOutcome::Rejected(501),
        };
        let row = ProbeRow::from(&result);
        assert_eq!(row.api, "search-sql");
        assert!(!row.reachable);
        assert_eq!(row.status, Some(501));
        assert_eq!(row.row(false)[2], "rejected (501)");

        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("result").is_none());
    }
}
