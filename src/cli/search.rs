//
//  alfresco-client
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search and SQL commands

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::Value;

use crate::api::request::Param;
use crate::api::search::{Paging, QueryLanguage, RequestQuery, ResultNode, SearchRequest};
use crate::api::search_sql::{SqlRequest, SqlResultRow};
use crate::output::{truncate, write_json, OutputFormat, TableBuilder, TableRow};

use super::{require, GlobalOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Afts,
    Cmis,
    Lucene,
}

impl From<LanguageArg> for QueryLanguage {
    fn from(language: LanguageArg) -> Self {
        match language {
            LanguageArg::Afts => QueryLanguage::Afts,
            LanguageArg::Cmis => QueryLanguage::Cmis,
            LanguageArg::Lucene => QueryLanguage::Lucene,
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text, e.g. "cm:name:budget*"
    pub query: String,

    #[arg(long, short = 'q', value_enum, default_value = "afts")]
    pub language: LanguageArg,

    #[arg(long, short = 'l', default_value = "25")]
    pub limit: i64,

    #[arg(long, default_value = "0")]
    pub skip: i64,
}

#[derive(Args, Debug)]
pub struct SqlArgs {
    /// SQL statement, e.g. "select cm_name from alfresco where cm_creator = 'admin'"
    pub statement: String,

    /// Return the raw Solr response format
    #[arg(long)]
    pub solr: bool,
}

impl TableRow for ResultNode {
    fn headers() -> &'static [&'static str] {
        &["NAME", "TYPE", "ID", "SCORE"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        let score = self
            .search
            .as_ref()
            .and_then(|s| s.score)
            .map(|s| format!("{:.3}", s))
            .unwrap_or_else(|| "-".to_string());
        vec![truncate(&self.name, 48), self.node_type.clone(), self.id.clone(), score]
    }
}

impl SearchArgs {
    pub(crate) fn request(&self) -> SearchRequest {
        let mut request = SearchRequest::new(RequestQuery::new(&self.query, self.language.into()));
        request.paging = Param::Value(Paging {
            max_items: self.limit,
            skip_count: self.skip,
        });
        request
    }

    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let result = require(alfresco.search().search(self.request()).send_detailed().await?)?;

        let writer = global.writer();
        let hits: Vec<ResultNode> = result.hits().cloned().collect();
        writer.write_list(&hits)?;

        let pagination = &result.list.pagination;
        if let Some(total) = pagination.total_items {
            writer.write_info(&format!("{} hit(s), showing {}", total, hits.len()));
        }
        Ok(())
    }
}

/// Column labels in first-seen order across all rows.
fn sql_columns(rows: &[SqlResultRow]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for column in rows.iter().flat_map(|r| r.entry.iter()) {
        if !columns.contains(&column.label) {
            columns.push(column.label.clone());
        }
    }
    columns
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl SqlArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let mut request = SqlRequest::new(&self.statement)?;
        if self.solr {
            request.format = Param::Value("solr".to_string());
        }
        let result = require(alfresco.search_sql().search_sql(request).send_detailed().await?)?;

        let writer = global.writer();
        if writer.format() == OutputFormat::Json || result.list.is_none() {
            return write_json(&result);
        }

        let rows = result.rows();
        if rows.is_empty() {
            writer.write_info("No results.");
            return Ok(());
        }
        let columns = sql_columns(rows);
        TableBuilder::new()
            .color(writer.color_enabled())
            .headers(columns.iter().cloned())
            .rows(rows.iter().map(|row| columns.iter().map(|c| cell(row.get(c))).collect::<Vec<_>>()))
            .print();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::search_sql::SqlResultColumn;
    use serde_json::json;

    #[test]
    fn test_search_request_from_args() {
        let args = SearchArgs {
            query: "SELECT * FROM cmis:folder".into(),
            language: LanguageArg::Cmis,
            limit: 10,
            skip: 20,
        };
        let json = serde_json::to_value(args.request()).unwrap();
        assert_eq!(json["query"]["language"], "cmis");
        assert_eq!(json["paging"], json!({"maxItems": 10, "skipCount": 20}));
    }

    #[test]
    fn test_sql_columns_and_cells() {
        let column = |label: &str, value: Value| SqlResultColumn {
            label: label.into(),
            value,
            ..Default::default()
        };
        let rows = vec![
            SqlResultRow {
                entry: vec![column("cm_name", json!("a.txt")), column("cm_creator", json!("admin"))],
                ..Default::default()
            },
            SqlResultRow {
                entry: vec![column("cm_name", json!("b.txt")), column("size", json!(42))],
                ..Default::default()
            },
        ];
        assert_eq!(sql_columns(&rows), vec!["cm_name", "cm_creator", "size"]);
        assert_eq!(cell(rows[1].get("size")), "42");
        assert_eq!(cell(rows[1].get("cm_creator")), "-");
    }
}
