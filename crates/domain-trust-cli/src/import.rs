//! CSV parsing for `domains create`.
//!
//! The first row is a header; columns are matched case-insensitively and may
//! appear in any order. Recognised columns: `abuseType`, `activity`,
//! `classification`, `comments`, `domain`, `reportType`, `source`,
//! `sourceName`, `urls`. Rows without a domain are skipped.

use std::collections::HashMap;
use std::io::Read;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use domain_trust_client::models::DomainSubmission;

const URL_SEPARATORS: [char; 5] = [',', ';', ' ', '\t', '\n'];

/// Parse domain submissions from CSV text.
pub(crate) fn read_domains_csv<R: Read>(input: R) -> Result<Vec<DomainSubmission>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let columns: HashMap<String, usize> = reader
        .headers()
        .context("failed to read csv header")?
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_ascii_lowercase(), index))
        .collect();

    let mut submissions = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read csv record {}", line + 1))?;
        let row = Row {
            columns: &columns,
            record: &record,
        };

        let domain = row.get("domain");
        if domain.is_empty() {
            continue;
        }

        submissions.push(DomainSubmission {
            abuse_type: row.get("abusetype"),
            activity: row.get("activity"),
            classification: row.get("classification"),
            comments: row.get("comments"),
            domain,
            report_type: row.get("reporttype"),
            source: row.get("source"),
            source_name: row.get("sourcename"),
            urls: split_urls(&row.get("urls")),
            ..DomainSubmission::default()
        });
    }
    Ok(submissions)
}

/// Split a URL list on commas, semicolons and whitespace, dropping blanks.
pub(crate) fn split_urls(raw: &str) -> Vec<String> {
    raw.split(URL_SEPARATORS)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

struct Row<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl Row<'_> {
    fn get(&self, column: &str) -> String {
        self.columns
            .get(column)
            .and_then(|index| self.record.get(*index))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}
