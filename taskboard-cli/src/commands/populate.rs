//! `taskboard populate`

use anyhow::Context;
use taskboard_kanban::populate::{PopulateReport, PopulateSampleData};
use taskboard_kanban::OperationProcessor;

use super::Runtime;

pub async fn run(runtime: &Runtime) -> anyhow::Result<String> {
    let value = runtime
        .processor
        .process(&PopulateSampleData::new(), &runtime.ctx)
        .await
        .context("populating sample data")?;
    let report: PopulateReport = serde_json::from_value(value)?;
    Ok(render(&report))
}

pub fn render(report: &PopulateReport) -> String {
    let mut lines = Vec::new();
    lines.extend(report.users_added.iter().map(|u| format!("Added user: {u}")));
    lines.extend(report.tags_added.iter().map(|t| format!("Added tag: {t}")));
    lines.extend(
        report
            .skipped
            .iter()
            .map(|s| format!("Skipped {s}: it might already exist")),
    );
    lines.push("Sample data population completed.".to_string());
    lines.join("\n")
}
