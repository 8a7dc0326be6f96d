//! Batch compilation of records into a printable report.

use evolucao_core::{
    ClinicalRecord, NarrativeConfig, NarrativeError, PrintableReport, RecordHeader,
    RenderOutcome, RenderedRecord, ReportEntry, ReportSection, SectionKind,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::assemble::assemble;
use crate::format::present;
use crate::{interventions, Assessment};

/// Render every printed block of one record.
pub fn render_record(record: &ClinicalRecord, config: &NarrativeConfig) -> RenderedRecord {
    let assessment = Assessment::new(record, config);

    let mut sections = vec![ReportSection::new(
        SectionKind::Assessment,
        assemble(&assessment),
    )];

    if let Some(exams) = present(record.complementary_exams.as_deref()) {
        sections.push(ReportSection::new(SectionKind::ComplementaryExams, exams));
    }
    if let Some(intercurrences) = present(record.intercurrences.as_deref()) {
        sections.push(ReportSection::new(
            SectionKind::Intercurrences,
            intercurrences,
        ));
    }

    sections.push(ReportSection::new(
        SectionKind::Conduct,
        interventions::render(&record.interventions),
    ));
    sections.push(ReportSection::new(
        SectionKind::Evolution,
        present(record.evolution.as_deref()).unwrap_or(config.evolution_placeholder.as_str()),
    ));
    sections.push(ReportSection::new(
        SectionKind::Signature,
        present(record.professional.as_deref()).unwrap_or(config.signature_placeholder.as_str()),
    ));

    RenderedRecord {
        header: RecordHeader {
            date: record.display_date(),
            time: present(record.time.as_deref()).map(str::to_string),
            ward: present(record.ward.as_deref()).map(str::to_string),
        },
        sections,
    }
}

/// Compile already-typed records. Never fails; an empty slice gives an empty report.
pub fn compile_report(records: &[ClinicalRecord], config: &NarrativeConfig) -> PrintableReport {
    let entries = records
        .iter()
        .map(|record| ReportEntry {
            record_id: record.id.clone(),
            outcome: RenderOutcome::Rendered(render_record(record, config)),
        })
        .collect::<Vec<_>>();

    debug!(records = entries.len(), "compiled printable report");
    PrintableReport::new(entries)
}

/// Compile the persisted JSON record array.
pub fn compile_records_str(
    records_json: &str,
    config: &NarrativeConfig,
) -> Result<PrintableReport, NarrativeError> {
    let value: Value =
        serde_json::from_str(records_json).map_err(|err| NarrativeError::Parse(err.to_string()))?;
    compile_records_value(&value, config)
}

/// Compile a JSON array of records.
///
/// Records with the wrong field kinds are reported as rejected entries in
/// place; the remaining records still render.
pub fn compile_records_value(
    records: &Value,
    config: &NarrativeConfig,
) -> Result<PrintableReport, NarrativeError> {
    let items = records.as_array().ok_or_else(|| {
        NarrativeError::Parse(format!(
            "esperado um array de registros, recebido {}",
            json_kind(records)
        ))
    })?;

    let mut entries = Vec::with_capacity(items.len());
    let mut rejected = 0usize;

    for (index, item) in items.iter().enumerate() {
        let record_id = item.get("id").and_then(Value::as_str).map(str::to_string);

        let outcome = match parse_record(index, item) {
            Ok(record) => RenderOutcome::Rendered(render_record(&record, config)),
            Err(err) => {
                warn!(
                    index,
                    record_id = record_id.as_deref().unwrap_or_default(),
                    error = %err,
                    "record rejected"
                );
                rejected += 1;
                RenderOutcome::Rejected {
                    reason: err.to_string(),
                }
            }
        };

        entries.push(ReportEntry { record_id, outcome });
    }

    debug!(records = entries.len(), rejected, "compiled printable report");
    Ok(PrintableReport::new(entries))
}

/// Validate one JSON value as a clinical record.
pub fn parse_record(index: usize, value: &Value) -> Result<ClinicalRecord, NarrativeError> {
    if !value.is_object() {
        return Err(NarrativeError::InvalidRecordShape {
            index,
            reason: format!("esperado um objeto, recebido {}", json_kind(value)),
        });
    }

    ClinicalRecord::deserialize(value).map_err(|err| NarrativeError::InvalidRecordShape {
        index,
        reason: err.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "texto",
        Value::Array(_) => "array",
        Value::Object(_) => "objeto",
    }
}
