//! Clinical record to printable narrative.
//!
//! Turns a structured physiotherapy assessment into the Portuguese prose of
//! the printed evolution record. Rendering is pure: the same record always
//! yields the same text, and no combination of blank fields is an error.

pub mod assemble;
pub mod assessment;
pub mod format;
pub mod interventions;
pub mod report;
pub mod sections;
pub mod vocabulary;

pub use assemble::assemble;
pub use assessment::Assessment;
pub use interventions::render as render_interventions;
pub use report::{
    compile_records_str, compile_records_value, compile_report, parse_record, render_record,
};

use evolucao_core::{ClinicalRecord, NarrativeConfig};

/// Assessment paragraph for a single record.
pub fn narrative(record: &ClinicalRecord, config: &NarrativeConfig) -> String {
    assemble(&Assessment::new(record, config))
}
