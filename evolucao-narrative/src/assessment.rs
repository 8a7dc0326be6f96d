use evolucao_core::{ClinicalRecord, NarrativeConfig, VentilationSupport};
use tracing::warn;

/// A record paired with the decisions taken once before rendering.
#[derive(Debug, Clone, Copy)]
pub struct Assessment<'a> {
    record: &'a ClinicalRecord,
    support: VentilationSupport,
}

impl<'a> Assessment<'a> {
    pub fn new(record: &'a ClinicalRecord, config: &NarrativeConfig) -> Self {
        let support = match VentilationSupport::classify(record.breathing.as_deref()) {
            Some(support) => support,
            None => {
                warn!(
                    record_id = record.id.as_deref().unwrap_or_default(),
                    breathing = record.breathing.as_deref().unwrap_or_default(),
                    fallback = ?config.unrecognized_breathing,
                    "unrecognized ventilation type, applying configured fallback"
                );
                config.unrecognized_breathing
            }
        };

        Self { record, support }
    }

    pub fn record(&self) -> &'a ClinicalRecord {
        self.record
    }

    pub fn support(&self) -> VentilationSupport {
        self.support
    }
}
