use crate::format::{parameter_list, present, sentence_body};
use crate::Assessment;

/// Arterial blood gas. Empty when pH, PaO₂ and the interpretation are all absent.
pub fn build(assessment: &Assessment<'_>) -> String {
    let record = assessment.record();

    let triggers = [
        record.gas_ph.as_deref(),
        record.gas_pao2.as_deref(),
        record.gas_result.as_deref(),
    ];
    if triggers.into_iter().all(|raw| present(raw).is_none()) {
        return String::new();
    }

    let result = sentence_body(record.gas_result.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "resultado pendente".to_string());
    let mut sentence = format!("Gasometria arterial evidencia {result}");

    let parameters = parameter_list(&[
        ("pH", record.gas_ph.as_deref(), None),
        ("PaO₂", record.gas_pao2.as_deref(), None),
        ("PaCO₂", record.gas_paco2.as_deref(), None),
        ("HCO₃", record.gas_hco3.as_deref(), None),
        ("BE", record.gas_be.as_deref(), None),
        ("Lactato", record.gas_lactate.as_deref(), None),
        ("SatO₂", record.gas_sao2.as_deref(), Some("%")),
    ]);
    if !parameters.is_empty() {
        sentence.push_str(&format!(" ({})", parameters.join(", ")));
    }

    sentence.push('.');
    sentence
}
