use evolucao_core::ClinicalRecord;

use crate::format::{join_with_and, lowercase, parameter_list, present, sentence_body, with_unit};
use crate::vocabulary::AUSCULTATION;
use crate::Assessment;

/// Ventilation, ventilatory mechanics, auscultation and secretion.
pub fn build(assessment: &Assessment<'_>) -> String {
    let record = assessment.record();

    let mut sentences = vec![if assessment.support().is_mechanical() {
        mechanical_clause(record)
    } else {
        spontaneous_clause(record)
    }];

    if let Some(adjustments) = sentence_body(record.adjustments.as_deref()) {
        sentences.push(format!("Ajustes realizados: {adjustments}."));
    }

    sentences.push(mechanics_clause(record));
    sentences.push(auscultation_clause(record));
    sentences.push(secretion_clause(record));
    sentences.join(" ")
}

fn mechanical_clause(record: &ClinicalRecord) -> String {
    let mut clause = match present(record.breathing.as_deref()) {
        Some(breathing) => format!("Em suporte ventilatório ({breathing})"),
        None => "Em suporte ventilatório".to_string(),
    };

    let mode = present(record.vm_mode.as_deref()).unwrap_or("não informado");
    clause.push_str(&format!(" modo {mode}"));

    let parameters = parameter_list(&[
        ("PEEP", record.vm_peep.as_deref(), Some("cmH₂O")),
        ("FiO₂", record.vm_fio2.as_deref(), Some("%")),
        ("Vt", record.vm_vt.as_deref(), None),
        ("f", record.vm_rr_set.as_deref(), Some("ipm")),
        ("ΔP", record.vm_drive_pressure.as_deref(), Some("cmH₂O")),
        ("PS", record.vm_pressure_support.as_deref(), Some("cmH₂O")),
        ("Pplatô", record.vm_plateau.as_deref(), Some("cmH₂O")),
    ]);
    if !parameters.is_empty() {
        clause.push_str(&format!(" ({})", parameters.join(", ")));
    }

    clause.push('.');
    clause
}

fn spontaneous_clause(record: &ClinicalRecord) -> String {
    let breathing =
        lowercase(record.breathing.as_deref()).unwrap_or_else(|| "espontânea".to_string());
    let mut clause = format!("Apresenta ventilação {breathing}");

    match sentence_body(record.oxygen_device.as_deref()) {
        Some(device) => {
            clause.push_str(&format!(", via {device}"));
            if let Some(flow) = with_unit(record.flow.as_deref(), "L/min") {
                clause.push_str(&format!(" a {flow}"));
            }
        }
        None => clause.push_str(" em ar ambiente"),
    }

    let mut vitals = Vec::new();
    if let Some(spo2) = with_unit(record.spo2.as_deref(), "%") {
        vitals.push(format!("SpO₂ de {spo2}"));
    }
    if let Some(rate) = with_unit(record.respiratory_rate.as_deref(), "ipm") {
        vitals.push(format!("frequência respiratória de {rate}"));
    }
    if let Some(vitals) = join_with_and(&vitals) {
        clause.push_str(&format!(", mantendo {vitals}"));
    }

    clause.push('.');
    clause
}

fn mechanics_clause(record: &ClinicalRecord) -> String {
    let pattern = lowercase(record.ventilatory_pattern.as_deref())
        .unwrap_or_else(|| "sem particularidades".to_string());
    let expansibility =
        lowercase(record.expansibility.as_deref()).unwrap_or_else(|| "não avaliada".to_string());
    let effort = lowercase(record.effort.as_deref()).unwrap_or_else(|| "não avaliado".to_string());

    format!(
        "Padrão ventilatório {pattern}, expansibilidade {expansibility}, esforço respiratório {effort}."
    )
}

fn auscultation_clause(record: &ClinicalRecord) -> String {
    let right = AUSCULTATION
        .translate(record.ausc_right.as_deref())
        .unwrap_or("não avaliado".into());
    let left = AUSCULTATION
        .translate(record.ausc_left.as_deref())
        .unwrap_or("não avaliado".into());

    format!("Ausculta pulmonar: {right} à direita e {left} à esquerda.")
}

fn secretion_clause(record: &ClinicalRecord) -> String {
    let secretion = lowercase(record.secretion.as_deref()).filter(|value| value != "ausente");

    let Some(secretion) = secretion else {
        return "Vias aéreas livres de secreção.".to_string();
    };

    let indicated = present(record.secretion_criteria.as_deref())
        .is_some_and(|criteria| criteria.eq_ignore_ascii_case("sim"));

    if indicated {
        format!("Presença de secreção {secretion} (com indicação para higiene brônquica).")
    } else {
        format!("Presença de secreção {secretion}.")
    }
}
