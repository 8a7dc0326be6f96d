use crate::format::{lowercase, present, sentence_body};
use crate::Assessment;

/// Range of motion, global muscle strength and ICU mobility scales.
pub fn build(assessment: &Assessment<'_>) -> String {
    let record = assessment.record();

    let passive =
        lowercase(record.adm_passive.as_deref()).unwrap_or_else(|| "não avaliada".to_string());
    let active =
        lowercase(record.adm_active.as_deref()).unwrap_or_else(|| "não avaliada".to_string());
    let mut sentences = vec![format!(
        "Funcionalidade: ADM passiva {passive} e ativa {active}."
    )];

    if let Some(force) = present(record.muscle_force.as_deref()) {
        sentences.push(match sentence_body(record.force_reason.as_deref()) {
            Some(reason) => format!("Força muscular global grau {force} ({reason})."),
            None => format!("Força muscular global grau {force}."),
        });
    }

    let mut scales = Vec::new();
    if let Some(ims) = present(record.ims_score.as_deref()) {
        scales.push(format!("IMS: {ims}"));
    }
    if let Some(mrc) = present(record.mrc_score.as_deref()) {
        scales.push(format!("MRC Score: {mrc}"));
    }
    if !scales.is_empty() {
        sentences.push(format!("Escalas funcionais: {}.", scales.join(", ")));
    }

    sentences.join(" ")
}
