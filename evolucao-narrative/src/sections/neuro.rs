use crate::format::{pain_grade, present, vasoactive_drug};
use crate::vocabulary::{COLLABORATION, CONSCIOUSNESS, DECUBITUS};
use crate::Assessment;

/// Consciousness, collaboration, position, pain and vasoactive drugs.
pub fn build(assessment: &Assessment<'_>) -> String {
    let record = assessment.record();

    let consciousness = CONSCIOUSNESS
        .translate(record.consciousness.as_deref())
        .unwrap_or("com nível de consciência não informado".into());
    let mut opening = format!("Paciente encontra-se {consciousness}");

    if let Some(collaboration) = COLLABORATION.translate(record.collaboration.as_deref()) {
        opening.push_str(", ");
        opening.push_str(&collaboration);
    }

    let decubitus = DECUBITUS
        .translate(record.decubitus.as_deref())
        .unwrap_or("em posicionamento não informado".into());
    opening.push_str(&format!(", {decubitus}."));

    let mut sentences = vec![opening];
    sentences.extend(pain_sentence(record.pain_score.as_deref()));
    sentences.extend(vasoactive_sentence(record.dva.as_deref()));
    sentences.join(" ")
}

fn pain_sentence(raw: Option<&str>) -> Option<String> {
    let score = present(raw)?;
    if matches!(score.to_lowercase().as_str(), "não avaliado" | "nao avaliado") {
        return Some("Dor não avaliada.".to_string());
    }

    let grade = pain_grade(score);
    if grade == "0" {
        Some("Nega dor (EVA 0).".to_string())
    } else {
        Some(format!(
            "Refere algia grau {grade} na Escala Visual Analógica (EVA)."
        ))
    }
}

fn vasoactive_sentence(raw: Option<&str>) -> Option<String> {
    let dva = present(raw)?;
    if matches!(dva.to_lowercase().as_str(), "não" | "nao") {
        return None;
    }

    Some(match vasoactive_drug(dva) {
        Some(drug) => format!("Em uso de drogas vasoativas ({drug})."),
        None => "Em uso de drogas vasoativas.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use evolucao_core::ClinicalRecord;

    use super::build;
    use crate::sections::test_support::{text, with_record};

    #[test]
    fn empty_record_uses_default_wording() {
        let sentence = with_record(&ClinicalRecord::default(), build);
        assert_eq!(
            sentence,
            "Paciente encontra-se com nível de consciência não informado, em posicionamento não informado."
        );
    }

    #[test]
    fn coded_values_are_translated() {
        let record = ClinicalRecord {
            consciousness: text("Alerta"),
            collaboration: text("Boa"),
            decubitus: text("DL E"),
            pain_score: text("3"),
            dva: text("Sim (Noradrenalina)"),
            ..ClinicalRecord::default()
        };
        assert_eq!(
            with_record(&record, build),
            "Paciente encontra-se alerta, com boa colaboração, em decúbito lateral esquerdo. \
             Refere algia grau 3 na Escala Visual Analógica (EVA). \
             Em uso de drogas vasoativas (Noradrenalina)."
        );
    }

    #[test]
    fn pain_codes() {
        let zero = ClinicalRecord {
            pain_score: text("0 - Sem Dor"),
            ..ClinicalRecord::default()
        };
        assert!(with_record(&zero, build).ends_with(" Nega dor (EVA 0)."));

        let not_assessed = ClinicalRecord {
            pain_score: text("Não avaliado"),
            ..ClinicalRecord::default()
        };
        assert!(with_record(&not_assessed, build).ends_with(" Dor não avaliada."));

        let worst = ClinicalRecord {
            pain_score: text("10 - Pior dor possível"),
            ..ClinicalRecord::default()
        };
        assert!(with_record(&worst, build).contains("algia grau 10 na"));
    }

    #[test]
    fn free_text_consciousness_reads_inside_the_sentence() {
        let record = ClinicalRecord {
            consciousness: text("Agitado."),
            decubitus: text("DD"),
            ..ClinicalRecord::default()
        };
        assert_eq!(
            with_record(&record, build),
            "Paciente encontra-se agitado, em decúbito dorsal."
        );
    }

    #[test]
    fn sentinel_collaboration_and_no_dva_are_omitted() {
        let record = ClinicalRecord {
            consciousness: text("Sonolento"),
            collaboration: text("--"),
            decubitus: text("Poltrona"),
            dva: text("Não"),
            ..ClinicalRecord::default()
        };
        assert_eq!(
            with_record(&record, build),
            "Paciente encontra-se sonolento, sentado em poltrona."
        );
    }
}
