use evolucao_core::ClinicalRecord;

use crate::format::{edema_grade, join_with_and, lowercase, with_unit};
use crate::Assessment;

pub fn build(assessment: &Assessment<'_>) -> String {
    let record = assessment.record();
    format!("{} {}", hemodynamic_clause(record), edema_clause(record))
}

fn hemodynamic_clause(record: &ClinicalRecord) -> String {
    let status =
        lowercase(record.hemodynamic.as_deref()).unwrap_or_else(|| "estável".to_string());
    let mut clause = format!("Hemodinamicamente {status}");

    let mut vitals = Vec::new();
    if let Some(rate) = with_unit(record.heart_rate.as_deref(), "bpm") {
        vitals.push(format!("FC de {rate}"));
    }
    if let Some(pressure) = with_unit(record.blood_pressure.as_deref(), "mmHg") {
        vitals.push(format!("PA de {pressure}"));
    }
    if let Some(vitals) = join_with_and(&vitals) {
        clause.push_str(&format!(", apresentando {vitals}"));
    }

    let mut circulation = Vec::new();
    if let Some(perfusion) = lowercase(record.perfusion.as_deref()) {
        circulation.push(format!("perfusão periférica {perfusion}"));
    }
    if let Some(temperature) = lowercase(record.extremity_temp.as_deref()) {
        circulation.push(format!("extremidades {temperature}"));
    }
    if let Some(circulation) = join_with_and(&circulation) {
        clause.push_str(&format!(", com {circulation}"));
    }

    clause.push('.');
    clause
}

fn edema_clause(record: &ClinicalRecord) -> String {
    let sites = [
        ("MSD", record.edema_msd.as_deref()),
        ("MSE", record.edema_mse.as_deref()),
        ("MID", record.edema_mid.as_deref()),
        ("MIE", record.edema_mie.as_deref()),
    ];

    let graded: Vec<String> = sites
        .into_iter()
        .filter_map(|(site, raw)| edema_grade(raw).map(|grade| format!("{site}: {grade}")))
        .collect();

    if graded.is_empty() {
        "Ausência de edemas significativos.".to_string()
    } else {
        format!("Edema observado em: {}.", graded.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use evolucao_core::ClinicalRecord;

    use super::build;
    use crate::sections::test_support::{text, with_record};

    fn edema(msd: &str, mse: &str, mid: &str, mie: &str) -> ClinicalRecord {
        ClinicalRecord {
            edema_msd: text(msd),
            edema_mse: text(mse),
            edema_mid: text(mid),
            edema_mie: text(mie),
            ..ClinicalRecord::default()
        }
    }

    #[test]
    fn empty_record_renders_defaults() {
        assert_eq!(
            with_record(&ClinicalRecord::default(), build),
            "Hemodinamicamente estável. Ausência de edemas significativos."
        );
    }

    #[test]
    fn single_edema_site_is_enumerated() {
        let sentence = with_record(&edema("2+", "0", "0", "0"), build);
        assert!(sentence.ends_with(" Edema observado em: MSD: 2+."));
        assert!(!sentence.contains("Ausência de edemas"));
    }

    #[test]
    fn all_zero_edema_uses_fallback() {
        let sentence = with_record(&edema("0", "0", "0", "0"), build);
        assert!(sentence.ends_with(" Ausência de edemas significativos."));
        assert!(!sentence.contains("Edema observado"));
    }

    #[test]
    fn vitals_and_perfusion() {
        let record = ClinicalRecord {
            hemodynamic: text("Instável"),
            heart_rate: text("112"),
            blood_pressure: text("90x60"),
            perfusion: text("Reduzida"),
            extremity_temp: text("Frias"),
            edema_mid: text("1+"),
            edema_mie: text("3+"),
            ..ClinicalRecord::default()
        };
        assert_eq!(
            with_record(&record, build),
            "Hemodinamicamente instável, apresentando FC de 112 bpm e PA de 90x60 mmHg, \
             com perfusão periférica reduzida e extremidades frias. \
             Edema observado em: MID: 1+, MIE: 3+."
        );
    }

    #[test]
    fn heart_rate_alone() {
        let record = ClinicalRecord {
            heart_rate: text("80 bpm"),
            perfusion: text("Adequada"),
            ..ClinicalRecord::default()
        };
        assert!(with_record(&record, build).starts_with(
            "Hemodinamicamente estável, apresentando FC de 80 bpm, com perfusão periférica adequada."
        ));
    }
}
