//! Therapeutic conduct clause built from the intervention flags.

use evolucao_core::Interventions;

use crate::format::sentence_body;

pub const NO_CONDUCT: &str =
    "Nenhuma conduta terapêutica específica foi registrada para este atendimento.";

/// Labels of the active interventions, in form order, followed by the
/// operator's "other" text.
pub fn intervention_items(interventions: &Interventions) -> Vec<String> {
    let flags = [
        (interventions.monitor, "monitorização cardiorrespiratória"),
        (interventions.oxygen_adjust, "ajuste/gerenciamento de O₂/VM"),
        (interventions.incentive_ip, "manobras de reexpansão pulmonar"),
        (interventions.ventilatory_training, "treino muscular respiratório"),
        (interventions.bronchial_hygiene, "higiene brônquica"),
        (interventions.passive_mobilization, "mobilização passiva"),
        (interventions.active_mobilization, "mobilização ativa/assistida"),
        (interventions.functional_training, "treino funcional"),
        (interventions.positioning, "posicionamento no leito"),
        (interventions.orientation, "orientações ao paciente/família"),
    ];

    let mut items: Vec<String> = flags
        .into_iter()
        .filter(|(active, _)| *active)
        .map(|(_, label)| label.to_string())
        .collect();

    if let Some(other) = sentence_body(interventions.other.as_deref()) {
        items.push(other.to_lowercase());
    }

    items
}

/// Enumerate conduct items into one sentence. Does not modify `items`.
pub fn render_items(items: &[String]) -> String {
    match items.split_last() {
        None => NO_CONDUCT.to_string(),
        Some((only, [])) => format!("Como conduta terapêutica, foi realizado: {only}."),
        Some((last, head)) => format!(
            "O plano terapêutico realizado incluiu: {} e {last}.",
            head.join(", ")
        ),
    }
}

pub fn render(interventions: &Interventions) -> String {
    render_items(&intervention_items(interventions))
}

#[cfg(test)]
mod tests {
    use evolucao_core::Interventions;

    use super::*;

    #[test]
    fn no_interventions_uses_fallback() {
        assert_eq!(render(&Interventions::default()), NO_CONDUCT);

        let blank_other = Interventions {
            other: Some("   ".to_string()),
            ..Interventions::default()
        };
        assert_eq!(render(&blank_other), NO_CONDUCT);
    }

    #[test]
    fn single_intervention() {
        let interventions = Interventions {
            monitor: true,
            ..Interventions::default()
        };
        assert_eq!(
            render(&interventions),
            "Como conduta terapêutica, foi realizado: monitorização cardiorrespiratória."
        );
    }

    #[test]
    fn two_interventions_joined_with_e() {
        let interventions = Interventions {
            monitor: true,
            positioning: true,
            ..Interventions::default()
        };
        assert_eq!(
            render(&interventions),
            "O plano terapêutico realizado incluiu: monitorização cardiorrespiratória e posicionamento no leito."
        );
    }

    #[test]
    fn other_text_is_lowercased_and_last() {
        let interventions = Interventions {
            bronchial_hygiene: true,
            passive_mobilization: true,
            orientation: true,
            other: Some("Cinesioterapia com Theraband".to_string()),
            ..Interventions::default()
        };
        assert_eq!(
            render(&interventions),
            "O plano terapêutico realizado incluiu: higiene brônquica, mobilização passiva, \
             orientações ao paciente/família e cinesioterapia com theraband."
        );
    }

    #[test]
    fn punctuation_only_other_text_is_dropped() {
        let only_dots = Interventions {
            other: Some("...".to_string()),
            ..Interventions::default()
        };
        assert_eq!(render(&only_dots), NO_CONDUCT);

        let spaced_dots = Interventions {
            monitor: true,
            other: Some(". .".to_string()),
            ..Interventions::default()
        };
        assert_eq!(
            render(&spaced_dots),
            "Como conduta terapêutica, foi realizado: monitorização cardiorrespiratória."
        );

        let trailing = Interventions {
            other: Some("Deambulação assistida. ".to_string()),
            ..Interventions::default()
        };
        assert_eq!(
            render(&trailing),
            "Como conduta terapêutica, foi realizado: deambulação assistida."
        );
    }

    #[test]
    fn rendering_leaves_items_untouched() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let first = render_items(&items);
        let second = render_items(&items);
        assert_eq!(first, second);
        assert_eq!(items.len(), 3);

        let interventions = Interventions {
            monitor: true,
            positioning: true,
            ..Interventions::default()
        };
        assert_eq!(render(&interventions), render(&interventions));
    }
}
