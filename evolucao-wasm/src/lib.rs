//! Ponte WASM <-> JavaScript para a camada de impressão no navegador.

use evolucao_core::{NarrativeConfig, NarrativeError, VentilationSupport};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsNarrativeConfig {
    #[serde(default)]
    unrecognized_breathing: Option<VentilationSupport>,
    #[serde(default)]
    evolution_placeholder: Option<String>,
    #[serde(default)]
    signature_placeholder: Option<String>,
}

impl From<JsNarrativeConfig> for NarrativeConfig {
    fn from(cfg: JsNarrativeConfig) -> Self {
        let mut base = NarrativeConfig::default();
        if let Some(support) = cfg.unrecognized_breathing {
            base.unrecognized_breathing = support;
        }
        if let Some(placeholder) = cfg.evolution_placeholder {
            base.evolution_placeholder = placeholder;
        }
        if let Some(placeholder) = cfg.signature_placeholder {
            base.signature_placeholder = placeholder;
        }
        base
    }
}

/// Compila o relatório impresso a partir do array de registros salvo pelo app.
#[wasm_bindgen]
pub fn compile_report(records: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let records_value = from_value::<serde_json::Value>(records)
        .map_err(|err| JsValue::from_str(&format!("Não foi possível ler os registros: {err}")))?;

    let cfg = match config {
        Some(js_cfg) => {
            let cfg: JsNarrativeConfig = from_value(js_cfg).map_err(|err| {
                JsValue::from_str(&format!("Não foi possível ler a configuração: {err}"))
            })?;
            NarrativeConfig::from(cfg)
        }
        None => NarrativeConfig::default(),
    };

    let report = evolucao_narrative::compile_records_value(&records_value, &cfg)
        .map_err(|err| JsValue::from_str(&format_narrative_error(err)))?;

    report
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&format!("Não foi possível serializar o relatório: {err}")))
}

fn format_narrative_error(err: NarrativeError) -> String {
    format!("Erro de narrativa: {err}")
}
