use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, ValueEnum};
use evolucao_core::{
    NarrativeConfig, PrintableReport, RenderOutcome, RenderedRecord, SectionKind,
    VentilationSupport,
};
use evolucao_narrative::compile_records_value;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "evolucao-cli",
    about = "Gera o texto impresso das evoluções fisioterapêuticas a partir do JSON salvo."
)]
struct Args {
    /// Caminho do arquivo JSON com o array de registros.
    #[arg(short, long)]
    input: PathBuf,

    /// Imprime apenas os registros com estes IDs (pode repetir).
    #[arg(long = "id")]
    ids: Vec<String>,

    /// Emite o relatório serializado em JSON em vez de texto.
    #[arg(long)]
    json: bool,

    /// Ramo usado quando o tipo de ventilação não é reconhecido.
    #[arg(long, value_enum, default_value_t = BreathingFallback::Spontaneous)]
    unrecognized_breathing: BreathingFallback,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BreathingFallback {
    Spontaneous,
    MechanicalInvasive,
    MechanicalNoninvasive,
}

impl From<BreathingFallback> for VentilationSupport {
    fn from(value: BreathingFallback) -> Self {
        match value {
            BreathingFallback::Spontaneous => VentilationSupport::Spontaneous,
            BreathingFallback::MechanicalInvasive => VentilationSupport::MechanicalInvasive,
            BreathingFallback::MechanicalNoninvasive => VentilationSupport::MechanicalNoninvasive,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("evolucao=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Não foi possível ler o arquivo {:?}", args.input))?;
    let mut records: Value = serde_json::from_str(&data)
        .with_context(|| format!("JSON inválido em {:?}", args.input))?;

    if !args.ids.is_empty() {
        select_records(&mut records, &args.ids);
    }

    let config = NarrativeConfig {
        unrecognized_breathing: args.unrecognized_breathing.into(),
        ..NarrativeConfig::default()
    };
    let report = compile_records_value(&records, &config)?;
    tracing::info!(entries = report.len(), "relatório compilado");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report)?);
    }

    Ok(())
}

fn select_records(records: &mut Value, ids: &[String]) {
    if let Some(items) = records.as_array_mut() {
        items.retain(|item| {
            item.get("id")
                .and_then(Value::as_str)
                .is_some_and(|id| ids.iter().any(|wanted| wanted == id))
        });
    }
}

fn render_text(report: &PrintableReport) -> Result<String, std::fmt::Error> {
    let now = Local::now();
    let mut out = String::new();

    writeln!(out, "EVOLUÇÃO ELETRÔNICA - Registro de Evolução Fisioterapêutica")?;
    writeln!(
        out,
        "Emissão: {} às {}",
        now.format("%d/%m/%Y"),
        now.format("%H:%M:%S")
    )?;
    writeln!(out, "{}", "=".repeat(72))?;

    if report.is_empty() {
        writeln!(out, "\nNenhum registro selecionado para impressão.")?;
        return Ok(out);
    }

    for (index, entry) in report.entries().iter().enumerate() {
        if index > 0 {
            writeln!(out, "\n{}", "- ".repeat(36))?;
        }
        match &entry.outcome {
            RenderOutcome::Rendered(record) => write_record(&mut out, record)?,
            RenderOutcome::Rejected { reason } => {
                writeln!(
                    out,
                    "\nRegistro {} não pôde ser impresso: {reason}",
                    entry.record_id.as_deref().unwrap_or("sem ID")
                )?;
            }
        }
    }

    Ok(out)
}

fn write_record(out: &mut String, record: &RenderedRecord) -> std::fmt::Result {
    let header = &record.header;
    writeln!(
        out,
        "\nData do atendimento: {} | Horário: {} | Localização: {}",
        header.date.as_deref().unwrap_or("--"),
        header.time.as_deref().unwrap_or("--"),
        header.ward.as_deref().unwrap_or("--")
    )?;

    for section in &record.sections {
        if section.kind == SectionKind::Signature {
            writeln!(out, "\n{}\n{}\n{}", "_".repeat(32), section.body, section.title)?;
        } else {
            writeln!(out, "\n{}\n{}", section.title, section.body)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use evolucao_core::{NarrativeConfig, PrintableReport};
    use evolucao_narrative::compile_records_value;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_report_prints_placeholder() {
        let text = render_text(&PrintableReport::default()).unwrap();
        assert!(text.starts_with("EVOLUÇÃO ELETRÔNICA"));
        assert!(text.ends_with("\nNenhum registro selecionado para impressão.\n"));
    }

    #[test]
    fn records_print_sections_and_rejections() {
        let records = json!([
            { "id": "rec_1", "date": "2024-05-02", "professional": "Dra. Ana" },
            { "id": "rec_2", "spo2": 95 }
        ]);
        let report = compile_records_value(&records, &NarrativeConfig::default()).unwrap();
        let text = render_text(&report).unwrap();

        assert!(text.contains("Data do atendimento: 02/05/2024 | Horário: -- | Localização: --"));
        assert!(text.contains("\nDra. Ana\n"));
        assert!(text.contains("Registro rec_2 não pôde ser impresso: Registro 1 "));
    }

    #[test]
    fn selection_keeps_requested_ids() {
        let mut records = json!([{ "id": "a" }, { "id": "b" }, { "date": "2024-05-02" }]);
        select_records(&mut records, &["b".to_string()]);
        assert_eq!(records, json!([{ "id": "b" }]));
    }
}
