//! Tipos centrais do registro de evolução fisioterapêutica e do relatório impresso.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuração que ajusta as decisões do motor de narrativa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NarrativeConfig {
    /// Ramo adotado quando o tipo de ventilação não corresponde a nenhum valor conhecido.
    pub unrecognized_breathing: VentilationSupport,
    /// Texto impresso quando a evolução do paciente está em branco.
    pub evolution_placeholder: String,
    /// Texto impresso no bloco de assinatura quando o profissional não foi informado.
    pub signature_placeholder: String,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            unrecognized_breathing: VentilationSupport::Spontaneous,
            evolution_placeholder: "Sem descrição adicional de evolução.".to_string(),
            signature_placeholder: "Fisioterapeuta Responsável".to_string(),
        }
    }
}

/// Forma de suporte ventilatório, decidida uma única vez por registro.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VentilationSupport {
    Spontaneous,
    MechanicalInvasive,
    MechanicalNoninvasive,
}

impl VentilationSupport {
    /// Classifica o campo "Tipo de Ventilação".
    ///
    /// Retorna `None` para valores preenchidos que não correspondem a nenhum
    /// marcador conhecido; o chamador decide o ramo nesse caso.
    pub fn classify(breathing: Option<&str>) -> Option<Self> {
        let value = breathing.map(str::trim).unwrap_or_default().to_lowercase();

        if value.is_empty() || value == "--" {
            return Some(Self::Spontaneous);
        }
        if value.contains("ventilação mecânica") || value.contains("ventilacao mecanica") {
            return Some(Self::MechanicalInvasive);
        }
        if value.contains("vni") {
            return Some(Self::MechanicalNoninvasive);
        }
        if value.contains("espontânea") || value.contains("espontanea") {
            return Some(Self::Spontaneous);
        }
        None
    }

    pub fn is_mechanical(self) -> bool {
        !matches!(self, Self::Spontaneous)
    }
}

/// Condutas realizadas no atendimento.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Interventions {
    pub monitor: bool,
    pub oxygen_adjust: bool,
    pub incentive_ip: bool,
    pub ventilatory_training: bool,
    pub bronchial_hygiene: bool,
    pub passive_mobilization: bool,
    pub active_mobilization: bool,
    pub functional_training: bool,
    pub positioning: bool,
    pub orientation: bool,
    pub other: Option<String>,
}

/// Registro de avaliação fisioterapêutica.
///
/// Todos os campos são opcionais: o formato legado não possui sinais vitais,
/// parâmetros do ventilador nem gasometria, e o formato estendido pode trazer
/// qualquer campo em branco.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClinicalRecord {
    pub id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub professional: Option<String>,
    pub ward: Option<String>,

    // Neurológico e geral
    pub consciousness: Option<String>,
    pub collaboration: Option<String>,
    pub decubitus: Option<String>,
    pub pain_score: Option<String>,
    pub complaints: Option<String>,
    pub notes: Option<String>,
    pub hemodynamic: Option<String>,
    pub dva: Option<String>,

    // Sinais vitais
    pub heart_rate: Option<String>,
    pub blood_pressure: Option<String>,
    pub respiratory_rate: Option<String>,
    pub spo2: Option<String>,

    // Ventilação
    pub breathing: Option<String>,
    pub oxygen_device: Option<String>,
    pub flow: Option<String>,
    pub adjustments: Option<String>,
    pub vm_mode: Option<String>,
    pub vm_peep: Option<String>,
    pub vm_fio2: Option<String>,
    pub vm_vt: Option<String>,
    pub vm_rr_set: Option<String>,
    pub vm_drive_pressure: Option<String>,
    pub vm_pressure_support: Option<String>,
    pub vm_plateau: Option<String>,

    // Exame respiratório
    pub ventilatory_pattern: Option<String>,
    pub expansibility: Option<String>,
    pub effort: Option<String>,
    pub ausc_right: Option<String>,
    pub ausc_left: Option<String>,
    pub secretion: Option<String>,
    pub secretion_criteria: Option<String>,

    // Gasometria arterial
    pub gas_ph: Option<String>,
    pub gas_pao2: Option<String>,
    pub gas_paco2: Option<String>,
    pub gas_hco3: Option<String>,
    pub gas_be: Option<String>,
    pub gas_lactate: Option<String>,
    pub gas_sao2: Option<String>,
    pub gas_result: Option<String>,

    // Cardiovascular
    pub perfusion: Option<String>,
    pub extremity_temp: Option<String>,
    pub edema_msd: Option<String>,
    pub edema_mse: Option<String>,
    pub edema_mid: Option<String>,
    pub edema_mie: Option<String>,

    // Funcionalidade
    pub adm_passive: Option<String>,
    pub adm_active: Option<String>,
    pub muscle_force: Option<String>,
    pub force_reason: Option<String>,
    pub ims_score: Option<String>,
    pub mrc_score: Option<String>,

    // Texto livre
    pub complementary_exams: Option<String>,
    pub intercurrences: Option<String>,
    pub evolution: Option<String>,

    pub interventions: Interventions,
}

impl ClinicalRecord {
    /// Data do atendimento no formato brasileiro (`dd/mm/aaaa`).
    ///
    /// Datas fora do formato ISO são devolvidas como foram digitadas.
    pub fn display_date(&self) -> Option<String> {
        let raw = self.date.as_deref().map(str::trim).filter(|d| !d.is_empty())?;
        Some(match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date.format("%d/%m/%Y").to_string(),
            Err(_) => raw.to_string(),
        })
    }
}

/// Cabeçalho de cada registro no documento impresso.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecordHeader {
    pub date: Option<String>,
    pub time: Option<String>,
    pub ward: Option<String>,
}

/// Blocos do documento, na ordem em que são impressos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Assessment,
    ComplementaryExams,
    Intercurrences,
    Conduct,
    Evolution,
    Signature,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Assessment => "AVALIAÇÃO DA FISIOTERAPIA",
            Self::ComplementaryExams => "EXAMES COMPLEMENTARES",
            Self::Intercurrences => "INTERCORRÊNCIAS",
            Self::Conduct => "PLANO TERAPÊUTICO & CONDUTAS",
            Self::Evolution => "EVOLUÇÃO DO PACIENTE",
            Self::Signature => "ASSINATURA / CARIMBO",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub title: String,
    pub body: String,
}

impl ReportSection {
    pub fn new(kind: SectionKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            body: body.into(),
        }
    }
}

/// Resultado da renderização de um registro.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedRecord {
    pub header: RecordHeader,
    pub sections: Vec<ReportSection>,
}

impl RenderedRecord {
    /// Acessa um bloco pelo tipo.
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Parágrafo narrativo da avaliação.
    pub fn narrative(&self) -> &str {
        self.section(SectionKind::Assessment)
            .map(|section| section.body.as_str())
            .unwrap_or_default()
    }

    /// Frase de condutas terapêuticas.
    pub fn conduct(&self) -> &str {
        self.section(SectionKind::Conduct)
            .map(|section| section.body.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    Rendered(RenderedRecord),
    Rejected { reason: String },
}

/// Uma entrada do relatório, na mesma posição do registro de origem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub record_id: Option<String>,
    pub outcome: RenderOutcome,
}

impl ReportEntry {
    pub fn rendered(&self) -> Option<&RenderedRecord> {
        match &self.outcome {
            RenderOutcome::Rendered(record) => Some(record),
            RenderOutcome::Rejected { .. } => None,
        }
    }
}

/// Relatório pronto para impressão. Criado a cada solicitação, nunca armazenado.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrintableReport {
    pub entries: Vec<ReportEntry>,
}

impl PrintableReport {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Erros do motor de narrativa.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("Registro {index} com formato inválido: {reason}")]
    InvalidRecordShape { index: usize, reason: String },
    #[error("Não foi possível ler os registros: {0}")]
    Parse(String),
}
