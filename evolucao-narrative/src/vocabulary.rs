//! Controlled vocabularies for coded record fields.

use std::borrow::Cow;

use crate::format::{present, sentence_body};

/// What a vocabulary returns for a non-empty code it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    /// Echo the operator's value, lower-cased so it reads inside a sentence.
    LowercaseEcho,
}

/// A coded-value table with an explicit policy for codes outside the table.
#[derive(Debug)]
pub struct Vocabulary {
    entries: &'static [(&'static str, &'static str)],
    miss: MissPolicy,
}

impl Vocabulary {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries,
            miss: MissPolicy::LowercaseEcho,
        }
    }

    pub fn miss_policy(&self) -> MissPolicy {
        self.miss
    }

    /// Translate a raw field value.
    ///
    /// Empty values and the `--` sentinel yield `None`, so the caller drops the
    /// clause instead of printing the sentinel. Echoed values lose their
    /// closing period.
    pub fn translate(&self, raw: Option<&str>) -> Option<Cow<'static, str>> {
        let code = present(raw)?;
        let lowered = code.to_lowercase();

        if let Some((_, fragment)) = self
            .entries
            .iter()
            .find(|(key, _)| *key == code || key.to_lowercase() == lowered)
        {
            return Some(Cow::Borrowed(*fragment));
        }

        match self.miss {
            MissPolicy::LowercaseEcho => {
                sentence_body(Some(code)).map(|body| Cow::Owned(body.to_lowercase()))
            }
        }
    }
}

pub static CONSCIOUSNESS: Vocabulary = Vocabulary::new(
    &[
        ("Alerta", "alerta"),
        ("Responsivo", "responsivo"),
        ("Sonolento", "sonolento"),
        ("Não responsivo", "não responsivo"),
        ("RASS -5", "sob RASS -5 (não despertável)"),
        ("RASS -4", "sob RASS -4 (sedação profunda)"),
        ("RASS -3", "sob RASS -3 (sedação moderada)"),
        ("RASS -2", "sob RASS -2 (sedação leve)"),
        ("RASS -1", "sob RASS -1 (sonolento)"),
        ("RASS 0", "sob RASS 0 (alerta e calmo)"),
        ("RASS +1", "sob RASS +1 (inquieto)"),
    ],
);

pub static COLLABORATION: Vocabulary = Vocabulary::new(
    &[
        ("Boa", "com boa colaboração"),
        ("Parcial", "com colaboração parcial"),
        ("Ausente", "sem colaboração ativa"),
        ("Nada colaborativo", "nada colaborativo"),
    ],
);

pub static DECUBITUS: Vocabulary = Vocabulary::new(
    &[
        ("DD", "em decúbito dorsal"),
        ("DL D", "em decúbito lateral direito"),
        ("DL E", "em decúbito lateral esquerdo"),
        ("DV", "em decúbito ventral"),
        ("Fowler", "em posição de Fowler"),
        ("Poltrona", "sentado em poltrona"),
        ("Outro", "em posicionamento atípico"),
    ],
);

pub static AUSCULTATION: Vocabulary = Vocabulary::new(
    &[
        ("MV presente", "murmúrio vesicular presente"),
        ("MV diminuído", "murmúrio vesicular diminuído"),
        ("Roncos", "roncos"),
        ("Sibilos", "sibilos"),
        ("Crepitações", "crepitações"),
        ("Estertores", "estertores"),
    ],
);
