use serde::{Deserialize, Serialize};

/// The four punch kinds, cycling Entrada → Intervalo → Volta intervalo →
/// Saída → Entrada. Serialized with the canonical capitalized labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PunchType {
    #[serde(rename = "Entrada")]
    Entrada,
    #[serde(rename = "Intervalo")]
    Intervalo,
    #[serde(rename = "Volta intervalo")]
    VoltaIntervalo,
    #[serde(rename = "Saída")]
    Saida,
}

impl PunchType {
    /// Canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::Entrada => "Entrada",
            PunchType::Intervalo => "Intervalo",
            PunchType::VoltaIntervalo => "Volta intervalo",
            PunchType::Saida => "Saída",
        }
    }

    /// Parse user input. Case-insensitive, accent- and hyphen-tolerant
    /// ("saida", "volta-intervalo", "Volta intervalo" all work).
    pub fn pt_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', " ").as_str() {
            "entrada" => Some(Self::Entrada),
            "intervalo" => Some(Self::Intervalo),
            "volta intervalo" => Some(Self::VoltaIntervalo),
            "saída" | "saida" => Some(Self::Saida),
            _ => None,
        }
    }

    /// Convert enum → stored string (the canonical label).
    pub fn to_store_str(&self) -> &'static str {
        self.label()
    }

    /// Convert stored string → enum. Stored values are canonical labels, but
    /// parsing stays tolerant so older casings are not rejected.
    pub fn from_store_str(s: &str) -> Option<Self> {
        Self::pt_from_str(s)
    }

    /// The next punch kind in the fixed cycle.
    pub fn successor(&self) -> Self {
        match self {
            PunchType::Entrada => PunchType::Intervalo,
            PunchType::Intervalo => PunchType::VoltaIntervalo,
            PunchType::VoltaIntervalo => PunchType::Saida,
            PunchType::Saida => PunchType::Entrada,
        }
    }
}
