use chrono::NaiveDate;
use serde::Serialize;

/// Posição temporal do período em relação ao início do período de graça.
///
/// Rótulo apenas de exibição: compara o início do período com o início da
/// graça, independente de o backend ter colocado o período na lista com ou
/// sem mora. As duas classificações podem divergir em casos de borda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GracePosition {
    BeforeGrace,
    DuringGrace,
    AfterGrace,
}

/// Eco dos seis campos de entrada, sem formatação.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputEcho {
    pub principal_value: f64,
    pub base_date: String,
    pub official_letter_date: String,
    pub final_date: String,
    pub correction_rate: f64,
    pub delinquency_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeSummary {
    pub regime: String,
    pub grace_start: NaiveDate,
    pub grace_end: NaiveDate,
}

/// Uma linha do detalhamento por período.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
    pub correction: f64,
    /// `None` quando os juros de mora estão suspensos no período.
    pub interest: Option<f64>,
    pub subtotal: f64,
    pub position: GracePosition,
}

/// Agregados finais, ecoados do backend sem recomputação.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub principal_value: f64,
    pub correction_total: f64,
    pub interest_total: f64,
    pub additions_total: f64,
    pub grand_total: f64,
}

/// Relatório estruturado, independente de tecnologia de apresentação.
/// As quatro seções saem na ordem em que são exibidas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    pub inputs: InputEcho,
    pub regime: RegimeSummary,
    pub periods: Vec<PeriodRow>,
    pub totals: Totals,
}
