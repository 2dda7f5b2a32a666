use crate::models::calculation::{CalculationRequest, CalculationResult};
use crate::models::report::{
    GracePosition, InputEcho, PeriodRow, RegimeSummary, ReportModel, Totals,
};
use crate::utils::dates::days_between;

const DAYS_PER_YEAR: f64 = 365.0;

/// Transforma `(resultado, requisição)` no relatório estruturado.
///
/// Função pura: nenhuma E/S, nenhum estado compartilhado; renderizar o
/// mesmo par duas vezes produz relatórios idênticos.
pub fn build_report(result: &CalculationResult, request: &CalculationRequest) -> ReportModel {
    let mut periods =
        Vec::with_capacity(result.breakdown.periods_with_interest.len()
            + result.breakdown.periods_without_interest.len());

    for &(start, end) in &result.breakdown.periods_with_interest {
        let days = days_between(start, end);
        let correction = simple_accrual(request.principal_value, request.correction_rate, days);
        let interest = simple_accrual(request.principal_value, request.delinquency_rate, days);
        // Rótulo posicional: a incidência de juros já foi decidida pelo
        // backend ao colocar o período nesta lista.
        let position = if start < result.grace_start {
            GracePosition::BeforeGrace
        } else {
            GracePosition::AfterGrace
        };
        periods.push(PeriodRow {
            start,
            end,
            days,
            correction,
            interest: Some(interest),
            subtotal: correction + interest,
            position,
        });
    }

    for &(start, end) in &result.breakdown.periods_without_interest {
        let days = days_between(start, end);
        let correction = simple_accrual(request.principal_value, request.correction_rate, days);
        periods.push(PeriodRow {
            start,
            end,
            days,
            correction,
            interest: None,
            subtotal: correction,
            position: GracePosition::DuringGrace,
        });
    }

    ReportModel {
        inputs: InputEcho {
            principal_value: request.principal_value,
            base_date: request.base_date.clone(),
            official_letter_date: request.official_letter_date.clone(),
            final_date: request.final_date.clone(),
            correction_rate: request.correction_rate,
            delinquency_rate: request.delinquency_rate,
        },
        regime: RegimeSummary {
            regime: result.regime.clone(),
            grace_start: result.grace_start,
            grace_end: result.grace_end,
        },
        periods,
        totals: Totals {
            principal_value: result.principal_value,
            correction_total: result.correction_total,
            interest_total: result.interest_total,
            additions_total: result.additions_total,
            grand_total: result.grand_total,
        },
    }
}

/// Acréscimo por taxa simples anual pro-rata em dias sobre base 365.
fn simple_accrual(principal: f64, annual_rate_pct: f64, days: i64) -> f64 {
    principal * (annual_rate_pct / 100.0) * (days as f64 / DAYS_PER_YEAR)
}
