use crate::models::report::{GracePosition, PeriodRow, ReportModel};
use crate::services::backend_client::ClientError;
use crate::utils::dates::{format_date_br, format_naive_date_br};
use crate::utils::money::format_brl;

/// Adaptador fino do `ReportModel` para texto de terminal: quatro seções
/// na ordem do relatório original, datas em DD/MM/YYYY, valores em R$.
pub fn render_text(report: &ReportModel) -> String {
    let mut out = String::new();

    out.push_str("=== Dados Utilizados no Cálculo ===\n");
    out.push_str(&format!(
        "Valor Homologado: {}\n",
        format_brl(report.inputs.principal_value)
    ));
    out.push_str(&format!(
        "Data-base: {}\n",
        format_date_br(&report.inputs.base_date)
    ));
    out.push_str(&format!(
        "Data do Ofício: {}\n",
        format_date_br(&report.inputs.official_letter_date)
    ));
    out.push_str(&format!(
        "Data Final: {}\n",
        format_date_br(&report.inputs.final_date)
    ));
    out.push_str(&format!(
        "Taxa de Correção: {}% a.a.\n",
        report.inputs.correction_rate
    ));
    out.push_str(&format!(
        "Taxa de Mora: {}% a.a.\n",
        report.inputs.delinquency_rate
    ));

    out.push_str("\n=== Regime Constitucional ===\n");
    out.push_str(&format!("Regime Aplicável: {}\n", report.regime.regime));
    out.push_str(&format!(
        "Início do Período de Graça: {}\n",
        format_naive_date_br(report.regime.grace_start)
    ));
    out.push_str(&format!(
        "Término do Período de Graça: {}\n",
        format_naive_date_br(report.regime.grace_end)
    ));

    out.push_str("\n=== Períodos de Cálculo ===\n");
    for period in &report.periods {
        render_period(&mut out, period);
    }

    out.push_str("\n=== Resultado Final ===\n");
    out.push_str(&format!(
        "Valor Principal: {}\n",
        format_brl(report.totals.principal_value)
    ));
    out.push_str(&format!(
        "(+) Correção Monetária Total: {}\n",
        format_brl(report.totals.correction_total)
    ));
    out.push_str(&format!(
        "(+) Juros de Mora Total: {}\n",
        format_brl(report.totals.interest_total)
    ));
    out.push_str(&format!(
        "(=) Total de Acréscimos: {}\n",
        format_brl(report.totals.additions_total)
    ));
    out.push_str(&format!(
        "VALOR TOTAL DO PRECATÓRIO: {}\n",
        format_brl(report.totals.grand_total)
    ));

    out
}

fn render_period(out: &mut String, period: &PeriodRow) {
    let label = match period.position {
        GracePosition::BeforeGrace => "ANTES do",
        GracePosition::DuringGrace => "DURANTE o",
        GracePosition::AfterGrace => "DEPOIS do",
    };
    out.push_str(&format!("\nPeríodo {label} Período de Graça\n"));
    out.push_str(&format!(
        "  Data Início: {}\n",
        format_naive_date_br(period.start)
    ));
    out.push_str(&format!("  Data Fim: {}\n", format_naive_date_br(period.end)));
    out.push_str(&format!("  Dias corridos: {} dias\n", period.days));
    out.push_str(&format!(
        "  Correção Monetária: {}\n",
        format_brl(period.correction)
    ));
    match period.interest {
        Some(interest) => {
            out.push_str(&format!("  Juros de Mora: {}\n", format_brl(interest)));
        }
        None => {
            out.push_str("  Juros de Mora: SUSPENSOS (R$ 0,00)\n");
        }
    }
    out.push_str(&format!("  Subtotal: {}\n", format_brl(period.subtotal)));
}

/// Mensagem terminal de erro no lugar do relatório. Rejeições do backend
/// saem com a mensagem original; falhas de transporte ganham prefixo
/// genérico com o texto do erro subjacente.
pub fn render_error(error: &ClientError) -> String {
    match error {
        ClientError::Rejected(message) => format!("Erro: {message}"),
        ClientError::Transport(message) => format!("Erro ao calcular: {message}"),
    }
}
