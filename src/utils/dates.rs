// Utilitários de datas compartilhados pelo relatório

use chrono::NaiveDate;

const MS_PER_DAY: i64 = 86_400_000;

/// Dias corridos entre duas datas: diferença absoluta em milissegundos,
/// arredondada para cima. Período de mesmo dia conta 0.
///
/// Todas as linhas de período do relatório usam ESTA função; não duplicar
/// a conta em chamadores.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let ms = (end - start).num_milliseconds().abs();
    (ms as u64).div_ceil(MS_PER_DAY as u64) as i64
}

/// Converte `YYYY-MM-DD` em `DD/MM/YYYY` por divisão da string, sem validar.
/// Entrada que não tem três partes volta como veio (o backend é quem valida).
pub fn format_date_br(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}/{month}/{year}"),
        _ => raw.to_string(),
    }
}

pub fn format_naive_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
