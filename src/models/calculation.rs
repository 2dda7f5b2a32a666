use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Requisição enviada ao serviço de cálculo em POST /calcular.
///
/// Os nomes de campo no fio seguem o contrato do serviço; as datas viajam
/// como `YYYY-MM-DD` sem parse local.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "valor_homologado")]
    pub principal_value: f64,
    #[serde(rename = "data_base")]
    pub base_date: String,
    #[serde(rename = "data_oficio")]
    pub official_letter_date: String,
    #[serde(rename = "data_final")]
    pub final_date: String,
    #[serde(rename = "taxa_correcao")]
    pub correction_rate: f64,
    #[serde(rename = "taxa_mora")]
    pub delinquency_rate: f64,
}

impl CalculationRequest {
    /// Monta a requisição a partir dos campos crus do formulário.
    ///
    /// Campos numéricos inválidos viram NaN (serializado como `null` pelo
    /// serde_json) e são rejeitados pelo backend; nenhuma validação local.
    pub fn from_form(
        principal_value: &str,
        base_date: &str,
        official_letter_date: &str,
        final_date: &str,
        correction_rate: &str,
        delinquency_rate: &str,
    ) -> Self {
        Self {
            principal_value: parse_decimal(principal_value),
            base_date: base_date.to_string(),
            official_letter_date: official_letter_date.to_string(),
            final_date: final_date.to_string(),
            correction_rate: parse_decimal(correction_rate),
            delinquency_rate: parse_decimal(delinquency_rate),
        }
    }
}

fn parse_decimal(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Resposta de sucesso do serviço de cálculo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub regime: String,
    #[serde(rename = "inicio_periodo_graca")]
    pub grace_start: NaiveDate,
    #[serde(rename = "fim_periodo_graca")]
    pub grace_end: NaiveDate,
    #[serde(rename = "valor_principal")]
    pub principal_value: f64,
    #[serde(rename = "correcao_monetaria")]
    pub correction_total: f64,
    #[serde(rename = "juros_mora")]
    pub interest_total: f64,
    #[serde(rename = "valor_total_acrescimos")]
    pub additions_total: f64,
    #[serde(rename = "valor_total")]
    pub grand_total: f64,
    #[serde(rename = "detalhamento")]
    pub breakdown: Breakdown,
}

/// Detalhamento dos períodos de aplicação decididos pelo backend.
///
/// Cada período é um par `[inicio, fim]`; a presença na lista com ou sem
/// mora É a decisão de incidência de juros, o cliente não a recalcula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(rename = "periodos_com_mora")]
    pub periods_with_interest: Vec<(NaiveDate, NaiveDate)>,
    #[serde(rename = "periodos_sem_mora")]
    pub periods_without_interest: Vec<(NaiveDate, NaiveDate)>,
    #[serde(rename = "taxa_correcao_aa")]
    pub correction_rate: f64,
    #[serde(rename = "taxa_mora_aa")]
    pub delinquency_rate: f64,
}

/// Corpo de erro retornado pelo backend em respostas não-2xx.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendError {
    pub erro: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_parses_numbers() {
        let request =
            CalculationRequest::from_form("100000.50", "2023-01-01", "2023-03-15", "2024-12-31", "1.0", "0.5");
        assert_eq!(request.principal_value, 100000.50);
        assert_eq!(request.correction_rate, 1.0);
        assert_eq!(request.delinquency_rate, 0.5);
        assert_eq!(request.base_date, "2023-01-01");
    }

    #[test]
    fn test_from_form_invalid_number_becomes_nan() {
        let request =
            CalculationRequest::from_form("abc", "2023-01-01", "2023-03-15", "2024-12-31", "", "0.5");
        assert!(request.principal_value.is_nan());
        assert!(request.correction_rate.is_nan());
    }

    #[test]
    fn test_from_form_keeps_dates_untouched() {
        let request =
            CalculationRequest::from_form("1", "nao-e-data", "2023-03-15", "2024-12-31", "1", "1");
        assert_eq!(request.base_date, "nao-e-data");
    }

    #[test]
    fn test_request_wire_names() {
        let request =
            CalculationRequest::from_form("100", "2023-01-01", "2023-03-15", "2024-12-31", "1.0", "0.5");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["valor_homologado"], 100.0);
        assert_eq!(value["data_base"], "2023-01-01");
        assert_eq!(value["data_oficio"], "2023-03-15");
        assert_eq!(value["data_final"], "2024-12-31");
        assert_eq!(value["taxa_correcao"], 1.0);
        assert_eq!(value["taxa_mora"], 0.5);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let request =
            CalculationRequest::from_form("abc", "2023-01-01", "2023-03-15", "2024-12-31", "1.0", "0.5");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["valor_homologado"].is_null());
    }

    #[test]
    fn test_result_deserializes_from_wire_format() {
        let body = r#"{
            "regime": "EC 114",
            "inicio_periodo_graca": "2023-04-01",
            "fim_periodo_graca": "2024-12-31",
            "valor_principal": 100000.0,
            "correcao_monetaria": 1726.03,
            "juros_mora": 123.29,
            "valor_total_acrescimos": 1849.32,
            "valor_total": 101849.32,
            "detalhamento": {
                "periodos_com_mora": [["2023-01-01", "2023-04-01"]],
                "periodos_sem_mora": [["2023-04-01", "2024-12-31"]],
                "taxa_correcao_aa": 1.0,
                "taxa_mora_aa": 0.5
            }
        }"#;
        let result: CalculationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.regime, "EC 114");
        assert_eq!(result.breakdown.periods_with_interest.len(), 1);
        let (start, end) = result.breakdown.periods_with_interest[0];
        assert_eq!(start.to_string(), "2023-01-01");
        assert_eq!(end.to_string(), "2023-04-01");
    }
}
