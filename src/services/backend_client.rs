use crate::app::config::Config;
use crate::models::calculation::{BackendError, CalculationRequest, CalculationResult};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// Erros terminais de uma submissão. Sem retry em nenhum dos casos.
#[derive(Debug, Error)]
pub enum ClientError {
    /// O backend rejeitou o cálculo (HTTP não-2xx com corpo `{"erro": ...}`).
    /// A mensagem é repassada ao usuário sem alteração.
    #[error("{0}")]
    Rejected(String),
    /// Falha de rede ou de parse da resposta, sem resultado utilizável.
    #[error("{0}")]
    Transport(String),
}

pub struct CalculationClient {
    client: Client,
    base_url: String,
}

impl CalculationClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.backend_url.clone(),
        }
    }

    /// Uma única tentativa de POST /calcular por submissão.
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, ClientError> {
        info!("Enviando cálculo para {}/calcular", self.base_url);

        let response = self
            .client
            .post(format!("{}/calcular", self.base_url))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Falha de comunicação com o backend: {e}");
                ClientError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            let result = response.json::<CalculationResult>().await.map_err(|e| {
                error!("Resposta do backend ilegível: {e}");
                ClientError::Transport(e.to_string())
            })?;
            info!("Cálculo recebido: regime {}", result.regime);
            Ok(result)
        } else {
            // Corpo de erro ilegível cai na linha de status HTTP
            let message = match response.json::<BackendError>().await {
                Ok(body) => body.erro,
                Err(_) => format!("HTTP {status}"),
            };
            warn!("Cálculo rejeitado pelo backend: {message}");
            Err(ClientError::Rejected(message))
        }
    }
}
