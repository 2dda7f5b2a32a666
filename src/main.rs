use anyhow::Result;
use clap::Parser;
use precatorio_calc::app::config::Config;
use precatorio_calc::models::calculation::CalculationRequest;
use precatorio_calc::services::{build_report, render_error, render_text, CalculationClient};
use tracing::info;

/// Calculadora de atualização de precatórios (cliente do serviço /calcular).
///
/// Os campos numéricos são repassados como digitados; valores inválidos
/// seguem para o backend, que é quem valida.
#[derive(Debug, Parser)]
#[command(name = "precatorio-calc", version)]
struct Args {
    /// Valor homologado do precatório
    #[arg(long)]
    valor: String,

    /// Data da homologação / trânsito em julgado (YYYY-MM-DD)
    #[arg(long)]
    data_base: String,

    /// Data de expedição do ofício requisitório (YYYY-MM-DD)
    #[arg(long)]
    data_oficio: String,

    /// Data final do cálculo (YYYY-MM-DD)
    #[arg(long)]
    data_final: String,

    /// Taxa de correção monetária (% a.a.)
    #[arg(long, default_value = "1.0")]
    taxa_correcao: String,

    /// Taxa de juros de mora (% a.a.)
    #[arg(long, default_value = "0.5")]
    taxa_mora: String,

    /// URL do serviço de cálculo (sobrepõe CALCULADORA_URL)
    #[arg(long)]
    url: Option<String>,

    /// Emite o relatório como JSON estruturado em vez de texto
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(url) = args.url {
        config.backend_url = url;
    }
    info!("Usando serviço de cálculo em {}", config.backend_url);

    let request = CalculationRequest::from_form(
        &args.valor,
        &args.data_base,
        &args.data_oficio,
        &args.data_final,
        &args.taxa_correcao,
        &args.taxa_mora,
    );

    let client = CalculationClient::new(&config);
    match client.calculate(&request).await {
        Ok(result) => {
            let report = build_report(&result, &request);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_text(&report));
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", render_error(&err));
            std::process::exit(1);
        }
    }
}
