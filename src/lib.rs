//! Cliente da calculadora de atualização de precatórios.
//!
//! Monta a requisição a partir dos campos do formulário, envia um único
//! POST /calcular ao serviço de cálculo e transforma a resposta em um
//! relatório estruturado ([`models::report::ReportModel`]) com quatro
//! seções: dados de entrada, regime constitucional, detalhamento por
//! período e totais. Toda a matemática de regime e incidência de juros é
//! do backend; aqui só se rederiva a contagem de dias para exibição.

pub mod app;
pub mod models;
pub mod services;
pub mod utils;
