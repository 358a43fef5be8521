//! This crate contains all shared fullstack server functions.

pub mod contas;
pub mod historico;
pub mod money;
pub mod movimentacao;

use contas::ContaPagar;
use contas::ContaReceber;
use contas::StatusPagamento;
use dioxus::prelude::*;
use historico::HistoricoItem;
use historico::TipoOperacao;
use movimentacao::ContaBancaria;
use movimentacao::MovimentacaoBancaria;

pub type ApiError = anyhow::Error;

/// Retrieves one page of settlement operations, newest first.
///
/// `skip`/`limit` paginate server-side; `tipo_operacao` narrows the page to
/// a single operation kind when set.
#[post("/api/historico_liquidacao")]
pub async fn historico_liquidacao(
    skip: usize,
    limit: usize,
    tipo_operacao: Option<TipoOperacao>,
) -> Result<Vec<HistoricoItem>, ApiError> {
    let mut params = vec![
        ("skip".to_string(), skip.to_string()),
        ("limit".to_string(), limit.to_string()),
    ];
    if let Some(tipo) = &tipo_operacao {
        params.push(("tipo_operacao".to_string(), tipo.wire_value().to_string()));
    }

    erp::get_json("/financeiro/historico-liquidacao", &params).await
}

#[post("/api/contas_receber")]
pub async fn contas_receber(
    status: Option<StatusPagamento>,
) -> Result<Vec<ContaReceber>, ApiError> {
    let mut params = Vec::new();
    if let Some(status) = &status {
        params.push(("status".to_string(), status.wire_value().to_string()));
    }

    erp::get_json("/financeiro/contas-receber", &params).await
}

#[post("/api/contas_pagar")]
pub async fn contas_pagar(status: Option<StatusPagamento>) -> Result<Vec<ContaPagar>, ApiError> {
    let mut params = Vec::new();
    if let Some(status) = &status {
        params.push(("status".to_string(), status.wire_value().to_string()));
    }

    erp::get_json("/financeiro/contas-pagar", &params).await
}

#[post("/api/movimentacoes_bancarias")]
pub async fn movimentacoes_bancarias(
    conta_id: Option<i64>,
    conciliado: Option<bool>,
) -> Result<Vec<MovimentacaoBancaria>, ApiError> {
    let mut params = Vec::new();
    if let Some(conta_id) = conta_id {
        params.push(("conta_id".to_string(), conta_id.to_string()));
    }
    if let Some(conciliado) = conciliado {
        params.push(("conciliado".to_string(), conciliado.to_string()));
    }

    erp::get_json("/financeiro/movimentacoes-bancarias", &params).await
}

#[post("/api/contas_bancarias")]
pub async fn contas_bancarias() -> Result<Vec<ContaBancaria>, ApiError> {
    erp::get_json("/financeiro/contas-bancarias", &[]).await
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
mod erp {
    use dioxus::logger::tracing::debug;
    use serde::de::DeserializeOwned;

    use super::ApiError;

    /// Base URL of the ERP backend that serves the financeiro module.
    pub fn api_base_url() -> String {
        const DEFAULT_URL: &str = "http://localhost:8000";
        std::env::var("FINANCEIRO_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
    }

    fn api_token() -> Option<String> {
        std::env::var("FINANCEIRO_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
    }

    pub async fn get_json<T>(path: &str, params: &[(String, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", api_base_url(), path);
        debug!("GET {url}");

        let client = reqwest::Client::new();
        let mut request = client.get(&url).query(params);
        if let Some(token) = api_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
