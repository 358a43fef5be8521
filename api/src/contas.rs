//! Wire types for the payable and receivable account endpoints.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;
use strum::EnumIs;

use crate::money::Reais;

/// Payment status of a payable or receivable account.
///
/// The backend serializes these lowercase; unrecognized values are carried
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIs)]
#[serde(rename_all = "lowercase")]
pub enum StatusPagamento {
    Pendente,
    Parcial,
    Pago,
    Atrasado,
    #[serde(untagged)]
    Outro(String),
}

impl StatusPagamento {
    /// Human-readable label shown in the status badge.
    pub fn label(&self) -> &str {
        match self {
            Self::Pendente => "Pendente",
            Self::Parcial => "Parcial",
            Self::Pago => "Pago",
            Self::Atrasado => "Atrasado",
            Self::Outro(s) => s,
        }
    }

    /// The value the backend expects in the `status` query parameter.
    pub fn wire_value(&self) -> &str {
        match self {
            Self::Pendente => "pendente",
            Self::Parcial => "parcial",
            Self::Pago => "pago",
            Self::Atrasado => "atrasado",
            Self::Outro(s) => s,
        }
    }
}

/// One payable account as returned by `GET /financeiro/contas-pagar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaPagar {
    pub id: i64,
    pub descricao: String,
    pub fornecedor_id: Option<i64>,
    pub centro_custo_id: Option<i64>,
    pub pedido_compra_id: Option<i64>,
    pub data_emissao: NaiveDateTime,
    pub data_vencimento: NaiveDateTime,
    pub data_pagamento: Option<NaiveDateTime>,
    pub valor_original: Reais,
    pub valor_pago: Reais,
    pub status: StatusPagamento,
    pub observacoes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// One receivable account as returned by `GET /financeiro/contas-receber`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaReceber {
    pub id: i64,
    pub descricao: String,
    pub cliente: String,
    pub centro_custo_id: Option<i64>,
    pub data_emissao: NaiveDateTime,
    pub data_vencimento: NaiveDateTime,
    pub data_recebimento: Option<NaiveDateTime>,
    pub valor_original: Reais,
    pub valor_recebido: Reais,
    pub status: StatusPagamento,
    pub observacoes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&StatusPagamento::Pendente).unwrap(),
            r#""pendente""#
        );
        assert_eq!(
            serde_json::from_str::<StatusPagamento>(r#""atrasado""#).unwrap(),
            StatusPagamento::Atrasado
        );
    }

    #[test]
    fn test_unknown_status_is_carried_verbatim() {
        let status: StatusPagamento = serde_json::from_str(r#""cancelado""#).unwrap();
        assert_eq!(status, StatusPagamento::Outro("cancelado".into()));
        assert_eq!(status.label(), "cancelado");
    }

    #[test]
    fn test_deserialize_conta_receber() {
        let json = r#"{
            "id": 3,
            "descricao": "NF 1042",
            "cliente": "Construtora Alfa",
            "centro_custo_id": null,
            "data_emissao": "2025-11-01T08:00:00",
            "data_vencimento": "2025-12-01T00:00:00",
            "data_recebimento": null,
            "valor_original": 1500.0,
            "valor_recebido": 500.0,
            "status": "parcial",
            "observacoes": "Entrada de 1/3",
            "created_at": "2025-11-01T08:00:00"
        }"#;

        let conta: ContaReceber = serde_json::from_str(json).unwrap();
        assert_eq!(conta.cliente, "Construtora Alfa");
        assert_eq!(conta.status, StatusPagamento::Parcial);
        assert_eq!(conta.valor_recebido, Reais::new_from_float(500.0));
        assert!(conta.status.is_parcial());
    }

    #[test]
    fn test_deserialize_conta_pagar() {
        let json = r#"{
            "id": 8,
            "descricao": "Aluguel galpão",
            "fornecedor_id": 5,
            "centro_custo_id": 2,
            "pedido_compra_id": null,
            "data_emissao": "2025-10-05T00:00:00",
            "data_vencimento": "2025-10-10T00:00:00",
            "data_pagamento": "2025-10-09T14:30:00",
            "valor_original": 8000.0,
            "valor_pago": 8000.0,
            "status": "pago",
            "observacoes": null,
            "created_at": "2025-10-05T09:12:00"
        }"#;

        let conta: ContaPagar = serde_json::from_str(json).unwrap();
        assert_eq!(conta.fornecedor_id, Some(5));
        assert!(conta.status.is_pago());
        assert_eq!(conta.valor_pago.to_string_with_symbol(), "R$ 8.000,00");
    }
}
