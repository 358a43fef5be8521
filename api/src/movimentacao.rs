//! Wire types for the bank movement and bank account endpoints.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;
use strum::EnumIs;

use crate::money::Reais;

/// Direction of a bank movement.
///
/// Totals only count the two known directions; an unrecognized value is
/// carried verbatim and rendered like an outflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIs)]
pub enum Natureza {
    #[serde(rename = "ENTRADA")]
    Entrada,
    #[serde(rename = "SAIDA")]
    Saida,
    #[serde(untagged)]
    Outra(String),
}

impl Natureza {
    /// The raw wire value, which is also what the badge displays.
    pub fn label(&self) -> &str {
        match self {
            Self::Entrada => "ENTRADA",
            Self::Saida => "SAIDA",
            Self::Outra(s) => s,
        }
    }
}

/// One bank movement as returned by
/// `GET /financeiro/movimentacoes-bancarias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovimentacaoBancaria {
    pub id: i64,
    pub conta_bancaria_id: i64,
    pub tipo: String,
    pub natureza: Natureza,
    pub data_movimentacao: NaiveDateTime,
    #[serde(default)]
    pub data_competencia: Option<NaiveDateTime>,
    pub valor: Reais,
    pub descricao: String,
    pub conciliado: bool,
    pub data_conciliacao: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl MovimentacaoBancaria {
    /// The date shown in listings: competência when present, otherwise the
    /// movement date.
    pub fn data_exibida(&self) -> NaiveDateTime {
        self.data_competencia.unwrap_or(self.data_movimentacao)
    }
}

/// One bank account as returned by `GET /financeiro/contas-bancarias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaBancaria {
    pub id: i64,
    pub nome: String,
    pub banco: Option<String>,
    pub agencia: Option<String>,
    pub conta: Option<String>,
    pub saldo_inicial: Reais,
    pub saldo_atual: Reais,
    pub ativa: i64,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_movimentacao() {
        let json = r#"{
            "id": 21,
            "conta_bancaria_id": 2,
            "tipo": "TRANSFERENCIA_PIX",
            "natureza": "ENTRADA",
            "data_movimentacao": "2025-12-01T09:30:00",
            "data_competencia": null,
            "valor": 350.75,
            "descricao": "Recebimento NF 1042",
            "conciliado": false,
            "data_conciliacao": null,
            "created_at": "2025-12-01T09:30:05"
        }"#;

        let mov: MovimentacaoBancaria = serde_json::from_str(json).unwrap();
        assert!(mov.natureza.is_entrada());
        assert_eq!(mov.valor, Reais::new_from_float(350.75));
        assert_eq!(mov.data_exibida(), mov.data_movimentacao);
        assert!(!mov.conciliado);
    }

    #[test]
    fn test_competencia_takes_precedence_when_present() {
        let json = r#"{
            "id": 22,
            "conta_bancaria_id": 2,
            "tipo": "TARIFA",
            "natureza": "SAIDA",
            "data_movimentacao": "2025-12-03T00:00:00",
            "data_competencia": "2025-11-30T00:00:00",
            "valor": 19.9,
            "descricao": "Tarifa mensal",
            "conciliado": true,
            "data_conciliacao": "2025-12-04T08:00:00",
            "created_at": "2025-12-03T10:00:00"
        }"#;

        let mov: MovimentacaoBancaria = serde_json::from_str(json).unwrap();
        assert_eq!(
            mov.data_exibida().format("%d/%m/%Y").to_string(),
            "30/11/2025"
        );
    }

    #[test]
    fn test_unknown_natureza_is_carried_verbatim() {
        let natureza: Natureza = serde_json::from_str(r#""ESTORNO""#).unwrap();
        assert_eq!(natureza, Natureza::Outra("ESTORNO".into()));
        assert!(!natureza.is_entrada());
        assert!(!natureza.is_saida());
        assert_eq!(natureza.label(), "ESTORNO");
    }

    #[test]
    fn test_deserialize_conta_bancaria() {
        let json = r#"{
            "id": 2,
            "nome": "Itaú Principal",
            "banco": "Itaú",
            "agencia": "0123",
            "conta": "45678-9",
            "saldo_inicial": 1000.0,
            "saldo_atual": 1330.85,
            "ativa": 1,
            "created_at": "2025-01-15T00:00:00"
        }"#;

        let conta: ContaBancaria = serde_json::from_str(json).unwrap();
        assert_eq!(conta.nome, "Itaú Principal");
        assert_eq!(conta.saldo_atual, Reais::new_from_centavos(133_085));
    }
}
