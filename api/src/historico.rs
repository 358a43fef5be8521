//! Wire types for the settlement history endpoint.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use strum::EnumIs;

use crate::money::Reais;

/// The kind of settlement operation a history record describes.
///
/// The backend emits free-form strings; the two known values get their own
/// variants and anything else is carried through verbatim so a newer backend
/// never breaks deserialization of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIs)]
pub enum TipoOperacao {
    #[serde(rename = "BAIXA_MULTIPLA")]
    BaixaMultipla,
    #[serde(rename = "COMPENSACAO")]
    Compensacao,
    #[serde(untagged)]
    Outra(String),
}

impl TipoOperacao {
    /// Human-readable label shown in the table.
    pub fn label(&self) -> &str {
        match self {
            Self::BaixaMultipla => "Baixa Múltipla",
            Self::Compensacao => "Compensação",
            Self::Outra(s) => s,
        }
    }

    /// The value the backend expects in the `tipo_operacao` query parameter.
    pub fn wire_value(&self) -> &str {
        match self {
            Self::BaixaMultipla => "BAIXA_MULTIPLA",
            Self::Compensacao => "COMPENSACAO",
            Self::Outra(s) => s,
        }
    }
}

/// Which side of the ledger the settled account belongs to.
///
/// `RECEBER` maps to receivable; every other wire value is treated as
/// payable, matching how the module routes account links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum TipoConta {
    Receber,
    Pagar,
}

impl TipoConta {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Receber => "A Receber",
            Self::Pagar => "A Pagar",
        }
    }
}

impl Serialize for TipoConta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match self {
            Self::Receber => "RECEBER",
            Self::Pagar => "PAGAR",
        })
    }
}

impl<'de> Deserialize<'de> for TipoConta {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "RECEBER" {
            Self::Receber
        } else {
            Self::Pagar
        })
    }
}

/// One settlement operation as returned by
/// `GET /financeiro/historico-liquidacao`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricoItem {
    pub id: i64,
    pub tipo_operacao: TipoOperacao,
    pub data_operacao: NaiveDateTime,
    pub valor_total: Reais,
    pub conta_origem_id: i64,
    pub tipo_conta_origem: TipoConta,
    #[serde(default)]
    pub contas_geradas_ids: Vec<i64>,
    pub movimentacao_bancaria_id: Option<i64>,
    pub observacao: Option<String>,
    pub created_by: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 12,
            "tipo_operacao": "BAIXA_MULTIPLA",
            "data_operacao": "2025-12-09T00:25:27.968901",
            "valor_total": 1234.5,
            "conta_origem_id": 7,
            "tipo_conta_origem": "RECEBER",
            "contas_geradas_ids": [31, 32],
            "movimentacao_bancaria_id": 99,
            "observacao": "Baixa parcial",
            "created_by": 1
        }"#;

        let item: HistoricoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 12);
        assert_eq!(item.tipo_operacao, TipoOperacao::BaixaMultipla);
        assert_eq!(item.valor_total, Reais::new_from_float(1234.5));
        assert_eq!(item.tipo_conta_origem, TipoConta::Receber);
        assert_eq!(item.contas_geradas_ids, vec![31, 32]);
        assert_eq!(item.movimentacao_bancaria_id, Some(99));
        assert_eq!(item.data_operacao.format("%d/%m/%Y").to_string(), "09/12/2025");
    }

    #[test]
    fn test_unknown_operation_is_carried_verbatim() {
        let tipo: TipoOperacao = serde_json::from_str(r#""ESTORNO""#).unwrap();
        assert_eq!(tipo, TipoOperacao::Outra("ESTORNO".into()));
        assert_eq!(tipo.label(), "ESTORNO");
        assert_eq!(tipo.wire_value(), "ESTORNO");
    }

    #[test]
    fn test_known_operations_roundtrip() {
        for (tipo, wire) in [
            (TipoOperacao::BaixaMultipla, r#""BAIXA_MULTIPLA""#),
            (TipoOperacao::Compensacao, r#""COMPENSACAO""#),
        ] {
            assert_eq!(serde_json::to_string(&tipo).unwrap(), wire);
            assert_eq!(serde_json::from_str::<TipoOperacao>(wire).unwrap(), tipo);
        }
    }

    #[test]
    fn test_any_other_account_type_is_payable() {
        let receber: TipoConta = serde_json::from_str(r#""RECEBER""#).unwrap();
        assert!(receber.is_receber());

        let pagar: TipoConta = serde_json::from_str(r#""PAGAR""#).unwrap();
        assert!(pagar.is_pagar());

        let outro: TipoConta = serde_json::from_str(r#""CAUCAO""#).unwrap();
        assert!(outro.is_pagar());
    }

    #[test]
    fn test_missing_generated_ids_default_to_empty() {
        let json = r#"{
            "id": 1,
            "tipo_operacao": "COMPENSACAO",
            "data_operacao": "2025-01-02T10:00:00",
            "valor_total": 70.0,
            "conta_origem_id": 2,
            "tipo_conta_origem": "PAGAR",
            "movimentacao_bancaria_id": null,
            "observacao": null,
            "created_by": null
        }"#;

        let item: HistoricoItem = serde_json::from_str(json).unwrap();
        assert!(item.contas_geradas_ids.is_empty());
        assert_eq!(item.movimentacao_bancaria_id, None);
        assert_eq!(item.observacao, None);
    }
}
