//=============================================================================
// File: src/screens/historico.rs
//=============================================================================
use api::historico::HistoricoItem;
use api::historico::TipoConta;
use api::historico::TipoOperacao;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use itertools::Itertools;

use crate::components::action_link::ActionLink;
use crate::components::badge::Badge;
use crate::components::badge::BadgeTone;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::format;
use crate::paging::Paging;
use crate::Screen;

/// Server page size for the settlement history listing.
const PAGE_SIZE: usize = 50;

/// Badge tone for an operation kind.
fn tipo_operacao_tone(tipo: &TipoOperacao) -> BadgeTone {
    match tipo {
        TipoOperacao::BaixaMultipla => BadgeTone::Green,
        TipoOperacao::Compensacao => BadgeTone::Blue,
        TipoOperacao::Outra(_) => BadgeTone::Gray,
    }
}

/// Badge tone for the source account side.
fn tipo_conta_tone(tipo: TipoConta) -> BadgeTone {
    if tipo.is_receber() {
        BadgeTone::Green
    } else {
        BadgeTone::Red
    }
}

/// Which screen the source account link opens.
fn conta_origem_screen(tipo: TipoConta) -> Screen {
    if tipo.is_receber() {
        Screen::ContasReceber
    } else {
        Screen::ContasPagar
    }
}

/// A self-contained component for rendering a single settlement row.
#[component]
fn HistoricoRow(item: HistoricoItem) -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    let data = format::format_data_hora(&item.data_operacao);
    let contas_geradas = item.contas_geradas_ids.iter().join(", ");
    let observacao = format::truncate_with_ellipsis(item.observacao.as_deref(), 50);

    rsx! {
        tr {
            td { "{data}" }
            td {
                Badge {
                    tone: tipo_operacao_tone(&item.tipo_operacao),
                    "{item.tipo_operacao.label()}"
                }
            }
            td {
                ActionLink {
                    state: active_screen,
                    to: conta_origem_screen(item.tipo_conta_origem),
                    title: "Ver conta origem".to_string(),
                    "#{item.conta_origem_id}"
                }
            }
            td {
                Badge {
                    tone: tipo_conta_tone(item.tipo_conta_origem),
                    "{item.tipo_conta_origem.label()}"
                }
            }
            td {
                style: "text-align: right; font-weight: 600;",
                "{item.valor_total.to_string_with_symbol()}"
            }
            td {
                style: "text-align: center;",
                Badge {
                    tone: BadgeTone::Slate,
                    title: contas_geradas,
                    "{item.contas_geradas_ids.len()}"
                }
            }
            td {
                span {
                    title: "{item.observacao.as_deref().unwrap_or_default()}",
                    "{observacao}"
                }
            }
            td {
                style: "text-align: center;",
                if let Some(mov_id) = item.movimentacao_bancaria_id {
                    ActionLink {
                        state: active_screen,
                        to: Screen::Movimentacoes,
                        title: "Ver movimentação bancária".to_string(),
                        "#{mov_id}"
                    }
                } else {
                    span {
                        style: "color: var(--pico-muted-color);",
                        "-"
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoricoScreen() -> Element {
    let mut registros = use_signal(Vec::<HistoricoItem>::new);
    let mut carregando = use_signal(|| true);
    let mut filtro_tipo = use_signal(|| None::<TipoOperacao>);
    let mut paging = use_signal(Paging::new);

    // Memoized so writes that keep the offset unchanged (recording a page's
    // size) do not retrigger the fetch below.
    let skip_atual = use_memo(move || paging.read().skip(PAGE_SIZE));

    // Refetches on mount and whenever the filter or the page changes. A
    // superseded in-flight request is not cancelled; the last response to
    // arrive wins.
    use_effect(move || {
        let filtro = filtro_tipo();
        let skip = skip_atual();

        spawn(async move {
            carregando.set(true);

            match api::historico_liquidacao(skip, PAGE_SIZE, filtro).await {
                Ok(pagina) => {
                    paging.write().record_page(pagina.len(), PAGE_SIZE);
                    registros.set(pagina);
                }
                Err(e) => {
                    warn!("Erro ao buscar histórico: {e}");
                }
            }

            carregando.set(false);
        });
    });

    rsx! {
        Card {
            div {
                style: "flex-shrink: 0;",
                h3 {
                    style: "margin-bottom: 0.25rem;",
                    "Histórico de Liquidações"
                }
                p {
                    style: "color: var(--pico-muted-color); margin-bottom: 1rem;",
                    "Consultar operações de liquidação realizadas"
                }

                div {
                    style: "display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem;",
                    label {
                        style: "margin-bottom: 0; font-size: 0.9rem;",
                        "Tipo de Operação"
                    }
                    select {
                        style: "width: auto; margin-bottom: 0; padding: 4px 8px; font-size: 0.9rem;",
                        onchange: move |evt| {
                            let novo = match evt.value().as_str() {
                                "BAIXA_MULTIPLA" => Some(TipoOperacao::BaixaMultipla),
                                "COMPENSACAO" => Some(TipoOperacao::Compensacao),
                                _ => None,
                            };
                            filtro_tipo.set(novo);
                            paging.write().reset();
                        },
                        option {
                            value: "",
                            selected: filtro_tipo().is_none(),
                            "Todos"
                        }
                        option {
                            value: "BAIXA_MULTIPLA",
                            selected: filtro_tipo() == Some(TipoOperacao::BaixaMultipla),
                            "Baixa Múltipla"
                        }
                        option {
                            value: "COMPENSACAO",
                            selected: filtro_tipo() == Some(TipoOperacao::Compensacao),
                            "Compensação"
                        }
                    }
                    if filtro_tipo().is_some() {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| {
                                filtro_tipo.set(None);
                                paging.write().reset();
                            },
                            "Limpar Filtros"
                        }
                    }
                }
            }

            if carregando() {
                div {
                    style: "padding: 2rem 0;",
                    p { "Carregando histórico..." }
                    progress {}
                }
            } else if registros.read().is_empty() {
                EmptyState {
                    title: "Nenhuma operação encontrada".to_string(),
                    description: Some(if filtro_tipo().is_some() {
                        "Tente alterar os filtros aplicados".to_string()
                    } else {
                        "Realize operações de liquidação para visualizá-las aqui".to_string()
                    }),
                    icon: rsx! {
                        span { "📋" }
                    },
                }
            } else {
                div {
                    style: "flex: 1; min-height: 0; overflow-y: auto;",
                    table {
                        thead {
                            tr {
                                th { "Data/Hora" }
                                th { "Tipo de Operação" }
                                th { "Conta Origem" }
                                th { "Tipo Conta" }
                                th { style: "text-align: right;", "Valor Total" }
                                th { style: "text-align: center;", "Contas Geradas" }
                                th { "Observação" }
                                th { style: "text-align: center;", "Movimentação" }
                            }
                        }
                        tbody {
                            for item in registros.read().iter().cloned() {
                                HistoricoRow {
                                    key: "{item.id}",
                                    item,
                                }
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; flex-shrink: 0;",
                    small {
                        style: "color: var(--pico-muted-color);",
                        "Mostrando {registros.read().len()} registro(s)"
                    }
                    div {
                        style: "display: flex; gap: 0.5rem;",
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            disabled: !paging.read().can_prev(),
                            on_click: move |_| paging.write().prev(),
                            "Anterior"
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            disabled: !paging.read().can_next(),
                            on_click: move |_| paging.write().next(),
                            "Próxima"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receber_links_to_contas_receber() {
        assert!(matches!(
            conta_origem_screen(TipoConta::Receber),
            Screen::ContasReceber
        ));
        assert!(matches!(
            conta_origem_screen(TipoConta::Pagar),
            Screen::ContasPagar
        ));
    }

    #[test]
    fn test_operation_badge_tones() {
        assert_eq!(tipo_operacao_tone(&TipoOperacao::BaixaMultipla), BadgeTone::Green);
        assert_eq!(tipo_operacao_tone(&TipoOperacao::Compensacao), BadgeTone::Blue);
        assert_eq!(
            tipo_operacao_tone(&TipoOperacao::Outra("ESTORNO".into())),
            BadgeTone::Gray
        );
    }

    #[test]
    fn test_account_side_badge_tones() {
        assert_eq!(tipo_conta_tone(TipoConta::Receber), BadgeTone::Green);
        assert_eq!(tipo_conta_tone(TipoConta::Pagar), BadgeTone::Red);
    }
}
