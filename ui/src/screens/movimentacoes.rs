//=============================================================================
// File: src/screens/movimentacoes.rs
//=============================================================================
use api::money::Reais;
use api::movimentacao::ContaBancaria;
use api::movimentacao::MovimentacaoBancaria;
use api::movimentacao::Natureza;
use dioxus::prelude::*;
use num_traits::CheckedAdd;

use crate::components::badge::Badge;
use crate::components::badge::BadgeTone;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::format;

/// Badge tone for a movement direction. Unknown directions render like
/// outflows.
fn natureza_tone(natureza: &Natureza) -> BadgeTone {
    if natureza.is_entrada() {
        BadgeTone::Green
    } else {
        BadgeTone::Red
    }
}

/// Sums inflows and outflows over the rows currently displayed. Directions
/// other than ENTRADA and SAIDA count toward neither total.
fn totais(movs: &[MovimentacaoBancaria]) -> (Reais, Reais) {
    let total = |apenas: fn(&Natureza) -> bool| {
        movs.iter()
            .filter(|m| apenas(&m.natureza))
            .map(|m| m.valor)
            .fold(Reais::default(), |acc, v| acc.checked_add(&v).unwrap_or(acc))
    };
    (total(Natureza::is_entrada), total(Natureza::is_saida))
}

/// Resolves a bank account name for display.
fn nome_conta(contas: &[ContaBancaria], conta_id: i64) -> String {
    contas
        .iter()
        .find(|c| c.id == conta_id)
        .map(|c| c.nome.clone())
        .unwrap_or_else(|| "Conta não encontrada".to_string())
}

#[component]
fn MovimentacaoRow(mov: MovimentacaoBancaria, contas: Vec<ContaBancaria>) -> Element {
    let data = format::format_data(&mov.data_exibida());
    let conta = nome_conta(&contas, mov.conta_bancaria_id);
    let tipo = mov.tipo.replace('_', " ");
    let (sinal, cor_valor) = if mov.natureza.is_entrada() {
        ("+", "#16a34a")
    } else {
        ("-", "#dc2626")
    };
    let (tom_conciliado, rotulo_conciliado) = if mov.conciliado {
        (BadgeTone::Blue, "Sim")
    } else {
        (BadgeTone::Yellow, "Não")
    };

    rsx! {
        tr {
            td { "{data}" }
            td { "{conta}" }
            td { "{tipo}" }
            td { "{mov.descricao}" }
            td {
                Badge {
                    tone: natureza_tone(&mov.natureza),
                    "{mov.natureza.label()}"
                }
            }
            td {
                style: "text-align: right; font-weight: 600; color: {cor_valor};",
                "{sinal} {mov.valor.to_string_with_symbol()}"
            }
            td {
                style: "text-align: center;",
                Badge {
                    tone: tom_conciliado,
                    "{rotulo_conciliado}"
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn MovimentacoesScreen() -> Element {
    let mut busca = use_signal(String::new);
    let mut filtro_conta = use_signal(|| None::<i64>);
    let mut filtro_conciliado = use_signal(|| None::<bool>);

    let contas_resource =
        use_resource(move || async move { api::contas_bancarias().await });

    let mut movs_resource = use_resource(move || async move {
        let conta_id = filtro_conta();
        let conciliado = filtro_conciliado();
        api::movimentacoes_bancarias(conta_id, conciliado).await
    });

    // Account names double as select options and as the per-row lookup.
    let contas_cadastradas: Vec<ContaBancaria> = match &*contas_resource.read() {
        Some(Ok(contas)) => contas.clone(),
        _ => Vec::new(),
    };

    rsx! {
        // One scrolling root so the frame's flex sizing applies to the screen
        // as a whole rather than to each card.
        div {
            style: "overflow-y: auto;",

            Card {
                h3 {
                    style: "margin-bottom: 0.25rem;",
                    "Movimentações Bancárias"
                }
                p {
                    style: "color: var(--pico-muted-color); margin-bottom: 1rem;",
                    "Gestão de entradas e saídas bancárias"
                }

                Grid {
                    div {
                        label {
                            style: "font-size: 0.9rem;",
                            "Buscar"
                        }
                        input {
                            r#type: "search",
                            style: "margin-bottom: 0;",
                            placeholder: "Buscar por descrição...",
                            oninput: move |event| busca.set(event.value()),
                        }
                    }
                    div {
                        label {
                            style: "font-size: 0.9rem;",
                            "Conta Bancária"
                        }
                        select {
                            style: "margin-bottom: 0;",
                            onchange: move |evt| {
                                filtro_conta.set(evt.value().parse::<i64>().ok());
                            },
                            option {
                                value: "",
                                selected: filtro_conta().is_none(),
                                "Todas as contas"
                            }
                            for conta in contas_cadastradas.iter() {
                                option {
                                    key: "{conta.id}",
                                    value: "{conta.id}",
                                    selected: filtro_conta() == Some(conta.id),
                                    "{conta.nome}"
                                }
                            }
                        }
                    }
                    div {
                        label {
                            style: "font-size: 0.9rem;",
                            "Status Conciliação"
                        }
                        select {
                            style: "margin-bottom: 0;",
                            onchange: move |evt| {
                                let novo = match evt.value().as_str() {
                                    "true" => Some(true),
                                    "false" => Some(false),
                                    _ => None,
                                };
                                filtro_conciliado.set(novo);
                            },
                            option {
                                value: "",
                                selected: filtro_conciliado().is_none(),
                                "Todas"
                            }
                            option {
                                value: "true",
                                selected: filtro_conciliado() == Some(true),
                                "Conciliadas"
                            }
                            option {
                                value: "false",
                                selected: filtro_conciliado() == Some(false),
                                "Pendentes"
                            }
                        }
                    }
                }
            }

            match &*movs_resource.read() {
                None => rsx! {
                    Card {
                        p { "Carregando..." }
                        progress {}
                    }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        p { "Erro ao buscar dados: {e}" }
                        button {
                            onclick: move |_| movs_resource.restart(),
                            "Tentar novamente"
                        }
                    }
                },
                Some(Ok(movs)) => {
                    let termo = busca.read().to_lowercase();
                    let filtradas: Vec<MovimentacaoBancaria> = movs
                        .iter()
                        .filter(|m| m.descricao.to_lowercase().contains(termo.as_str()))
                        .cloned()
                        .collect();

                    let (total_entradas, total_saidas) = totais(&filtradas);
                    let saldo = total_entradas - total_saidas;
                    let cor_saldo = if saldo.centavos() >= 0 { "#16a34a" } else { "#dc2626" };

                    rsx! {
                        Grid {
                            Card {
                                small {
                                    style: "color: var(--pico-muted-color);",
                                    "Total Entradas"
                                }
                                h4 {
                                    style: "color: #16a34a; margin-bottom: 0;",
                                    "{total_entradas.to_string_with_symbol()}"
                                }
                            }
                            Card {
                                small {
                                    style: "color: var(--pico-muted-color);",
                                    "Total Saídas"
                                }
                                h4 {
                                    style: "color: #dc2626; margin-bottom: 0;",
                                    "{total_saidas.to_string_with_symbol()}"
                                }
                            }
                            Card {
                                small {
                                    style: "color: var(--pico-muted-color);",
                                    "Saldo Movimentações"
                                }
                                h4 {
                                    style: "color: {cor_saldo}; margin-bottom: 0;",
                                    "{saldo.to_string_with_symbol()}"
                                }
                            }
                        }

                        Card {
                            if filtradas.is_empty() {
                                EmptyState {
                                    title: "Nenhuma movimentação encontrada".to_string(),
                                    description: if busca.read().is_empty()
                                        && filtro_conta().is_none()
                                        && filtro_conciliado().is_none()
                                    {
                                        None
                                    } else {
                                        Some("Tente alterar os filtros aplicados".to_string())
                                    },
                                    icon: rsx! {
                                        span { "🏦" }
                                    },
                                }
                            } else {
                                table {
                                    thead {
                                        tr {
                                            th { "Data" }
                                            th { "Conta" }
                                            th { "Tipo" }
                                            th { "Descrição" }
                                            th { "Natureza" }
                                            th { style: "text-align: right;", "Valor" }
                                            th { style: "text-align: center;", "Conciliado" }
                                        }
                                    }
                                    tbody {
                                        for mov in filtradas {
                                            MovimentacaoRow {
                                                key: "{mov.id}",
                                                mov,
                                                contas: contas_cadastradas.clone(),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
