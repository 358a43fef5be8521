//=============================================================================
// File: src/screens/contas_pagar.rs
//=============================================================================
use api::contas::ContaPagar;
use api::contas::StatusPagamento;
use dioxus::prelude::*;

use crate::components::badge::status_tone;
use crate::components::badge::Badge;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::format;

#[allow(non_snake_case)]
#[component]
pub fn ContasPagarScreen() -> Element {
    let mut busca = use_signal(String::new);
    let mut filtro_status = use_signal(|| None::<StatusPagamento>);

    let mut contas_resource = use_resource(move || async move {
        let status = filtro_status();
        api::contas_pagar(status).await
    });

    rsx! {
        Card {
            div {
                style: "flex-shrink: 0;",
                h3 {
                    style: "margin-bottom: 0.25rem;",
                    "Contas a Pagar"
                }
                p {
                    style: "color: var(--pico-muted-color); margin-bottom: 1rem;",
                    "Gerencie as despesas e pagamentos"
                }

                div {
                    style: "display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem;",
                    input {
                        r#type: "search",
                        style: "flex: 1; margin-bottom: 0;",
                        placeholder: "Buscar por descrição...",
                        oninput: move |event| busca.set(event.value()),
                    }
                    select {
                        style: "width: auto; margin-bottom: 0; padding: 4px 8px; font-size: 0.9rem;",
                        onchange: move |evt| {
                            let novo = match evt.value().as_str() {
                                "pendente" => Some(StatusPagamento::Pendente),
                                "parcial" => Some(StatusPagamento::Parcial),
                                "pago" => Some(StatusPagamento::Pago),
                                "atrasado" => Some(StatusPagamento::Atrasado),
                                _ => None,
                            };
                            filtro_status.set(novo);
                        },
                        option {
                            value: "",
                            selected: filtro_status().is_none(),
                            "Todos"
                        }
                        option {
                            value: "pendente",
                            selected: filtro_status() == Some(StatusPagamento::Pendente),
                            "Pendente"
                        }
                        option {
                            value: "parcial",
                            selected: filtro_status() == Some(StatusPagamento::Parcial),
                            "Parcial"
                        }
                        option {
                            value: "pago",
                            selected: filtro_status() == Some(StatusPagamento::Pago),
                            "Pago"
                        }
                        option {
                            value: "atrasado",
                            selected: filtro_status() == Some(StatusPagamento::Atrasado),
                            "Atrasado"
                        }
                    }
                }
            }

            match &*contas_resource.read() {
                None => rsx! {
                    div {
                        style: "padding: 2rem 0;",
                        p { "Carregando..." }
                        progress {}
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        style: "padding: 2rem 0;",
                        p { "Erro ao carregar contas: {e}" }
                        button {
                            onclick: move |_| contas_resource.restart(),
                            "Tentar novamente"
                        }
                    }
                },
                Some(Ok(contas)) => {
                    let termo = busca.read().to_lowercase();
                    let filtradas: Vec<ContaPagar> = contas
                        .iter()
                        .filter(|c| c.descricao.to_lowercase().contains(termo.as_str()))
                        .cloned()
                        .collect();

                    rsx! {
                        if filtradas.is_empty() {
                            EmptyState {
                                title: "Nenhuma conta encontrada".to_string(),
                                description: if busca.read().is_empty() && filtro_status().is_none() {
                                    None
                                } else {
                                    Some("Tente alterar os filtros aplicados".to_string())
                                },
                                icon: rsx! {
                                    span { "🧾" }
                                },
                            }
                        } else {
                            div {
                                style: "flex: 1; min-height: 0; overflow-y: auto;",
                                table {
                                    thead {
                                        tr {
                                            th { "Descrição" }
                                            th { "Vencimento" }
                                            th { style: "text-align: right;", "Valor" }
                                            th { style: "text-align: right;", "Pago" }
                                            th { "Status" }
                                        }
                                    }
                                    tbody {
                                        for conta in filtradas {
                                            tr {
                                                key: "{conta.id}",
                                                td {
                                                    div {
                                                        style: "font-weight: 600;",
                                                        "{conta.descricao}"
                                                    }
                                                    if let Some(obs) = conta.observacoes.as_deref().filter(|o| !o.is_empty()) {
                                                        small {
                                                            style: "color: var(--pico-muted-color);",
                                                            {format::truncate_with_ellipsis(Some(obs), 50)}
                                                        }
                                                    }
                                                }
                                                td { {format::format_data(&conta.data_vencimento)} }
                                                td {
                                                    style: "text-align: right; font-weight: 600;",
                                                    "{conta.valor_original.to_string_with_symbol()}"
                                                }
                                                td {
                                                    style: "text-align: right;",
                                                    "{conta.valor_pago.to_string_with_symbol()}"
                                                }
                                                td {
                                                    Badge {
                                                        tone: status_tone(&conta.status),
                                                        "{conta.status.label()}"
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
    }
}
