// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod format;
pub mod paging;
mod screens;

use components::pico::Container;
use screens::contas_pagar::ContasPagarScreen;
use screens::contas_receber::ContasReceberScreen;
use screens::historico::HistoricoScreen;
use screens::movimentacoes::MovimentacoesScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Default)]
enum Screen {
    #[default]
    Historico,
    ContasReceber,
    ContasPagar,
    Movimentacoes,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Historico => "Histórico de Liquidações",
            Screen::ContasReceber => "Contas a Receber",
            Screen::ContasPagar => "Contas a Pagar",
            Screen::Movimentacoes => "Movimentações Bancárias",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 4] = [
    Screen::Historico,
    Screen::ContasReceber,
    Screen::ContasPagar,
    Screen::Movimentacoes,
];

/// The top navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: {
                                let is_active = *active_screen.read() == screen;
                                if is_active { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                let is_active = *active_screen.read() == screen;
                                if is_active { "page" } else { "false" }
                            },
                            onclick: {
                                let screen = screen.clone();
                                move |event: MouseEvent| {
                                    event.prevent_default();
                                    active_screen.set(screen.clone());
                                }
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        background-color: var(--muted-border-color);
    }

    /* --- APP FRAME --- */
    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px; /* Margin from window edge */

        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--background-color);
        z-index: 100;
    }

    /* --- PICO CONTAINER OVERRIDE --- */
    .app-main-container > * {
        flex: 1;
        display: flex !important;
        flex-direction: column;
        height: 100%;
        min-height: 0;
        overflow: hidden;

        margin: 0 !important;
        width: 100% !important;
        max-width: 100% !important;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* Active Tab: Rounded corners + Simulated Fading Borders */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        opacity: 1 !important;

        border-radius: 10px 10px 0 0; /* Rounded top corners */
        border: none;                 /* clear standard borders */

        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%) !important;

        background:
            linear-gradient(
                to bottom,
                color-mix(in srgb, var(--pico-primary), transparent 90%),
                transparent
            ) left top / 2px 100% no-repeat,

            linear-gradient(
                to bottom,
                color-mix(in srgb, var(--pico-primary), transparent 90%),
                transparent
            ) right top / 2px 100% no-repeat,

            linear-gradient(
                to bottom,
                color-mix(in srgb, var(--pico-primary), transparent 97%),
                transparent
            ) center / 100% 100% no-repeat

            !important;
    }

    /* --- NAVIGATION TABS --- */

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        min-height: 0;
        padding: 0 1rem;
        margin-top: 0;
    }

    /* The screen root (usually a Card) becomes a flex column so tables can
       scroll inside it without scrolling the whole frame. */
    .app-main-container .content > * {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        min-height: 0;

        margin-bottom: 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.25rem;",
                                    "Financeiro"
                                }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Historico => rsx! {
                            HistoricoScreen {}
                        },
                        Screen::ContasReceber => rsx! {
                            ContasReceberScreen {}
                        },
                        Screen::ContasPagar => rsx! {
                            ContasPagarScreen {}
                        },
                        Screen::Movimentacoes => rsx! {
                            MovimentacoesScreen {}
                        },
                    }
                }
            }
        }
    }
}
