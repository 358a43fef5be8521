// This file makes the screen modules available to the rest of the application.

pub mod contas_pagar;
pub mod contas_receber;
pub mod historico;
pub mod movimentacoes;
