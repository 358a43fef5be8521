// File: src/components/badge.rs
use api::contas::StatusPagamento;
use dioxus::prelude::*;

/// Color tones for the pill badges used across the financeiro tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Blue,
    Red,
    Yellow,
    Slate,
    Gray,
}

impl BadgeTone {
    /// Background and text color pair for the tone.
    fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Self::Green => ("#dcfce7", "#166534"),
            Self::Blue => ("#dbeafe", "#1e40af"),
            Self::Red => ("#fee2e2", "#b91c1c"),
            Self::Yellow => ("#fef9c3", "#854d0e"),
            Self::Slate => ("#f1f5f9", "#1e293b"),
            Self::Gray => ("#f3f4f6", "#1f2937"),
        }
    }
}

/// Badge tone for a payment status: paid green, pending yellow, partial
/// blue, late red, anything unrecognized gray.
pub fn status_tone(status: &StatusPagamento) -> BadgeTone {
    match status {
        StatusPagamento::Pago => BadgeTone::Green,
        StatusPagamento::Pendente => BadgeTone::Yellow,
        StatusPagamento::Parcial => BadgeTone::Blue,
        StatusPagamento::Atrasado => BadgeTone::Red,
        StatusPagamento::Outro(_) => BadgeTone::Gray,
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BadgeProps {
    #[props(default = BadgeTone::Gray)]
    pub tone: BadgeTone,
    /// Tooltip shown on hover.
    #[props(optional)]
    pub title: Option<String>,
    pub children: Element,
}

/// A small rounded pill for types, statuses and counts.
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let (background, color) = props.tone.colors();
    rsx! {
        span {
            style: "display: inline-block; padding: 0.15rem 0.6rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; white-space: nowrap; background-color: {background}; color: {color};",
            title: props.title.unwrap_or_default(),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones_follow_module_palette() {
        assert_eq!(status_tone(&StatusPagamento::Pago), BadgeTone::Green);
        assert_eq!(status_tone(&StatusPagamento::Pendente), BadgeTone::Yellow);
        assert_eq!(status_tone(&StatusPagamento::Atrasado), BadgeTone::Red);
        assert_eq!(status_tone(&StatusPagamento::Parcial), BadgeTone::Blue);
        assert_eq!(
            status_tone(&StatusPagamento::Outro("cancelado".into())),
            BadgeTone::Gray
        );
    }
}
