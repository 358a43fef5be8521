use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Navigation target; writing it switches the visible screen.
    #[props(optional)]
    pub state: Option<Signal<Screen>>,

    #[props(optional)]
    pub to: Option<Screen>,

    /// Tooltip shown on hover.
    #[props(optional)]
    pub title: Option<String>,

    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

/// An anchor that navigates inside the app instead of following its href.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    rsx! {
        a {
            href: "#",
            title: props.title.unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();

                if let (Some(mut state_signal), Some(target)) = (props.state, &props.to) {
                    state_signal.set(target.clone());
                }

                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
