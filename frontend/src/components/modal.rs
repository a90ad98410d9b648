use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ModalKind {
    #[default]
    Dialog,
    /// Destructive confirmation, styled with a warning accent
    Confirmation,
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub kind: ModalKind,
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay dialog; clicking the backdrop closes it.
///
/// The parent decides whether it is shown by rendering it or not.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_dialog_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let dialog_class = match props.kind {
        ModalKind::Dialog => "modal-dialog",
        ModalKind::Confirmation => "modal-dialog confirmation",
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class={dialog_class} onclick={on_dialog_click} role="dialog">
                <div class="modal-header">
                    if props.kind == ModalKind::Confirmation {
                        <span class="modal-warning-icon">{ "!" }</span>
                    }
                    <h2>{ props.title.clone() }</h2>
                </div>
                <div class="modal-content">
                    { props.children.clone() }
                </div>
                <div class="modal-footer">
                    { props.footer.clone() }
                </div>
            </div>
        </div>
    }
}
