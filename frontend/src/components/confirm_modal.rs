use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    #[prop_or(AttrValue::Static("Confirm"))]
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("Cancel"))]
    pub cancel_label: AttrValue,
    /// Render the confirm button as a destructive action
    #[prop_or(true)]
    pub danger: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let confirm_class = if props.danger {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    html! {
        <div class="confirm-modal-backdrop" onclick={on_backdrop_click}>
            <div class="confirm-modal" onclick={on_modal_click}>
                <div class="confirm-modal-content">
                    <h3 class="confirm-title">{&props.title}</h3>
                    if !props.description.is_empty() {
                        <p class="confirm-description">{&props.description}</p>
                    }
                    <div class="confirm-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {&props.cancel_label}
                        </button>
                        <button type="button" class={confirm_class} onclick={on_confirm_click}>
                            {&props.confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
