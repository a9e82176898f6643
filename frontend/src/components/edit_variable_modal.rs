use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use shared::{EditConfirmation, EditValue, MessageKey, PromptVariable, Translator, VariableKind, VariableType};

use crate::services::i18n::I18nContext;

#[derive(Properties, PartialEq)]
pub struct EditVariableModalProps {
    pub is_open: bool,
    /// Variable being edited; `None` when its key no longer resolves
    pub payload: Option<PromptVariable>,
    pub default_max_length: u32,
    pub on_confirm: Callback<EditConfirmation>,
    pub on_close: Callback<()>,
}

/// Build the modal result from the raw form fields.
///
/// An unparsable or zero max length and an empty option list both yield no
/// value, leaving the caller to fill in its defaults.
pub fn build_confirmation(var_type: VariableType, max_length_input: &str, options_input: &str) -> EditConfirmation {
    let value = match var_type {
        VariableType::String => max_length_input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .map(EditValue::MaxLength),
        VariableType::Select => {
            let options: Vec<String> = options_input
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if options.is_empty() {
                None
            } else {
                Some(EditValue::Options(options))
            }
        }
        VariableType::Paragraph | VariableType::Number => None,
    };

    EditConfirmation { var_type, value }
}

#[function_component(EditVariableModal)]
pub fn edit_variable_modal(props: &EditVariableModalProps) -> Html {
    let catalog = use_context::<I18nContext>().unwrap_or_default();
    let var_type = use_state(|| VariableType::String);
    let max_length = use_state(String::new);
    let options = use_state(String::new);

    // Load the payload into the form whenever the modal opens
    use_effect_with((props.is_open, props.payload.clone()), {
        let var_type = var_type.clone();
        let max_length = max_length.clone();
        let options = options.clone();
        let default_max_length = props.default_max_length;
        move |(is_open, payload): &(bool, Option<PromptVariable>)| {
            if *is_open {
                match payload.as_ref().map(|var| &var.kind) {
                    Some(VariableKind::String { max_length: n }) => {
                        var_type.set(VariableType::String);
                        max_length.set(n.to_string());
                        options.set(String::new());
                    }
                    Some(VariableKind::Select { options: values }) => {
                        var_type.set(VariableType::Select);
                        max_length.set(default_max_length.to_string());
                        options.set(values.join("\n"));
                    }
                    Some(kind) => {
                        var_type.set(kind.var_type());
                        max_length.set(default_max_length.to_string());
                        options.set(String::new());
                    }
                    None => {
                        var_type.set(VariableType::String);
                        max_length.set(default_max_length.to_string());
                        options.set(String::new());
                    }
                }
            }
            || ()
        }
    });

    let on_type_change = {
        let var_type = var_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(value) = VariableType::parse(&select.value()) {
                var_type.set(value);
            }
        })
    };

    let on_max_length_change = {
        let max_length = max_length.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            max_length.set(input.value());
        })
    };

    let on_options_change = {
        let options = options.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            options.set(input.value());
        })
    };

    let on_submit = {
        let var_type = var_type.clone();
        let max_length = max_length.clone();
        let options = options.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_confirm.emit(build_confirmation(*var_type, &max_length, &options));
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let key = props.payload.as_ref().map(|var| var.key.as_str()).unwrap_or_default();

    html! {
        <div class="edit-variable-modal-backdrop" onclick={on_backdrop_click}>
            <div class="edit-variable-modal" onclick={on_modal_click}>
                <div class="edit-variable-modal-content">
                    <h3 class="edit-variable-title">
                        {catalog.translate(MessageKey::EditModalTitle, &[("key", key)])}
                    </h3>

                    <form class="edit-variable-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="variable-type">{catalog.translate(MessageKey::FieldType, &[])}</label>
                            <select id="variable-type" onchange={on_type_change}>
                                {for VariableType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={*t == *var_type}>
                                        {format!("{} {}", t.icon(), t.as_str())}
                                    </option>
                                })}
                            </select>
                        </div>

                        {match *var_type {
                            VariableType::String => html! {
                                <div class="form-group">
                                    <label for="variable-max-length">{catalog.translate(MessageKey::FieldMaxLength, &[])}</label>
                                    <input
                                        id="variable-max-length"
                                        type="number"
                                        min="1"
                                        value={(*max_length).clone()}
                                        onchange={on_max_length_change}
                                    />
                                </div>
                            },
                            VariableType::Select => html! {
                                <div class="form-group">
                                    <label for="variable-options">{catalog.translate(MessageKey::FieldOptions, &[])}</label>
                                    <textarea
                                        id="variable-options"
                                        rows="5"
                                        value={(*options).clone()}
                                        onchange={on_options_change}
                                    />
                                </div>
                            },
                            VariableType::Paragraph | VariableType::Number => html! {},
                        }}

                        <div class="edit-variable-buttons">
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {catalog.translate(MessageKey::Cancel, &[])}
                            </button>
                            <button type="submit" class="btn btn-primary">
                                {catalog.translate(MessageKey::Confirm, &[])}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
