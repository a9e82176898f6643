use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use shared::variable_list::{add_variable, apply_edit, fill_name_if_empty, find_by_key, rename_key, update_field};
use shared::{
    max_var_name_length, ConfigContext, DuplicateCheck, EditConfirmation, FieldUpdate, MessageKey,
    Notification, PromptVariable, Removal, TableUiState, Translator, VariableTableConfig,
};

use crate::components::confirm_modal::ConfirmModal;
use crate::components::edit_variable_modal::EditVariableModal;
use crate::components::toast::ToastContext;
use crate::hooks::use_duplicate_check;
use crate::services::i18n::I18nContext;
use crate::services::logging::Logger;

const COMPONENT: &str = "variable-table";

#[derive(Properties, PartialEq)]
pub struct VariableTableProps {
    pub prompt_variables: Vec<PromptVariable>,
    #[prop_or_default]
    pub readonly: bool,
    /// Receives the full replacement list after every edit
    #[prop_or_default]
    pub on_prompt_variables_change: Option<Callback<Vec<PromptVariable>>>,
}

#[function_component(VariableTable)]
pub fn variable_table(props: &VariableTableProps) -> Html {
    let catalog = use_context::<I18nContext>().unwrap_or_default();
    let ctx = use_context::<ConfigContext>().unwrap_or_default();
    let config = use_context::<VariableTableConfig>().unwrap_or_default();
    let toast = use_context::<ToastContext>();
    let ui = use_state(TableUiState::default);
    let vars = Rc::new(props.prompt_variables.clone());
    let readonly = props.readonly;

    let notify = Callback::from(move |notification: Notification| match &toast {
        Some(toast) => toast.notify(notification),
        None => Logger::warn_with_component(COMPONENT, &notification.message),
    });

    let duplicate_check = use_duplicate_check(config.duplicate_check_delay_ms, catalog.clone(), notify.clone());

    let emit = {
        let on_change = props.on_prompt_variables_change.clone();
        Callback::from(move |next: Vec<PromptVariable>| {
            if let Some(on_change) = &on_change {
                on_change.emit(next);
            }
        })
    };

    let on_add = {
        let vars = vars.clone();
        let emit = emit.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::debug_with_component(COMPONENT, "adding variable");
            emit.emit(add_variable(&vars));
        })
    };

    let on_key_input = |index: usize| {
        let vars = vars.clone();
        let emit = emit.clone();
        let notify = notify.clone();
        let duplicate_check = duplicate_check.clone();
        let catalog = catalog.clone();
        let max_key_length = config.max_key_length;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let new_key = input.value();
            duplicate_check.cancel.emit(());

            match rename_key(&vars, index, &new_key, max_key_length) {
                Ok(next) => {
                    duplicate_check.schedule.emit(DuplicateCheck::new(&vars, index, &new_key));
                    emit.emit(next);
                }
                Err(err) => {
                    // The list is unchanged, so no re-render will restore the input
                    if let Some(var) = vars.get(index) {
                        input.set_value(&var.key);
                    }
                    notify.emit(err.notification(&catalog));
                }
            }
        })
    };

    let on_key_blur = |index: usize| {
        let vars = vars.clone();
        let emit = emit.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let next = fill_name_if_empty(&vars, index, &input.value());
            if next != *vars {
                emit.emit(next);
            }
        })
    };

    let on_name_input = |key: String| {
        let vars = vars.clone();
        let emit = emit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            emit.emit(update_field(&vars, &key, FieldUpdate::Name(input.value())));
        })
    };

    let on_optional_change = |key: String| {
        let vars = vars.clone();
        let emit = emit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            emit.emit(update_field(&vars, &key, FieldUpdate::Required(!input.checked())));
        })
    };

    let on_config = |key: String| {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = (*ui).clone();
            state.open_edit(&key);
            ui.set(state);
        })
    };

    let on_remove = |index: usize| {
        let vars = vars.clone();
        let emit = emit.clone();
        let ui = ui.clone();
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = (*ui).clone();
            match state.request_remove(&vars, index, &ctx) {
                Removal::Immediate(next) => emit.emit(next),
                Removal::NeedsConfirmation { .. } => ui.set(state),
            }
        })
    };

    let on_edit_confirm = {
        let vars = vars.clone();
        let emit = emit.clone();
        let ui = ui.clone();
        let default_max_length = config.default_max_length;
        Callback::from(move |confirmation: EditConfirmation| {
            let mut state = (*ui).clone();
            match state.current_key.as_deref() {
                Some(key) => emit.emit(apply_edit(&vars, key, &confirmation, default_max_length)),
                None => Logger::error_with_component(COMPONENT, "edit confirmed without a current variable"),
            }
            state.close_edit();
            ui.set(state);
        })
    };

    let on_edit_close = {
        let ui = ui.clone();
        Callback::from(move |_: ()| {
            let mut state = (*ui).clone();
            state.close_edit();
            ui.set(state);
        })
    };

    let on_delete_confirm = {
        let vars = vars.clone();
        let emit = emit.clone();
        let ui = ui.clone();
        Callback::from(move |_: ()| {
            let mut state = (*ui).clone();
            if let Some(next) = state.confirm_remove(&vars) {
                Logger::info_with_component(COMPONENT, "context variable removed after confirmation");
                emit.emit(next);
            }
            ui.set(state);
        })
    };

    let on_delete_cancel = {
        let ui = ui.clone();
        Callback::from(move |_: ()| {
            let mut state = (*ui).clone();
            state.cancel_remove();
            ui.set(state);
        })
    };

    let current_item = ui
        .current_key
        .as_deref()
        .and_then(|key| find_by_key(&vars, key))
        .cloned();

    let delete_title = catalog.translate(
        MessageKey::DeleteContextVarTitle,
        &[("varName", ui.pending_remove_name(&vars).unwrap_or_default())],
    );

    html! {
        <section class="variable-panel">
            <div class="variable-panel-header">
                <div class="variable-panel-title">
                    <span class="variable-panel-icon">{"{x}"}</span>
                    <span>{catalog.translate(MessageKey::VariableTitle, &[])}</span>
                    if !readonly {
                        <span class="help-tip" title={catalog.translate(MessageKey::VariableTip, &[])}>{"?"}</span>
                    }
                </div>
                if !readonly {
                    <button type="button" class="btn btn-add" onclick={on_add}>{"+ Add"}</button>
                }
            </div>

            if vars.is_empty() {
                <div class="variable-empty">{catalog.translate(MessageKey::NotSetVar, &[])}</div>
            } else {
                <div class="table-container">
                    <table class="variable-table">
                        <thead>
                            <tr>
                                <th>{catalog.translate(MessageKey::TableKey, &[])}</th>
                                <th>{catalog.translate(MessageKey::TableName, &[])}</th>
                                if !readonly {
                                    <th>{catalog.translate(MessageKey::TableOptional, &[])}</th>
                                    <th>{catalog.translate(MessageKey::TableAction, &[])}</th>
                                }
                            </tr>
                        </thead>
                        <tbody>
                            {for vars.iter().enumerate().map(|(index, var)| {
                                let max_len = max_var_name_length(&var.name, config.max_key_length).to_string();
                                html! {
                                    <tr key={index}>
                                        <td class="variable-key">
                                            <span class="type-icon" title={var.var_type().as_str()}>{var.var_type().icon()}</span>
                                            if readonly {
                                                <span class="static-value">{&var.key}</span>
                                            } else {
                                                <input
                                                    type="text"
                                                    placeholder="key"
                                                    value={var.key.clone()}
                                                    maxlength={max_len.clone()}
                                                    oninput={on_key_input(index)}
                                                    onblur={on_key_blur(index)}
                                                />
                                            }
                                        </td>
                                        <td class="variable-name">
                                            if readonly {
                                                <span class="static-value">{&var.name}</span>
                                            } else {
                                                <input
                                                    type="text"
                                                    placeholder={var.key.clone()}
                                                    value={var.name.clone()}
                                                    maxlength={max_len}
                                                    oninput={on_name_input(var.key.clone())}
                                                />
                                            }
                                        </td>
                                        if !readonly {
                                            <td class="variable-optional">
                                                <input
                                                    type="checkbox"
                                                    class="switch"
                                                    checked={!var.required}
                                                    onchange={on_optional_change(var.key.clone())}
                                                />
                                            </td>
                                            <td class="variable-actions">
                                                <button type="button" class="icon-btn" title="Configure" onclick={on_config(var.key.clone())}>
                                                    {"⚙"}
                                                </button>
                                                <button type="button" class="icon-btn" title="Delete" onclick={on_remove(index)}>
                                                    {"🗑"}
                                                </button>
                                            </td>
                                        }
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <EditVariableModal
                is_open={ui.show_edit_modal}
                payload={current_item}
                default_max_length={config.default_max_length}
                on_confirm={on_edit_confirm}
                on_close={on_edit_close}
            />

            <ConfirmModal
                is_open={ui.show_delete_confirm}
                title={delete_title}
                description={catalog.translate(MessageKey::DeleteContextVarTip, &[])}
                confirm_label={catalog.translate(MessageKey::Confirm, &[])}
                cancel_label={catalog.translate(MessageKey::Cancel, &[])}
                on_confirm={on_delete_confirm}
                on_cancel={on_delete_cancel}
            />
        </section>
    }
}
