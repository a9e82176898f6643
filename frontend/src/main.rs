use yew::prelude::*;
use web_sys::HtmlInputElement;
use serde::Deserialize;
use shared::{AppMode, ConfigContext, MessageCatalog, PromptVariable, VariableTableConfig};

mod components;
mod hooks;
mod services;

use components::{ToastHost, VariableTable};
use services::i18n::I18nContext;
use services::logging::Logger;

/// Seed configuration the demo host starts from
const SEED_CONFIG: &str = r#"{
    "mode": "completion",
    "dataset_count": 1,
    "table": {"duplicate_check_delay_ms": 800},
    "messages": {"appDebug.variableTitle": "Prompt variables"},
    "variables": [
        {"key": "topic", "name": "Topic", "required": true, "type": "string", "max_length": 48},
        {"key": "tone", "name": "Tone", "required": false, "type": "select", "options": ["formal", "casual"]},
        {"key": "query", "name": "Query", "required": true, "type": "paragraph", "is_context_var": true}
    ]
}"#;

#[derive(Debug, Deserialize)]
struct HostConfig {
    #[serde(flatten)]
    context: ConfigContext,
    #[serde(default)]
    table: VariableTableConfig,
    /// Translation overrides keyed by message id
    #[serde(default)]
    messages: MessageCatalog,
    #[serde(default)]
    variables: Vec<PromptVariable>,
}

fn load_seed() -> HostConfig {
    match serde_json::from_str::<HostConfig>(SEED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            Logger::error_with_component("app", &format!("Failed to parse seed config: {}", e));
            HostConfig {
                context: ConfigContext::default(),
                table: VariableTableConfig::default(),
                messages: MessageCatalog::default(),
                variables: Vec::new(),
            }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let seed = use_memo((), |_| load_seed());
    let variables = use_state(|| seed.variables.clone());
    let context = use_state(|| seed.context.clone());
    let readonly = use_state(|| false);
    let table_config = seed.table.clone();
    let i18n = use_memo((), |_| I18nContext::new(seed.messages.clone()));

    // The table hands back a full replacement list; the host owns it
    let on_variables_change = {
        let variables = variables.clone();
        Callback::from(move |next: Vec<PromptVariable>| {
            Logger::debug_with_component("app", &format!("variables changed, {} entries", next.len()));
            variables.set(next);
        })
    };

    let on_mode_change = {
        let context = context.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mode = if input.checked() { AppMode::Completion } else { AppMode::Chat };
            context.set(ConfigContext { mode, ..(*context).clone() });
        })
    };

    let on_datasets_change = {
        let context = context.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(dataset_count) = input.value().parse::<usize>() {
                context.set(ConfigContext { dataset_count, ..(*context).clone() });
            }
        })
    };

    let on_readonly_change = {
        let readonly = readonly.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            readonly.set(input.checked());
        })
    };

    let preview = serde_json::to_string_pretty(&*variables).unwrap_or_default();

    html! {
        <ContextProvider<ConfigContext> context={(*context).clone()}>
            <ContextProvider<VariableTableConfig> context={table_config.clone()}>
            <ContextProvider<I18nContext> context={(*i18n).clone()}>
                <ToastHost duration_ms={table_config.toast_duration_ms}>
                    <main class="app">
                        <section class="host-settings">
                            <label>
                                <input
                                    type="checkbox"
                                    checked={context.mode == AppMode::Completion}
                                    onchange={on_mode_change}
                                />
                                {"Completion mode"}
                            </label>
                            <label>
                                {"Datasets "}
                                <input
                                    type="number"
                                    min="0"
                                    value={context.dataset_count.to_string()}
                                    onchange={on_datasets_change}
                                />
                            </label>
                            <label>
                                <input type="checkbox" checked={*readonly} onchange={on_readonly_change} />
                                {"Read only"}
                            </label>
                        </section>

                        <VariableTable
                            prompt_variables={(*variables).clone()}
                            readonly={*readonly}
                            on_prompt_variables_change={on_variables_change}
                        />

                        <pre class="variables-preview">{preview}</pre>
                    </main>
                </ToastHost>
            </ContextProvider<I18nContext>>
            </ContextProvider<VariableTableConfig>>
        </ContextProvider<ConfigContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
