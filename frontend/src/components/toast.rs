use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::Notification;
use yew::prelude::*;

/// Handle for pushing notifications to the nearest [`ToastHost`]
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    notify: Callback<Notification>,
}

impl ToastContext {
    pub fn notify(&self, notification: Notification) {
        self.notify.emit(notification);
    }
}

#[derive(Default, PartialEq)]
struct ToastList {
    items: Vec<(u64, Notification)>,
}

enum ToastAction {
    Push(u64, Notification),
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(id, notification) => items.push((id, notification)),
            ToastAction::Dismiss(id) => items.retain(|(item_id, _)| *item_id != id),
        }
        Rc::new(ToastList { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or(3000)]
    pub duration_ms: u32,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u64);

    let context = {
        let dispatcher = toasts.dispatcher();
        let duration_ms = props.duration_ms;
        ToastContext {
            notify: Callback::from(move |notification: Notification| {
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    *next_id += 1;
                    *next_id
                };
                dispatcher.dispatch(ToastAction::Push(id, notification));

                let dispatcher = dispatcher.clone();
                Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }),
        }
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast-stack">
                {for toasts.items.iter().map(|(id, notification)| {
                    html! {
                        <div key={*id} class={notification.kind.css_class()}>
                            {&notification.message}
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
