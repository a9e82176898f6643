use gloo::timers::callback::Timeout;
use shared::{DuplicateCheck, Notification, PendingCheck};
use yew::prelude::*;

use crate::services::i18n::I18nContext;

/// Handle returned by [`use_duplicate_check`]
#[derive(Clone, PartialEq)]
pub struct DuplicateCheckHandle {
    /// Replace any pending check with this one and restart the delay
    pub schedule: Callback<DuplicateCheck>,
    /// Drop the pending check without running it
    pub cancel: Callback<()>,
}

/// Debounced duplicate-key warning owned by the calling component.
///
/// At most one check is outstanding. Scheduling a new one or cancelling
/// clears the running timer, and unmounting the component does the same, so
/// `on_notify` is never called for a superseded rename or a dead component.
/// Warnings are worded by `translator`.
#[hook]
pub fn use_duplicate_check(
    delay_ms: u32,
    translator: I18nContext,
    on_notify: Callback<Notification>,
) -> DuplicateCheckHandle {
    let slot = use_mut_ref(PendingCheck::default);
    let timer = use_mut_ref(|| Option::<Timeout>::None);

    {
        let slot = slot.clone();
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
                slot.borrow_mut().cancel();
                crate::services::logging::Logger::debug_with_component(
                    "duplicate-check-hook",
                    "pending duplicate check dropped on unmount",
                );
            }
        });
    }

    let schedule = {
        let slot = slot.clone();
        let timer = timer.clone();
        Callback::from(move |check: DuplicateCheck| {
            let ticket = slot.borrow_mut().schedule(check);

            let slot = slot.clone();
            let on_notify = on_notify.clone();
            let translator = translator.clone();
            let timeout = Timeout::new(delay_ms, move || {
                let due = slot.borrow_mut().take_if_current(ticket);
                if let Some(notification) = due.and_then(|check| check.notification(&translator)) {
                    on_notify.emit(notification);
                }
            });

            // Dropping the previous timeout clears it
            *timer.borrow_mut() = Some(timeout);
        })
    };

    let cancel = Callback::from(move |_: ()| {
        timer.borrow_mut().take();
        slot.borrow_mut().cancel();
    });

    DuplicateCheckHandle { schedule, cancel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo::timers::future::TimeoutFuture;
    use shared::{NotificationKind, PromptVariable};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const DELAY_MS: u32 = 50;

    #[derive(Properties)]
    struct HarnessProps {
        received: Rc<RefCell<Vec<Notification>>>,
        /// (row index, new key) pairs scheduled back to back on mount
        renames: Vec<(usize, &'static str)>,
    }

    impl PartialEq for HarnessProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.received, &other.received) && self.renames == other.renames
        }
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let on_notify = {
            let received = props.received.clone();
            Callback::from(move |notification: Notification| received.borrow_mut().push(notification))
        };
        let handle = use_duplicate_check(DELAY_MS, I18nContext::default(), on_notify);

        let renames = props.renames.clone();
        use_effect_with((), move |_| {
            let snapshot = vec![
                PromptVariable::new_default("topic"),
                PromptVariable::new_default("tone"),
            ];
            for (index, key) in renames {
                handle.schedule.emit(DuplicateCheck::new(&snapshot, index, key));
            }
            || ()
        });

        html! {}
    }

    fn mount(renames: Vec<(usize, &'static str)>) -> (Rc<RefCell<Vec<Notification>>>, yew::AppHandle<Harness>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let root = gloo::utils::document().create_element("div").unwrap();
        let app = yew::Renderer::<Harness>::with_root_and_props(
            root,
            HarnessProps {
                received: received.clone(),
                renames,
            },
        )
        .render();
        (received, app)
    }

    #[wasm_bindgen_test]
    async fn test_superseded_check_notifies_once() {
        let (received, _app) = mount(vec![(0, "tone"), (1, "topic")]);

        TimeoutFuture::new(DELAY_MS * 4).await;

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, NotificationKind::Warning);
        assert_eq!(received[0].message, "topic already exists");
    }

    #[wasm_bindgen_test]
    async fn test_unmount_drops_pending_check() {
        let (received, app) = mount(vec![(0, "tone")]);

        TimeoutFuture::new(1).await;
        app.destroy();
        TimeoutFuture::new(DELAY_MS * 4).await;

        assert!(received.borrow().is_empty());
    }
}
