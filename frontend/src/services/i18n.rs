use std::rc::Rc;

use shared::{EnglishCatalog, MessageKey, Translator};

/// Translator shared through a `ContextProvider`.
///
/// Components read it with `use_context::<I18nContext>().unwrap_or_default()`,
/// which falls back to English when no provider is mounted.
#[derive(Clone)]
pub struct I18nContext {
    translator: Rc<dyn Translator>,
}

impl I18nContext {
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self {
            translator: Rc::new(translator),
        }
    }
}

impl Translator for I18nContext {
    fn template(&self, key: MessageKey) -> &str {
        self.translator.template(key)
    }
}

impl Default for I18nContext {
    fn default() -> Self {
        Self::new(EnglishCatalog)
    }
}

impl PartialEq for I18nContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.translator, &other.translator)
    }
}
