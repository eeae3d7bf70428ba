use std::borrow::Cow;

/// Translates the user-facing texts emitted by the page state machines.
pub trait Translator: Send + Sync {
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Returns every text unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}
