//! UI language context.

use contracts::shared::locale::Locale;
use leptos::prelude::*;
use web_sys::window;

/// Browser language (`navigator.language`), English when unavailable.
fn detect_locale() -> Locale {
    window()
        .and_then(|w| w.navigator().language())
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

pub fn provide_locale() {
    let locale = RwSignal::new(detect_locale());
    log::debug!("UI locale: {}", locale.get_untracked().as_str());
    provide_context(locale);
}

/// Current locale; English outside of `provide_locale`.
pub fn use_locale() -> Signal<Locale> {
    match use_context::<RwSignal<Locale>>() {
        Some(locale) => locale.into(),
        None => Signal::derive(Locale::default),
    }
}

/// Setter for the current locale. Resolve it in the component body, call it from handlers.
pub fn use_set_locale() -> impl Fn(Locale) + Copy + 'static {
    let signal = use_context::<RwSignal<Locale>>();
    move |locale| match signal {
        Some(signal) => signal.set(locale),
        None => log::warn!("Locale context missing, {} ignored", locale.as_str()),
    }
}
