//! An optional process-wide [`Localizer`].
//!
//! Most code should pass a `Localizer` around explicitly. This exists for
//! call sites that cannot, such as `Display` impls deep inside a program.

use crate::localizer::Localizer;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Localizer> = OnceLock::new();

/// Installs the process-wide localizer.
///
/// Only the first call succeeds; later calls hand their localizer back.
pub fn set_global(localizer: Localizer) -> Result<(), Localizer> {
    GLOBAL
        .set(localizer)
        .inspect_err(|_| tracing::warn!("Global localizer already initialized."))
}

pub fn global() -> Option<&'static Localizer> {
    GLOBAL.get()
}

/// Translates `key` with the process-wide localizer.
///
/// Returns `key` unchanged if none has been installed.
pub fn localize(key: &str) -> String {
    match GLOBAL.get() {
        Some(localizer) => localizer.t(key),
        None => {
            tracing::warn!("Global localizer not set; '{}' left untranslated.", key);
            key.to_string()
        },
    }
}
