//! Translates Dioxus keyboard events to focus trap keys.

use dioxus::prelude::*;

use crate::drawer::TrapKey;

/// Translate a Dioxus keyboard event to a [`TrapKey`].
#[must_use]
pub fn translate_trap_key(evt: &KeyboardEvent) -> TrapKey {
    let key = evt.key();
    log::trace!("translate_trap_key: key={key:?}, code={}", evt.code());
    trap_key(&key, evt.modifiers().shift())
}

/// Map a logical key plus the Shift state to a [`TrapKey`].
#[must_use]
pub fn trap_key(key: &Key, shift: bool) -> TrapKey {
    match key {
        Key::Tab => TrapKey::Tab { shift },
        Key::Escape => TrapKey::Escape,
        _ => TrapKey::Other,
    }
}
