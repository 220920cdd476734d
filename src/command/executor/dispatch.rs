//! Synthetic event sequences for clicks, typing and key combos.

use crate::command::keys::format_key_code;
use crate::desktop::{
    Desktop, ElementHandle, EventType, KeyboardEventInit, MouseEventInit, SyntheticEvent,
};
use crate::domain::{ClickKind, KeyModifier};

/// pointerdown, mousedown, pointerup, mouseup
fn press_release(desktop: &mut Desktop, target: ElementHandle, init: MouseEventInit) {
    for event_type in [
        EventType::PointerDown,
        EventType::MouseDown,
        EventType::PointerUp,
        EventType::MouseUp,
    ] {
        desktop.dispatch(SyntheticEvent::mouse(event_type, target, init));
    }
}

/// Dispatch the full event sequence of a click variant at `target`.
///
/// - single: press/release, click
/// - double: press/release, click, press/release, click, dblclick
/// - right:  press/release (button 2), contextmenu
pub(super) fn click_sequence(
    desktop: &mut Desktop,
    target: ElementHandle,
    click: ClickKind,
    (x, y): (i64, i64),
) {
    let init = MouseEventInit {
        button: click.button(),
        client_x: x,
        client_y: y,
    };

    press_release(desktop, target, init);

    if click != ClickKind::Right {
        desktop.dispatch(SyntheticEvent::mouse(EventType::Click, target, init));
    }

    if click == ClickKind::Double {
        press_release(desktop, target, init);
        desktop.dispatch(SyntheticEvent::mouse(EventType::Click, target, init));
        desktop.dispatch(SyntheticEvent::mouse(EventType::DblClick, target, init));
    }

    if click == ClickKind::Right {
        desktop.dispatch(SyntheticEvent::mouse(EventType::ContextMenu, target, init));
    }
}

/// Insert text at the selection of a text-accepting element, then fire
/// `input` and `change`.
pub(super) fn inject_text(desktop: &mut Desktop, target: ElementHandle, text: &str) {
    let Some(element) = desktop.element_mut(target) else {
        return;
    };
    let is_form_field = element.kind.is_form_field();
    element.insert_text(text);

    desktop.dispatch(SyntheticEvent::input(target, text));
    if is_form_field {
        desktop.dispatch(SyntheticEvent::change(target));
    }
}

fn modifier_init(modifier: KeyModifier) -> KeyboardEventInit {
    KeyboardEventInit {
        key: modifier.key().to_string(),
        code: modifier.code().to_string(),
        ctrl_key: modifier == KeyModifier::Ctrl,
        shift_key: modifier == KeyModifier::Shift,
        alt_key: modifier == KeyModifier::Alt,
        repeat: false,
    }
}

fn key_init(key: &str, modifiers: &[KeyModifier]) -> KeyboardEventInit {
    KeyboardEventInit {
        key: key.to_string(),
        code: format_key_code(key),
        ctrl_key: modifiers.contains(&KeyModifier::Ctrl),
        shift_key: modifiers.contains(&KeyModifier::Shift),
        alt_key: modifiers.contains(&KeyModifier::Alt),
        repeat: false,
    }
}

/// Modifiers down in order, key down/up, modifiers up in reverse order
pub(super) fn key_combo(
    desktop: &mut Desktop,
    target: ElementHandle,
    key: &str,
    modifiers: &[KeyModifier],
) {
    for modifier in modifiers {
        desktop.dispatch(SyntheticEvent::keyboard(
            EventType::KeyDown,
            target,
            modifier_init(*modifier),
        ));
    }

    let init = key_init(key, modifiers);
    desktop.dispatch(SyntheticEvent::keyboard(EventType::KeyDown, target, init.clone()));
    desktop.dispatch(SyntheticEvent::keyboard(EventType::KeyUp, target, init));

    for modifier in modifiers.iter().rev() {
        desktop.dispatch(SyntheticEvent::keyboard(
            EventType::KeyUp,
            target,
            modifier_init(*modifier),
        ));
    }
}
