use serde::Serialize;

use super::ElementHandle;

/// DOM event types the executor synthesizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    PointerDown,
    MouseDown,
    PointerUp,
    MouseUp,
    Click,
    DblClick,
    ContextMenu,
    KeyDown,
    KeyUp,
    Input,
    Change,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::PointerDown => "pointerdown",
            EventType::MouseDown => "mousedown",
            EventType::PointerUp => "pointerup",
            EventType::MouseUp => "mouseup",
            EventType::Click => "click",
            EventType::DblClick => "dblclick",
            EventType::ContextMenu => "contextmenu",
            EventType::KeyDown => "keydown",
            EventType::KeyUp => "keyup",
            EventType::Input => "input",
            EventType::Change => "change",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MouseEventInit {
    pub button: u8,
    pub client_x: i64,
    pub client_y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardEventInit {
    pub key: String,
    pub code: String,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    pub repeat: bool,
}

/// Event-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventDetail {
    Mouse(MouseEventInit),
    Keyboard(KeyboardEventInit),
    /// `InputEvent` with `inputType` and inserted `data`
    Input { input_type: String, data: String },
    Plain,
}

/// An event dispatched at an element of the simulated desktop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticEvent {
    pub event_type: EventType,
    pub target: ElementHandle,
    pub detail: EventDetail,
    pub bubbles: bool,
    pub cancelable: bool,
}

impl SyntheticEvent {
    pub fn mouse(event_type: EventType, target: ElementHandle, init: MouseEventInit) -> Self {
        Self {
            event_type,
            target,
            detail: EventDetail::Mouse(init),
            bubbles: true,
            cancelable: true,
        }
    }

    pub fn keyboard(event_type: EventType, target: ElementHandle, init: KeyboardEventInit) -> Self {
        Self {
            event_type,
            target,
            detail: EventDetail::Keyboard(init),
            bubbles: true,
            cancelable: true,
        }
    }

    pub fn input(target: ElementHandle, data: &str) -> Self {
        Self {
            event_type: EventType::Input,
            target,
            detail: EventDetail::Input {
                input_type: "insertText".to_string(),
                data: data.to_string(),
            },
            bubbles: true,
            cancelable: false,
        }
    }

    pub fn change(target: ElementHandle) -> Self {
        Self {
            event_type: EventType::Change,
            target,
            detail: EventDetail::Plain,
            bubbles: true,
            cancelable: false,
        }
    }
}

impl std::fmt::Display for SyntheticEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            EventDetail::Mouse(m) => write!(
                f,
                "{} button={} at ({}, {})",
                self.event_type, m.button, m.client_x, m.client_y
            ),
            EventDetail::Keyboard(k) => write!(f, "{} key={:?} code={}", self.event_type, k.key, k.code),
            EventDetail::Input { data, .. } => write!(f, "{} data={:?}", self.event_type, data),
            EventDetail::Plain => write!(f, "{}", self.event_type),
        }
    }
}
