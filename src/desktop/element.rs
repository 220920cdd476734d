use serde::Serialize;

/// Index of an element inside a [`super::Desktop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementHandle(pub(super) usize);

impl ElementHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Axis-aligned rectangle in workspace coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// HTML-like element kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ElementKind {
    Div,
    Span,
    Label,
    Img,
    Button,
    /// `<input type="...">`
    Input { input_type: String },
    TextArea,
}

/// Input types that do not accept typed text
const NON_TEXT_INPUT_TYPES: &[&str] = &[
    "button",
    "checkbox",
    "color",
    "date",
    "datetime-local",
    "file",
    "image",
    "month",
    "radio",
    "range",
    "reset",
    "submit",
    "time",
    "week",
];

impl ElementKind {
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Div => "div",
            ElementKind::Span => "span",
            ElementKind::Label => "label",
            ElementKind::Img => "img",
            ElementKind::Button => "button",
            ElementKind::Input { .. } => "input",
            ElementKind::TextArea => "textarea",
        }
    }

    /// Whether a form control of this kind holds a value (input/textarea)
    pub fn is_form_field(&self) -> bool {
        matches!(self, ElementKind::Input { .. } | ElementKind::TextArea)
    }

    /// Focusable without an explicit tab index
    fn natively_focusable(&self) -> bool {
        matches!(
            self,
            ElementKind::Button | ElementKind::Input { .. } | ElementKind::TextArea
        )
    }
}

/// A node of the simulated desktop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    pub bounds: Rect,
    /// HTML `id`
    pub id: Option<String>,
    pub aria_label: Option<String>,
    /// Id of the element whose text labels this one
    pub aria_labelledby: Option<String>,
    pub placeholder: Option<String>,
    /// For `<label for="...">`
    pub label_for: Option<String>,
    pub text_content: String,
    /// Value of form fields
    pub value: String,
    /// Selection as character offsets into `value` (or `text_content` when editable)
    pub selection: Option<(usize, usize)>,
    pub content_editable: bool,
    pub focusable: bool,
    /// The virtual cursor glyph layer; never a hit-test target
    pub cursor_overlay: bool,
}

impl Element {
    pub fn new(kind: ElementKind, bounds: Rect) -> Self {
        let focusable = kind.natively_focusable();
        Self {
            kind,
            bounds,
            id: None,
            aria_label: None,
            aria_labelledby: None,
            placeholder: None,
            label_for: None,
            text_content: String::new(),
            value: String::new(),
            selection: None,
            content_editable: false,
            focusable,
            cursor_overlay: false,
        }
    }

    /// `<input type="...">`
    pub fn input(input_type: &str, bounds: Rect) -> Self {
        Self::new(
            ElementKind::Input {
                input_type: input_type.to_lowercase(),
            },
            bounds,
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.aria_labelledby = Some(id.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_label_for(mut self, id: impl Into<String>) -> Self {
        self.label_for = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = text.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// `contenteditable`; also makes the element focusable
    pub fn editable(mut self) -> Self {
        self.content_editable = true;
        self.focusable = true;
        self
    }

    /// Equivalent of `tabindex="0"`
    pub fn with_tab_index(mut self) -> Self {
        self.focusable = true;
        self
    }

    pub fn as_cursor_overlay(mut self) -> Self {
        self.cursor_overlay = true;
        self.focusable = false;
        self
    }

    /// Whether typed text can be inserted (textarea, text-like input, contenteditable)
    pub fn accepts_text(&self) -> bool {
        match &self.kind {
            ElementKind::TextArea => true,
            ElementKind::Input { input_type } => {
                let input_type = if input_type.is_empty() {
                    "text"
                } else {
                    input_type.as_str()
                };
                !NON_TEXT_INPUT_TYPES.contains(&input_type)
            }
            _ => self.content_editable,
        }
    }

    /// Insert `text` over the current selection (caret at the end when none).
    ///
    /// Returns the new caret offset.
    pub fn insert_text(&mut self, text: &str) -> usize {
        let buffer = if self.kind.is_form_field() {
            &mut self.value
        } else {
            &mut self.text_content
        };

        let len = buffer.chars().count();
        let (start, end) = self.selection.unwrap_or((len, len));
        let start = start.min(len);
        let end = end.clamp(start, len);

        let before: String = buffer.chars().take(start).collect();
        let after: String = buffer.chars().skip(end).collect();
        *buffer = format!("{before}{text}{after}");

        let caret = start + text.chars().count();
        self.selection = Some((caret, caret));
        caret
    }
}
