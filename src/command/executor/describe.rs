//! Human readable descriptions of desktop elements.

use crate::desktop::{Desktop, ElementHandle};

/// Truncate to `max_len` characters, ending with `…` when shortened
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Describe an element for execution messages.
///
/// Preference order: `aria-label`, text of the `aria-labelledby` element,
/// placeholder, `<label for>` text, `#id`, collapsed text content, tag name.
pub fn describe_element(desktop: &Desktop, handle: ElementHandle) -> String {
    let Some(element) = desktop.element(handle) else {
        return "unknown element".to_string();
    };

    if let Some(label) = element.aria_label.as_deref().filter(|l| !l.is_empty()) {
        return label.to_string();
    }

    if let Some(labelled_by) = element.aria_labelledby.as_deref() {
        let text = desktop
            .find_by_id(labelled_by)
            .and_then(|h| desktop.element(h))
            .map(|e| e.text_content.trim())
            .filter(|t| !t.is_empty());
        if let Some(text) = text {
            return text.to_string();
        }
    }

    if element.kind.is_form_field() {
        if let Some(placeholder) = element.placeholder.as_deref().filter(|p| !p.is_empty()) {
            return placeholder.to_string();
        }
        if let Some(id) = element.id.as_deref() {
            let label_text = desktop
                .label_for(id)
                .map(|l| l.text_content.trim())
                .filter(|t| !t.is_empty());
            if let Some(text) = label_text {
                return text.to_string();
            }
        }
    }

    if let Some(id) = element.id.as_deref().filter(|id| !id.is_empty()) {
        return format!("#{id}");
    }

    let collapsed = element
        .text_content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if !collapsed.is_empty() {
        return truncate(&collapsed, 60);
    }

    element.kind.tag_name().to_string()
}
