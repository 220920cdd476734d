//! Default Win95-style shell layout

use super::{Desktop, Element, ElementKind, Rect};
use crate::config::DesktopSettings;

const TASKBAR_HEIGHT: i64 = 32;

impl Desktop {
    /// Build the default shell: desktop icons, a Notepad window, a Run dialog,
    /// a sticky note, the taskbar and the cursor overlay on top.
    pub fn win95(settings: &DesktopSettings) -> Self {
        let width = i64::from(settings.width);
        let height = i64::from(settings.height);
        let mut desktop = Desktop::new(settings.width, settings.height);

        desktop.add(
            Element::new(ElementKind::Div, Rect::new(16, 16, 72, 72))
                .with_id("icon-my-computer")
                .with_text("My Computer")
                .with_tab_index(),
        );
        desktop.add(
            Element::new(ElementKind::Div, Rect::new(16, 104, 72, 72))
                .with_id("icon-recycle-bin")
                .with_text("Recycle Bin")
                .with_tab_index(),
        );

        // Notepad
        desktop.add(
            Element::new(ElementKind::Div, Rect::new(140, 40, 420, 300)).with_id("notepad-window"),
        );
        desktop.add(
            Element::new(ElementKind::Span, Rect::new(140, 40, 420, 22))
                .with_id("notepad-title")
                .with_text("Untitled - Notepad"),
        );
        desktop.add(
            Element::new(ElementKind::TextArea, Rect::new(146, 68, 408, 266))
                .with_id("notepad-text")
                .with_aria_labelledby("notepad-title"),
        );

        // Run dialog
        desktop.add(
            Element::new(ElementKind::Div, Rect::new(600, 60, 320, 150))
                .with_id("run-dialog")
                .with_text("Run"),
        );
        desktop.add(
            Element::new(ElementKind::Label, Rect::new(612, 110, 48, 20))
                .with_label_for("run-input")
                .with_text("Open:"),
        );
        desktop.add(Element::input("text", Rect::new(664, 108, 240, 24)).with_id("run-input"));
        desktop.add(
            Element::input("checkbox", Rect::new(612, 144, 16, 16))
                .with_id("run-as-admin")
                .with_aria_label("Run as administrator"),
        );
        desktop.add(
            Element::new(ElementKind::Button, Rect::new(760, 172, 64, 24))
                .with_id("run-ok")
                .with_text("OK"),
        );
        desktop.add(
            Element::new(ElementKind::Button, Rect::new(836, 172, 64, 24)).with_text("Cancel"),
        );

        // Sticky note and file search
        desktop.add(
            Element::new(ElementKind::Div, Rect::new(600, 240, 200, 120))
                .with_aria_label("Sticky note")
                .editable(),
        );
        desktop.add(
            Element::input("search", Rect::new(600, 380, 200, 24)).with_placeholder("Search files"),
        );

        // Taskbar
        desktop.add(
            Element::new(
                ElementKind::Div,
                Rect::new(0, height - TASKBAR_HEIGHT, width, TASKBAR_HEIGHT),
            )
            .with_id("taskbar"),
        );
        desktop.add(
            Element::new(ElementKind::Button, Rect::new(4, height - 28, 64, 24))
                .with_id("start-button")
                .with_text("Start"),
        );
        desktop.add(
            Element::new(ElementKind::Span, Rect::new(width - 80, height - 28, 76, 24))
                .with_id("taskbar-tray"),
        );

        // Cursor glyph layer spans the workspace and sits above everything
        desktop.add(
            Element::new(ElementKind::Img, Rect::new(0, 0, width, height))
                .with_id("virtual-cursor")
                .as_cursor_overlay(),
        );

        desktop
    }
}
