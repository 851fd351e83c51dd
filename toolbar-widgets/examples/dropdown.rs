//! Scripted zoom dropdown.
//!
//! Drives a dropdown through a few interactions without a real window and
//! prints what the trigger shows after each step. Keys, the outside press and
//! the focus loss are fed in as raw terminal events. Debug logs go to
//! `dropdown.log`.
//!
//! Run with: cargo run -p toolbar-widgets --example dropdown

use std::fs::File;
use std::sync::{Arc, Mutex};

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as TermButton, MouseEvent,
    MouseEventKind,
};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use toolbar_widgets::prelude::*;
use viewdom::{find_element, translate_terminal_event, TaskQueue};

// ============================================================================
// Host
// ============================================================================

struct Host {
    window: Window,
    focus: FocusState,
    tasks: TaskQueue,
    layout: LayoutResult,
    translations: Translations,
    root: Element,
}

impl Host {
    fn render(&mut self, dropdown: &Dropdown, props: &DropdownProps<&'static str>) {
        self.root = dropdown.build(props, &self.translations);
        // Stand-in for a layout pass: trigger near the bottom of a 600px window.
        self.layout
            .insert(dropdown.trigger_id(), Rect::new(20, 540, 120, 28));
        self.layout
            .insert(dropdown.overlay_id(), Rect::new(20, 568, 120, 140));
        self.tasks.run_pending(&self.root, &mut self.focus);
    }

    fn send(
        &mut self,
        dropdown: &Dropdown,
        props: &DropdownProps<&'static str>,
        event: Event,
    ) -> EventResult {
        let mut cx = WidgetCx::new(
            &self.root,
            &self.layout,
            &self.window,
            &mut self.focus,
            &mut self.tasks,
            &self.translations,
        );
        let result = dropdown.handle_event(&event, props, &mut cx);
        self.render(dropdown, props);
        result
    }

    /// Translate a terminal event against the current tree and send it.
    fn send_raw(
        &mut self,
        dropdown: &Dropdown,
        props: &DropdownProps<&'static str>,
        raw: TermEvent,
    ) -> Option<EventResult> {
        let event = translate_terminal_event(&raw, &self.root, &self.layout, &self.focus)?;
        Some(self.send(dropdown, props, event))
    }

    fn trigger_text(&self, dropdown: &Dropdown) -> String {
        find_element(&self.root, &dropdown.trigger_id())
            .and_then(Element::text_content)
            .unwrap_or_default()
            .to_string()
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    if let Ok(log_file) = File::create("dropdown.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let translations = match Translations::from_json(
        r#"{
            "option": { "zoom": {
                "fitWidth": "Fit Width",
                "fitPage": "Fit Page",
                "dropdownLabel": "Zoom"
            } },
            "message": { "noResults": "No results" }
        }"#,
    ) {
        Ok(translations) => translations,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let selection = Arc::new(Mutex::new(String::from("fitWidth")));
    let window = Window::new(800, 600);
    let dropdown = Dropdown::new();
    dropdown.mount(&window);

    let mut host = Host {
        window: window.clone(),
        focus: FocusState::new(),
        tasks: TaskQueue::new(),
        layout: LayoutResult::new(),
        translations,
        root: Element::div(),
    };

    let props = |selected: &str| {
        let selection = selection.clone();
        DropdownProps::new(vec!["fitWidth", "fitPage", "50", "100", "200"])
            .translation_prefix("option.zoom")
            .current_selection_key(selected)
            .has_input(true)
            .max_height(140)
            .custom_data_validator(|text| text.chars().all(|c| c.is_ascii_digit()))
            .on_click_item(move |key, index| {
                println!("  picked {key:?} (index {index:?})");
                if let Ok(mut current) = selection.lock() {
                    *current = key.to_string();
                }
            })
    };
    let current = || selection.lock().map(|s| s.clone()).unwrap_or_default();

    let mut p = props(&current());
    host.render(&dropdown, &p);
    println!("trigger: {}", host.trigger_text(&dropdown));

    println!("open");
    host.send(&dropdown, &p, Event::pointer_down(Some(&dropdown.trigger_id())));
    println!("  placement: {:?}", dropdown.placement());
    println!("  state: {:?}", dropdown.state(&host.focus));

    println!("type \"pa\"");
    host.send(
        &dropdown,
        &p,
        Event::Input {
            target: dropdown.input_id(),
            value: "pa".into(),
        },
    );
    println!("  visible: {:?}", dropdown.rendered_keys());

    println!("arrow down + enter");
    for code in [KeyCode::Down, KeyCode::Enter] {
        let raw = TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        host.send_raw(&dropdown, &p, raw);
    }
    p = props(&current());
    host.render(&dropdown, &p);
    println!("trigger: {}", host.trigger_text(&dropdown));

    println!("free text \"150\"");
    host.send(&dropdown, &p, Event::pointer_down(Some(&dropdown.trigger_id())));
    host.send(
        &dropdown,
        &p,
        Event::Input {
            target: dropdown.input_id(),
            value: "150".into(),
        },
    );
    let enter = TermEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    host.send_raw(&dropdown, &p, enter);
    p = props(&current());
    host.render(&dropdown, &p);
    println!("trigger: {}", host.trigger_text(&dropdown));

    println!("press outside at (700, 20)");
    host.send(&dropdown, &p, Event::pointer_down(Some(&dropdown.trigger_id())));
    let press = TermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(TermButton::Left),
        column: 700,
        row: 20,
        modifiers: KeyModifiers::NONE,
    });
    host.send_raw(&dropdown, &p, press);
    println!("  open: {}", dropdown.is_open());

    println!("terminal focus lost while open");
    host.send(&dropdown, &p, Event::pointer_down(Some(&dropdown.trigger_id())));
    println!("  focus still valid: {}", host.focus.is_valid(&host.root));
    host.send_raw(&dropdown, &p, TermEvent::FocusLost);
    println!("  open: {}", dropdown.is_open());

    println!("window blur while open");
    host.send(&dropdown, &p, Event::pointer_down(Some(&dropdown.trigger_id())));
    window.dispatch_blur();
    println!("  open: {}", dropdown.is_open());

    dropdown.unmount();
    println!("blur listeners left: {}", window.blur_listener_count());
}
