//! Event handling for the Dropdown widget.

use viewdom::{Event, EventResult, Key};

use crate::behaviors::{ArrowFocus, ClickOutside};
use crate::context::WidgetCx;
use crate::i18n::Translator;

use super::filter::find_exact;
use super::item::DropdownItem;
use super::placement::place_overlay;
use super::props::DropdownProps;
use super::render::{item_label, trigger_display, visible_items};
use super::state::{Dropdown, RenderedOption};

impl Dropdown {
    /// Handle one host event.
    ///
    /// Widget-level handlers run first; if none of them stopped propagation,
    /// the click-outside check runs afterwards, the same way a document-level
    /// listener would see the event last.
    pub fn handle_event<T: DropdownItem>(
        &self,
        event: &Event,
        props: &DropdownProps<T>,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        let result = self.dispatch(event, props, cx);

        if result.propagation_stopped || !self.is_open() {
            return result;
        }

        let trigger_id = self.trigger_id();
        let outside = ClickOutside::new(self.overlay_id()).handle(event, cx.root, |event| {
            // Presses on the trigger are the toggle's business.
            if !cx.contains(&trigger_id, event.target()) {
                log::debug!("Dropdown {} closed by outside press", self.id());
                self.close();
            }
        });

        if outside {
            result.merge(EventResult::handled())
        } else {
            result
        }
    }

    fn dispatch<T: DropdownItem>(
        &self,
        event: &Event,
        props: &DropdownProps<T>,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        let trigger_id = self.trigger_id();
        let on_trigger = cx.contains(&trigger_id, event.target());

        match event {
            // The stock trigger toggles on press; a custom display button on click.
            Event::PointerDown { .. } | Event::TouchEnd { .. }
                if on_trigger && props.display_button.is_none() =>
            {
                self.toggle(event.target(), props, cx)
            }
            Event::Click { .. } if on_trigger && props.display_button.is_some() => {
                self.toggle(event.target(), props, cx)
            }
            Event::Click { target, .. } if self.is_open() => {
                match self.option_for(target.as_deref(), cx) {
                    Some(option) => self.select(&option, props, cx),
                    None => EventResult::IGNORED,
                }
            }
            Event::Key { target, key, .. } if self.is_open() => {
                self.on_key(target.as_deref(), *key, props, cx)
            }
            Event::Input { target, value } if *target == self.input_id() => {
                self.set_input(value);
                EventResult::handled().prevent_default()
            }
            Event::Blur { target, .. } if *target == self.input_id() => {
                self.clear_query();
                EventResult::handled()
            }
            Event::WindowBlur => {
                self.close();
                EventResult::handled()
            }
            _ => EventResult::IGNORED,
        }
    }

    /// Flip open/closed from the trigger.
    fn toggle<T: DropdownItem>(
        &self,
        target: Option<&str>,
        props: &DropdownProps<T>,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        // Presses inside the text field position the caret; they don't toggle.
        let input_id = self.input_id();
        if props.has_input && target == Some(input_id.as_str()) {
            return EventResult::IGNORED;
        }

        // Disabled dropdowns can only ever close.
        if props.disabled || self.is_open() {
            self.close();
        } else if self.open(props.on_opened.as_ref()) && props.has_input {
            // The input only exists once the open tree is rendered.
            cx.tasks.focus_when_mounted(input_id);
        }

        let placement = place_overlay(
            cx.rect(&self.trigger_id()),
            cx.rect(&self.overlay_id()),
            cx.window.inner_height(),
        );
        match placement {
            Some(placement) => self.set_placement(placement),
            None => log::debug!("Dropdown {} not measured yet; placement kept", self.id()),
        }

        EventResult::handled().prevent_default()
    }

    fn on_key<T: DropdownItem>(
        &self,
        target: Option<&str>,
        key: Key,
        props: &DropdownProps<T>,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        let input_id = self.input_id();
        if props.has_input && key == Key::Enter && target == Some(input_id.as_str()) {
            return self.submit_text(props, cx);
        }

        if matches!(key, Key::Enter | Key::Char(' '))
            && let Some(option) = self.option_for(target, cx)
        {
            return self.select(&option, props, cx);
        }

        ArrowFocus::new(self.overlay_id()).handle_key(true, key, cx.root, cx.focus, || {
            self.close()
        })
    }

    fn option_for(&self, target: Option<&str>, cx: &WidgetCx<'_>) -> Option<RenderedOption> {
        let target = target?;
        self.rendered_option(|element_id| viewdom::contains(cx.root, element_id, target))
    }

    /// Pick a rendered option.
    fn select<T: DropdownItem>(
        &self,
        option: &RenderedOption,
        props: &DropdownProps<T>,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        log::debug!(
            "Dropdown {} selected key={} index={}",
            self.id(),
            option.key,
            option.index
        );
        if let Some(on_click_item) = &props.on_click_item {
            on_click_item(&option.key, Some(option.index));
        }
        self.close();
        cx.focus.focus(&self.trigger_id());

        if props.has_input
            && let Some(label) = &option.label
        {
            self.set_input_value(label);
        }

        EventResult::handled().prevent_default().stop_propagation()
    }

    /// Resolve Enter in the free-text field.
    ///
    /// An item whose localized text equals the typed text (ignoring case) wins,
    /// then the only option left visible by the filter. Otherwise text the
    /// validator rejects falls back to the value the trigger was showing, and
    /// anything else is passed through as typed.
    fn submit_text<T: DropdownItem>(
        &self,
        props: &DropdownProps<T>,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        let text = self.input_value();
        let translator = cx.translator;

        let matched = find_exact(&props.items, |item| item_label(props, translator, item), &text)
            .map(|(index, item)| (item.key(), index))
            .or_else(|| self.sole_visible(props, translator));

        let (value, index) = match matched {
            Some((key, index)) => (key, Some(index)),
            None if !props.is_valid_text(&text) => {
                let fallback = trigger_display(props, translator).text().to_string();
                log::debug!(
                    "Dropdown {} rejected {:?}; using {:?}",
                    self.id(),
                    text,
                    fallback
                );
                (fallback, None)
            }
            None => (text, None),
        };

        if let Some(on_click_item) = &props.on_click_item {
            on_click_item(&value, index);
        }
        cx.focus.blur_if(&self.input_id());
        self.close();

        EventResult::handled().prevent_default()
    }

    /// The single option the current query leaves visible, if there is one.
    fn sole_visible<T: DropdownItem>(
        &self,
        props: &DropdownProps<T>,
        translator: &dyn Translator,
    ) -> Option<(String, usize)> {
        if !props.search_enabled || self.query().is_empty() {
            return None;
        }
        let mut visible = visible_items(self, props, translator);
        match visible.len() {
            1 => visible.pop().map(|option| (option.key, option.index)),
            _ => None,
        }
    }
}
