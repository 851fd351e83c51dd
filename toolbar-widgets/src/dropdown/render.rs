//! Rendering for the Dropdown widget.

use viewdom::{Element, StyleMap};

use crate::i18n::{resolve_label, Translator};

use super::filter::{visible_options, VisibleOption};
use super::item::{image_index, DropdownItem};
use super::props::{DropdownProps, DENSE_ROW_HEIGHT};
use super::state::{Dropdown, RenderedOption};

/// What the trigger shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerDisplay {
    /// Localized label of the selected item (or raw free-text value).
    Label(String),
    /// Icon of the selected image option.
    Icon { glyph: String, class_name: String },
    /// Nothing selected.
    Placeholder(String),
}

impl TriggerDisplay {
    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Placeholder(_))
    }

    /// Text form, used as the fallback value for rejected free text.
    pub fn text(&self) -> &str {
        match self {
            Self::Label(text) | Self::Placeholder(text) => text,
            Self::Icon { .. } => "",
        }
    }
}

/// Localized display text of an item.
pub fn item_label<T: DropdownItem>(
    props: &DropdownProps<T>,
    translator: &dyn Translator,
    item: &T,
) -> String {
    resolve_label(
        translator,
        props.translation_prefix.as_deref(),
        &item.display_value(),
        props.translation_label.as_deref(),
    )
}

/// Resolve what the trigger shows for `current_selection_key`.
pub fn trigger_display<T: DropdownItem>(
    props: &DropdownProps<T>,
    translator: &dyn Translator,
) -> TriggerDisplay {
    let placeholder = || TriggerDisplay::Placeholder(props.placeholder.clone().unwrap_or_default());
    let key = props.current_selection_key.as_deref();

    if props.has_images() {
        return match image_index(&props.images, key) {
            Some(i) => TriggerDisplay::Icon {
                glyph: props.images[i].src.clone(),
                class_name: props.images[i].class_name.clone(),
            },
            None => placeholder(),
        };
    }

    if let Some((_, item)) = props.selected_item() {
        let label = if translator.is_ready() {
            item_label(props, translator, item)
        } else {
            String::new()
        };
        return TriggerDisplay::Label(label);
    }

    // A value typed as free text has no list entry; show it as-is.
    match key {
        Some(key) if props.has_input && !key.is_empty() => TriggerDisplay::Label(key.to_string()),
        _ => placeholder(),
    }
}

fn overlay_label_key<T>(props: &DropdownProps<T>) -> String {
    match props.translation_prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}.dropdownLabel"),
        _ => "dropdownLabel".to_string(),
    }
}

/// The text options visible for the current query.
pub fn visible_items<T: DropdownItem>(
    dropdown: &Dropdown,
    props: &DropdownProps<T>,
    translator: &dyn Translator,
) -> Vec<VisibleOption> {
    visible_options(
        &props.items,
        |item| item_label(props, translator, item),
        &dropdown.query(),
        props.search_enabled,
    )
}

impl Dropdown {
    /// Build the dropdown element tree.
    ///
    /// The overlay is always part of the tree (hidden while closed) so the
    /// host can measure it before the first open.
    pub fn build<T: DropdownItem>(
        &self,
        props: &DropdownProps<T>,
        translator: &dyn Translator,
    ) -> Element {
        let open = self.is_open();
        let id = self.id_string();

        if props.has_images() && !props.items.is_empty() {
            log::warn!(
                "Dropdown {} given both images and items; showing images",
                id
            );
        }

        let display = trigger_display(props, translator);
        let (options, rendered) = if props.has_images() {
            self.build_images(props, open)
        } else {
            self.build_items(props, translator, open)
        };
        self.set_rendered(rendered);

        log::debug!(
            "Dropdown::build id={} open={} options={} query={:?}",
            id,
            open,
            options.len(),
            self.query()
        );

        let trigger = match &props.display_button {
            Some(display_button) => Element::div()
                .id(self.trigger_id())
                .clickable(true)
                .child(display_button(open)),
            None => self.build_trigger(props, &display, open),
        };

        let mut overlay = Element::div()
            .id(self.overlay_id())
            .class("Dropdown__items")
            .class_if("hide", !open)
            .class_if(
                "dropdown-items-with-custom-display",
                props.display_button.is_some(),
            )
            .role("listbox")
            .aria_label(translator.translate(&overlay_label_key(props), None))
            .hidden(!open);

        if let Some(max_height) = props.max_height {
            overlay = overlay.max_height(max_height);
        }
        if let Some(placement) = self.placement() {
            overlay = overlay.top(placement.top());
        }

        overlay = if options.is_empty() {
            overlay.child(
                Element::div()
                    .id(format!("{}-no-results", id))
                    .class("Dropdown__item")
                    .child(Element::text(translator.translate("message.noResults", None))),
            )
        } else {
            overlay.children(options)
        };

        let mut wrapper = Element::div()
            .id(&id)
            .class("Dropdown__wrapper")
            .class(props.class_name.clone())
            .child(trigger)
            .child(overlay);
        if let Some(data_element) = &props.data_element {
            wrapper = wrapper.data_element(data_element.clone());
        }
        wrapper
    }

    fn build_trigger<T: DropdownItem>(
        &self,
        props: &DropdownProps<T>,
        display: &TriggerDisplay,
        open: bool,
    ) -> Element {
        let picked = if open && props.has_input {
            let input = Element::text_input(self.input_value())
                .id(self.input_id())
                .class("Dropdown__input");
            match &props.placeholder {
                Some(placeholder) => input.placeholder(placeholder.clone()),
                None => input,
            }
        } else {
            match display {
                TriggerDisplay::Icon { glyph, class_name } => {
                    Element::icon(glyph.clone(), class_name.clone())
                }
                TriggerDisplay::Label(text) | TriggerDisplay::Placeholder(text) => {
                    Element::text(text.clone())
                }
            }
        };

        let mut picked_text = Element::div().class("picked-option-text").child(picked);
        if props.apply_custom_style_to_button
            && let Some((_, item)) = props.selected_item()
        {
            picked_text = picked_text.style(props.item_style(item));
        }

        let chevron = if open {
            "icon-chevron-up"
        } else {
            "icon-chevron-down"
        };

        Element::button()
            .id(self.trigger_id())
            .class("Dropdown")
            .class(props.class_name.clone())
            .width(props.width)
            .disabled(props.disabled)
            .child(
                Element::div()
                    .class("picked-option")
                    .child(picked_text)
                    .child(Element::icon(chevron, "arrow")),
            )
    }

    fn build_items<T: DropdownItem>(
        &self,
        props: &DropdownProps<T>,
        translator: &dyn Translator,
        open: bool,
    ) -> (Vec<Element>, Vec<RenderedOption>) {
        let selected = props.current_selection_key.as_deref();
        let dense = props
            .max_height
            .map(|_| StyleMap::new().set("line-height", format!("{DENSE_ROW_HEIGHT}px")));

        let mut elements = Vec::new();
        let mut rendered = Vec::new();
        for option in visible_items(self, props, translator) {
            let element_id = self.item_id(option.index);
            let mut style = props.item_style(&props.items[option.index]);
            if let Some(dense) = &dense {
                style = style.merge(dense);
            }

            elements.push(
                Element::button()
                    .id(&element_id)
                    .data_element(format!("dropdown-item-{}", option.key))
                    .class("Dropdown__item")
                    .class_if("active", Some(option.key.as_str()) == selected)
                    .focusable(open)
                    .style(style)
                    .child(Element::text(option.label.clone())),
            );
            rendered.push(RenderedOption {
                element_id,
                key: option.key,
                index: option.index,
                label: Some(option.label),
            });
        }
        (elements, rendered)
    }

    fn build_images<T: DropdownItem>(
        &self,
        props: &DropdownProps<T>,
        open: bool,
    ) -> (Vec<Element>, Vec<RenderedOption>) {
        let selected = props.current_selection_key.as_deref();

        props
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let element_id = self.image_id(index);
                let element = Element::button()
                    .id(&element_id)
                    .data_element(format!("dropdown-item-{}", image.key))
                    .class("Dropdown__item")
                    .class_if("active", Some(image.key.as_str()) == selected)
                    .focusable(open)
                    .child(Element::icon(image.src.clone(), image.class_name.clone()));
                let option = RenderedOption {
                    element_id,
                    key: image.key.clone(),
                    index,
                    label: None,
                };
                (element, option)
            })
            .unzip()
    }
}
