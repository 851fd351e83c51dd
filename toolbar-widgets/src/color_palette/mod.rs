//! Color palette picker: the default swatches followed by user-added colors.

mod color;
mod props;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use viewdom::{Element, Event, EventResult, StyleMap};

use crate::context::WidgetCx;

pub use color::{normalize_hex, same_hex, Color, DEFAULT_PALETTE};
pub use props::{
    ColorPalettePickerProps, CustomIndexFn, HexColorFn, MarkForDeletionFn, SelectColorFn,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPalettePickerId(usize);

impl ColorPalettePickerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ColorPalettePickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__palette_{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct RenderedSwatch {
    element_id: String,
    hex: String,
    color: Color,
    /// Position in `custom_colors`; `None` for default swatches.
    custom_index: Option<usize>,
}

/// Swatch grid for picking annotation colors.
///
/// Stateless apart from remembering which swatch each rendered element is;
/// selection and the pending deletion belong to the caller.
#[derive(Debug)]
pub struct ColorPalettePicker {
    id: ColorPalettePickerId,
    rendered: Arc<RwLock<Vec<RenderedSwatch>>>,
}

impl ColorPalettePicker {
    pub fn new() -> Self {
        Self {
            id: ColorPalettePickerId::new(),
            rendered: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn id(&self) -> ColorPalettePickerId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn swatch_id(&self, n: usize) -> String {
        format!("{}-swatch-{}", self.id, n)
    }

    /// Hex values of the swatches from the last build, in display order.
    pub fn rendered_hexes(&self) -> Vec<String> {
        self.rendered
            .read()
            .map(|swatches| swatches.iter().map(|s| s.hex.clone()).collect())
            .unwrap_or_default()
    }

    pub fn build(&self, props: &ColorPalettePickerProps) -> Element {
        let selected = props.hex_of(&props.color);
        let marked = props
            .color_to_be_deleted
            .as_deref()
            .and_then(|hex| props.custom_index(hex));

        let defaults = DEFAULT_PALETTE
            .iter()
            .filter(|hex| !props.is_ignored(hex))
            .map(|hex| (hex.to_string(), None));
        let customs = props
            .custom_colors
            .iter()
            .enumerate()
            .map(|(i, hex)| (hex.clone(), Some(i)));

        let mut swatches = Vec::new();
        for (hex, custom_index) in defaults.chain(customs) {
            match Color::from_hex(&hex) {
                Ok(color) => swatches.push(RenderedSwatch {
                    element_id: self.swatch_id(swatches.len()),
                    hex,
                    color,
                    custom_index,
                }),
                Err(err) => log::warn!("ColorPalettePicker {} skipping swatch: {}", self.id, err),
            }
        }

        let cells: Vec<Element> = swatches
            .iter()
            .map(|swatch| {
                let background = StyleMap::new().set("background-color", swatch.hex.clone());
                Element::button()
                    .id(&swatch.element_id)
                    .class("cell-container")
                    .class_if("custom", swatch.custom_index.is_some())
                    .class_if("active", same_hex(&swatch.hex, &selected))
                    .class_if(
                        "to-be-deleted",
                        marked.is_some() && swatch.custom_index == marked,
                    )
                    .aria_label(swatch.hex.clone())
                    .child(Element::div().class("cell").style(background))
            })
            .collect();

        log::debug!(
            "ColorPalettePicker::build id={} swatches={} selected={}",
            self.id,
            cells.len(),
            selected
        );

        if let Ok(mut rendered) = self.rendered.write() {
            *rendered = swatches;
        }

        let mut root = Element::div()
            .id(self.id_string())
            .class("ColorPalette")
            .children(cells);
        if let Some(data_element) = &props.data_element {
            root = root.data_element(data_element.clone());
        }
        root
    }

    /// Clicking a swatch selects it; clicking a custom swatch also marks it
    /// as the one pending deletion.
    pub fn handle_event(
        &self,
        event: &Event,
        props: &ColorPalettePickerProps,
        cx: &mut WidgetCx<'_>,
    ) -> EventResult {
        let Event::Click { target, .. } = event else {
            return EventResult::IGNORED;
        };
        let Some(swatch) = self.swatch_for(target.as_deref(), cx) else {
            return EventResult::IGNORED;
        };

        log::debug!("ColorPalettePicker {} picked {}", self.id, swatch.hex);
        if let Some(on_select) = &props.on_select {
            on_select(swatch.color);
        }
        if swatch.custom_index.is_some()
            && let Some(mark) = &props.set_color_to_be_deleted
        {
            mark(&swatch.hex);
        }

        EventResult::handled().prevent_default()
    }

    fn swatch_for(&self, target: Option<&str>, cx: &WidgetCx<'_>) -> Option<RenderedSwatch> {
        let rendered = self.rendered.read().ok()?;
        rendered
            .iter()
            .find(|swatch| cx.contains(&swatch.element_id, target))
            .cloned()
    }
}

impl Default for ColorPalettePicker {
    fn default() -> Self {
        Self::new()
    }
}
