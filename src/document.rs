#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::Colorize;
use serde::Serialize;

use crate::ambient::BackgroundLayer;

/// Identifies one of the two editable cut-grade fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldSlot {
    /// The first cut, weighted 33%.
    Cut1,
    /// The second cut, weighted 33%.
    Cut2,
}

impl std::fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSlot::Cut1 => write!(f, "cut 1"),
            FieldSlot::Cut2 => write!(f, "cut 2"),
        }
    }
}

/// A text input holding one cut grade as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    /// The field's current raw text.
    text: String,
}

impl InputField {
    /// Returns the field's current raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the field's text wholesale.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// The named style bundles the result panel can carry. Exactly one is
/// active at a time; rendering always replaces the previous bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleBundle {
    /// Neutral base styling applied before each evaluation.
    Base,
    /// Green styling for an already-passed result.
    Success,
    /// Red styling for validation errors and impossible results.
    Error,
    /// Blue styling for an achievable required grade.
    Info,
}

impl StyleBundle {
    /// Paints a message in this bundle's terminal colors.
    pub fn paint(&self, message: &str) -> String {
        match self {
            StyleBundle::Base => message.to_string(),
            StyleBundle::Success => message.green().to_string(),
            StyleBundle::Error => message.red().to_string(),
            StyleBundle::Info => message.blue().to_string(),
        }
    }
}

/// The container the calculator renders its status message into.
/// Starts hidden; once shown it stays shown.
#[derive(Debug, Clone)]
pub struct ResultPanel {
    /// Whether the panel is still hidden.
    hidden:  bool,
    /// The style bundle currently applied.
    style:   StyleBundle,
    /// The rendered status message.
    message: String,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            hidden:  true,
            style:   StyleBundle::Base,
            message: String::new(),
        }
    }
}

impl ResultPanel {
    /// Makes the panel visible. Idempotent.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Resets the panel to the neutral base bundle, clearing the message.
    pub fn reset(&mut self) {
        self.style = StyleBundle::Base;
        self.message.clear();
    }

    /// Renders a message with a style bundle, replacing whatever was there.
    pub fn render(&mut self, message: impl Into<String>, style: StyleBundle) {
        self.message = message.into();
        self.style = style;
    }

    /// Returns whether the panel is still hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the style bundle currently applied.
    pub fn style(&self) -> StyleBundle {
        self.style
    }

    /// Returns the rendered status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the painted message, or `None` while the panel is hidden.
    pub fn to_terminal(&self) -> Option<String> {
        if self.hidden {
            None
        } else {
            Some(self.style.paint(&self.message))
        }
    }
}

/// The two color schemes the trigger control can wear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriggerScheme {
    /// Blue, before the first completed calculation.
    Initial,
    /// Green, after the first completed calculation.
    Completed,
}

/// The control whose activation runs the calculator. Its scheme switch is
/// one-directional for the lifetime of the document.
#[derive(Debug, Clone)]
pub struct TriggerControl {
    /// The scheme currently worn.
    scheme: TriggerScheme,
}

impl Default for TriggerControl {
    fn default() -> Self {
        Self {
            scheme: TriggerScheme::Initial,
        }
    }
}

impl TriggerControl {
    /// Returns the scheme currently worn.
    pub fn scheme(&self) -> TriggerScheme {
        self.scheme
    }

    /// Switches to the completed scheme. There is no way back.
    pub fn complete(&mut self) {
        self.scheme = TriggerScheme::Completed;
    }

    /// Paints a label in the current scheme's color.
    pub fn paint(&self, label: &str) -> String {
        match self.scheme {
            TriggerScheme::Initial => label.blue().to_string(),
            TriggerScheme::Completed => label.green().to_string(),
        }
    }
}

/// The in-memory host document: everything the components read or mutate.
/// Built once at startup and passed to each component explicitly.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The first cut's input field.
    cut1:           InputField,
    /// The second cut's input field.
    cut2:           InputField,
    /// The result container, initially hidden.
    pub result:     ResultPanel,
    /// The control that triggers the calculation.
    pub trigger:    TriggerControl,
    /// The background sprite host, initially empty.
    pub background: BackgroundLayer,
}

impl Document {
    /// Creates an empty document: blank fields, hidden panel, initial
    /// trigger scheme, no sprites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field behind a slot.
    pub fn field(&self, slot: FieldSlot) -> &InputField {
        match slot {
            FieldSlot::Cut1 => &self.cut1,
            FieldSlot::Cut2 => &self.cut2,
        }
    }

    /// Returns the field behind a slot, mutably.
    pub fn field_mut(&mut self, slot: FieldSlot) -> &mut InputField {
        match slot {
            FieldSlot::Cut1 => &mut self.cut1,
            FieldSlot::Cut2 => &mut self.cut2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_render_replaces_previous_bundle() {
        let mut panel = ResultPanel::default();
        assert!(panel.is_hidden());

        panel.show();
        panel.render("passed", StyleBundle::Success);
        assert_eq!(panel.style(), StyleBundle::Success);

        panel.reset();
        assert_eq!(panel.style(), StyleBundle::Base);
        assert!(panel.message().is_empty());

        panel.render("nope", StyleBundle::Error);
        assert_eq!(panel.style(), StyleBundle::Error);
        assert_eq!(panel.message(), "nope");
        assert!(!panel.is_hidden());
    }

    #[test]
    fn trigger_scheme_switch_is_one_way() {
        let mut trigger = TriggerControl::default();
        assert_eq!(trigger.scheme(), TriggerScheme::Initial);

        trigger.complete();
        trigger.complete();
        assert_eq!(trigger.scheme(), TriggerScheme::Completed);
    }
}
