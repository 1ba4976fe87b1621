//! Hidden field type.

use super::{Field, FieldCore};
use crate::markup::html_escape;

/// Hidden input. Rendered without label or group wrapper.
#[derive(Debug)]
pub struct HiddenField {
    core: FieldCore,
}

impl HiddenField {
    /// Creates a hidden field. Its label is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, "", value),
        }
    }
}

impl Field for HiddenField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    /// Extra attributes are ignored for hidden inputs.
    fn render_input(&self, _attrs: &[&str]) -> String {
        let name = html_escape(self.core.name());
        format!(
            r#"<input type="hidden" value="{}" name="{name}" id="{name}">"#,
            html_escape(self.core.value())
        )
    }

    fn input_type(&self) -> &'static str {
        "hidden"
    }

    fn is_hidden(&self) -> bool {
        true
    }
}
