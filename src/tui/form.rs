//! Field-by-field form editing

use super::widgets::TextInput;
use crate::models::{HorseForm, OwnerForm};

/// A list of text fields with one focused
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: Vec<TextInput>,
    pub focused: usize,
}

impl FormState {
    /// Create a form with one field per label
    pub fn new(labels: &[(&str, &str)]) -> Self {
        let fields = labels
            .iter()
            .map(|(label, placeholder)| TextInput::new().label(*label).placeholder(*placeholder))
            .collect();
        Self { fields, focused: 0 }
    }

    /// The owner details form
    pub fn owner() -> Self {
        Self::new(&[
            ("Full Name", ""),
            ("Phone", "(555) 123-4567"),
            ("Address", ""),
        ])
    }

    /// The add-horse form
    pub fn horse() -> Self {
        Self::new(&[
            ("Horse Name", ""),
            ("Breed", ""),
            ("Color", ""),
            ("Microchip ID", "optional"),
        ])
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// The field keystrokes go to
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        self.fields.get_mut(self.focused)
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value()).unwrap_or("")
    }

    pub fn set_value(&mut self, index: usize, value: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_value(value);
        }
    }

    /// Empty every field and focus the first
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focused = 0;
    }

    /// Read the fields as an owner submission
    pub fn to_owner_form(&self) -> OwnerForm {
        OwnerForm::new(self.value(0), self.value(1), self.value(2))
    }

    /// Read the fields as a horse submission
    pub fn to_horse_form(&self) -> HorseForm {
        HorseForm::new(self.value(0), self.value(1), self.value(2)).with_microchip(self.value(3))
    }

    /// Fill the owner fields from a prefill
    pub fn load_owner(&mut self, form: &OwnerForm) {
        self.set_value(0, &form.name);
        self.set_value(1, &form.phone);
        self.set_value(2, &form.address);
    }
}
