//! In-memory host widgets shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fieldguard_validator::{ChangeListener, DecoratedContainer, HostField};

/// A call made by the validator on a host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetError(Option<String>),
    SetErrorEnabled(bool),
}

/// A text input that records every call it receives.
#[derive(Default)]
pub struct TextField {
    text: RefCell<String>,
    hint: Option<String>,
    container: Option<Rc<Container>>,
    listeners: RefCell<Vec<ChangeListener>>,
    pub calls: RefCell<Vec<Call>>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_owned());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        *self.text.borrow_mut() = text.to_owned();
        self
    }

    pub fn inside(mut self, container: &Rc<Container>) -> Self {
        self.container = Some(Rc::clone(container));
        self
    }

    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Replaces the text without notifying listeners.
    pub fn set_text_silently(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }

    /// Replaces the text, then notifies listeners like a user edit would.
    pub fn type_text(&self, text: &str) {
        self.set_text_silently(text);
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// The error currently rendered on the field.
    pub fn error(&self) -> Option<String> {
        last_error(&self.calls.borrow())
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl HostField for TextField {
    type Value = str;

    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_error(&self, message: Option<&str>) {
        self.calls
            .borrow_mut()
            .push(Call::SetError(message.map(str::to_owned)));
    }

    fn hint(&self) -> Option<String> {
        self.hint.clone()
    }

    fn subscribe(&self, listener: ChangeListener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn decorated_container(&self) -> Option<Rc<dyn DecoratedContainer>> {
        self.container
            .clone()
            .map(|container| container as Rc<dyn DecoratedContainer>)
    }
}

/// An outlined-field style wrapper that renders errors below the input.
#[derive(Default)]
pub struct Container {
    hint: Option<String>,
    error_enabled: Cell<bool>,
    pub calls: RefCell<Vec<Call>>,
}

impl Container {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_hint(hint: &str) -> Rc<Self> {
        Rc::new(Self {
            hint: Some(hint.to_owned()),
            ..Self::default()
        })
    }

    pub fn error(&self) -> Option<String> {
        last_error(&self.calls.borrow())
    }

    pub fn error_enabled(&self) -> bool {
        self.error_enabled.get()
    }
}

impl DecoratedContainer for Container {
    fn set_error(&self, message: Option<&str>) {
        if message.is_some() {
            self.error_enabled.set(true);
        }
        self.calls
            .borrow_mut()
            .push(Call::SetError(message.map(str::to_owned)));
    }

    fn set_error_enabled(&self, enabled: bool) {
        self.error_enabled.set(enabled);
        self.calls.borrow_mut().push(Call::SetErrorEnabled(enabled));
    }

    fn hint(&self) -> Option<String> {
        self.hint.clone()
    }
}

fn last_error(calls: &[Call]) -> Option<String> {
    calls.iter().rev().find_map(|call| match call {
        Call::SetError(message) => Some(message.clone()),
        Call::SetErrorEnabled(_) => None,
    })?
}
