//! A sign-up form with three validated text inputs.
//!
//! Run with `RUST_LOG=fieldguard_validator=trace` to see validation events.

use std::cell::RefCell;
use std::rc::Rc;

use fieldguard_validator::prelude::*;
use tracing_subscriber::EnvFilter;

/// A console-backed text input.
struct ConsoleInput {
    label: &'static str,
    text: RefCell<String>,
    listeners: RefCell<Vec<ChangeListener>>,
}

impl ConsoleInput {
    fn new(label: &'static str) -> Rc<Self> {
        Rc::new(Self {
            label,
            text: RefCell::new(String::new()),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn type_text(&self, text: &str) {
        println!("{} <- {text:?}", self.label);
        *self.text.borrow_mut() = text.to_owned();
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

impl HostField for ConsoleInput {
    type Value = str;

    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_error(&self, message: Option<&str>) {
        match message {
            Some(message) => println!("  {}: {message}", self.label),
            None => println!("  {}: ok", self.label),
        }
    }

    fn hint(&self) -> Option<String> {
        Some(self.label.to_owned())
    }

    fn subscribe(&self, listener: ChangeListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = ConsoleInput::new("Username");
    let password = ConsoleInput::new("Password");
    let email = ConsoleInput::new("Email");

    let validators = [
        ValidatorBuilder::new(Rc::clone(&username))
            .required()
            .min_length(3)
            .max_length(16)
            .build(),
        ValidatorBuilder::new(Rc::clone(&password))
            .required()
            .min_length_with(8, "Use at least # characters")
            .build(),
        ValidatorBuilder::new(Rc::clone(&email))
            .skip_validate_on_change()
            .required()
            .check(|s: &str| s.contains('@'), "Enter a valid email")
            .build(),
    ];

    username.type_text("al");
    username.type_text("alice");
    password.type_text("hunter2");
    email.type_text("alice.example.com");

    println!("submit:");
    let valid = validators.iter().filter(|v| v.validate()).count();
    println!("{valid}/{} fields valid", validators.len());
}
