use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A one-shot message channel to the user.
pub trait Feedback {
    fn show(&self, message: &str);
}

impl<F: Feedback + ?Sized> Feedback for Rc<F> {
    fn show(&self, message: &str) {
        (**self).show(message);
    }
}

/// A toast that only ever shows one message: a new message replaces the current one.
#[derive(Debug, Default)]
pub struct SingleToast {
    current: RefCell<Option<String>>,
    shown: Cell<usize>,
}

impl SingleToast {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message on screen, if any.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// How many messages were shown so far.
    pub fn shown(&self) -> usize {
        self.shown.get()
    }
}

impl Feedback for SingleToast {
    fn show(&self, message: &str) {
        tracing::info!(target: "recycler_demo", message, "toast");
        self.current.replace(Some(message.to_owned()));
        self.shown.set(self.shown.get() + 1);
    }
}
