//! Operating system color-scheme signal.
//!
//! [`ColorSchemeSource`] is the capability the theme controller depends on: a
//! live "is dark preferred?" query plus change notifications. [`SchemeSignal`]
//! implements it with a settable value; the GUI feeds it from egui every frame,
//! tests set it directly.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::theme::EffectiveTheme;

/// Callback invoked when the system color scheme changes.
pub type SchemeCallback = Box<dyn Fn()>;

/// Queryable, subscribable OS color-scheme signal.
pub trait ColorSchemeSource {
    /// `Some(true)` when dark is preferred right now, `None` when the
    /// environment exposes no signal (headless).
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers `callback` for change notifications until the returned
    /// handle is dropped.
    fn subscribe(&self, callback: SchemeCallback) -> Subscription;

    /// Current system theme, `Light` when no signal is available.
    fn system_theme(&self) -> EffectiveTheme {
        EffectiveTheme::from_dark(self.prefers_dark().unwrap_or(false))
    }
}

impl<C: ColorSchemeSource + ?Sized> ColorSchemeSource for Rc<C> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }

    fn subscribe(&self, callback: SchemeCallback) -> Subscription {
        (**self).subscribe(callback)
    }
}

/// Listener registration handle. Dropping it deregisters the listener.
#[must_use = "dropping a Subscription immediately deregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Handle that runs `release` exactly once when dropped or unsubscribed.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregisters now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Rc<dyn Fn()>)>>,
}

impl Listeners {
    fn add(&self, callback: SchemeCallback) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::from(callback)));
        id
    }

    fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    fn snapshot(&self) -> Vec<Rc<dyn Fn()>> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }
}

/// Settable color-scheme signal with change notification.
pub struct SchemeSignal {
    prefers_dark: Cell<Option<bool>>,
    listeners: Rc<Listeners>,
}

impl fmt::Debug for SchemeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeSignal")
            .field("prefers_dark", &self.prefers_dark.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Default for SchemeSignal {
    fn default() -> Self {
        Self::headless()
    }
}

impl SchemeSignal {
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Signal for environments without a color-scheme preference.
    pub fn headless() -> Self {
        Self::new(None)
    }

    /// Updates the signal, notifying listeners only if the value changed.
    /// Returns whether it changed.
    pub fn set_prefers_dark(&self, prefers_dark: Option<bool>) -> bool {
        if self.prefers_dark.replace(prefers_dark) == prefers_dark {
            return false;
        }
        tracing::debug!(?prefers_dark, "system color scheme changed");
        self.notify();
        true
    }

    /// Reads the system theme egui reports for this frame.
    pub fn observe(&self, ctx: &egui::Context) -> bool {
        let prefers_dark = ctx.system_theme().map(|theme| theme == egui::Theme::Dark);
        // Keep the last known value when the backend stops reporting one.
        if prefers_dark.is_none() && self.prefers_dark.get().is_some() {
            return false;
        }
        self.set_prefers_dark(prefers_dark)
    }

    /// Invokes every registered listener.
    pub fn notify(&self) {
        // Snapshot so listeners may (un)subscribe while being notified.
        for callback in self.listeners.snapshot() {
            callback();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }
}

impl ColorSchemeSource for SchemeSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn subscribe(&self, callback: SchemeCallback) -> Subscription {
        let id = self.listeners.add(callback);
        let listeners: Weak<Listeners> = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.remove(id);
            }
        })
    }
}
