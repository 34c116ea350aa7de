//! Theme resolution and synchronization.
//!
//! [`ThemeController`] owns the in-session preference and keeps the display
//! surface in sync with two triggers: user toggles and system color-scheme
//! change notifications. An explicit `Light` or `Dark` preference always wins
//! over the system signal.
//!
//! The in-session preference is authoritative for the lifetime of the
//! controller. If persisting a toggle fails the session keeps the new value;
//! the next [`ThemeController::initialize`] re-syncs from the store.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::display::DisplaySurface;
use crate::preference_store::PreferenceStore;
use crate::scheme::{ColorSchemeSource, Subscription};
use crate::storage::KeyValueStore;
use crate::theme::{EffectiveTheme, ThemePreference};

/// Session state shared with the scheme-change listener.
struct Session<S, D> {
    store: PreferenceStore<S>,
    surface: D,
    preference: ThemePreference,
    applied: Option<EffectiveTheme>,
}

impl<S: KeyValueStore, D: DisplaySurface> Session<S, D> {
    fn apply(&mut self, theme: EffectiveTheme) {
        if self.applied == Some(theme) {
            return;
        }
        tracing::debug!(?theme, preference = %self.preference, "applying theme");
        self.surface.apply(theme);
        self.applied = Some(theme);
    }

    fn on_system_scheme_change(&mut self, system: EffectiveTheme) {
        if self.preference != ThemePreference::System {
            tracing::trace!(preference = %self.preference, "ignoring system scheme change");
            return;
        }
        self.apply(system);
    }
}

/// Resolves, applies and cycles the theme for one UI session.
pub struct ThemeController<S, C, D> {
    session: Rc<RefCell<Session<S, D>>>,
    scheme: Rc<C>,
    subscription: Option<Subscription>,
}

impl<S, C, D> ThemeController<S, C, D>
where
    S: KeyValueStore + 'static,
    C: ColorSchemeSource + 'static,
    D: DisplaySurface + 'static,
{
    /// Creates a controller holding the stored preference. Nothing is applied
    /// and no listener is registered until [`initialize`](Self::initialize).
    pub fn new(store: PreferenceStore<S>, scheme: Rc<C>, surface: D) -> Self {
        let preference = store.get_stored_theme();
        Self {
            session: Rc::new(RefCell::new(Session {
                store,
                surface,
                preference,
                applied: None,
            })),
            scheme,
            subscription: None,
        }
    }

    /// Loads the stored preference, applies the effective theme and starts
    /// listening for system scheme changes. Calling it again re-syncs from
    /// the store and replaces the previous listener.
    pub fn initialize(&mut self) -> EffectiveTheme {
        let system = self.system_theme();
        let theme = {
            let mut session = self.session.borrow_mut();
            session.preference = session.store.get_stored_theme();
            let theme = session.preference.resolve(system);
            session.apply(theme);
            tracing::info!(preference = %session.preference, ?theme, "theme initialized");
            theme
        };

        let session: Weak<RefCell<Session<S, D>>> = Rc::downgrade(&self.session);
        let scheme: Weak<C> = Rc::downgrade(&self.scheme);
        self.subscription = Some(self.scheme.subscribe(Box::new(move || {
            let (Some(session), Some(scheme)) = (session.upgrade(), scheme.upgrade()) else {
                return;
            };
            let system = scheme.system_theme();
            match session.try_borrow_mut() {
                Ok(mut session) => session.on_system_scheme_change(system),
                Err(_) => tracing::warn!("system scheme change during theme update, skipped"),
            };
        })));

        theme
    }

    /// Live system theme; `Light` when no signal is available.
    pub fn system_theme(&self) -> EffectiveTheme {
        self.scheme.system_theme()
    }

    /// Theme for the current session preference and the live system signal.
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.preference().resolve(self.system_theme())
    }

    /// Reacts to a system scheme change. Does nothing unless the session
    /// preference is `System`.
    pub fn on_system_scheme_change(&self) {
        let system = self.system_theme();
        self.session.borrow_mut().on_system_scheme_change(system);
    }

    /// Advances `Light → Dark → System → Light`, persists the new preference
    /// best-effort and applies the resulting theme.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference().next();
        self.set_preference(next);
        next
    }

    /// Selects `preference` directly, persisting it best-effort.
    pub fn set_preference(&mut self, preference: ThemePreference) -> EffectiveTheme {
        let mut session = self.session.borrow_mut();
        session.preference = preference;
        if !session.store.set_stored_theme(preference) {
            tracing::warn!(%preference, "theme preference not persisted, keeping it for this session");
        }
        let theme = preference.resolve(self.scheme.system_theme());
        session.apply(theme);
        theme
    }

    /// In-session preference.
    pub fn preference(&self) -> ThemePreference {
        self.session.borrow().preference
    }

    /// Last theme applied to the surface, `None` before initialization.
    pub fn applied(&self) -> Option<EffectiveTheme> {
        self.session.borrow().applied
    }

    /// Preference currently in the store, which can lag the session after a failed write.
    pub fn stored_preference(&self) -> ThemePreference {
        self.session.borrow().store.get_stored_theme()
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Runs `f` with the display surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.session.borrow().surface)
    }

    /// Runs `f` with the store backend.
    pub fn with_backend_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(self.session.borrow_mut().store.backend_mut())
    }

    /// Stops listening for system scheme changes. Dropping the controller
    /// does the same.
    pub fn teardown(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("theme controller stopped listening");
        }
    }
}
