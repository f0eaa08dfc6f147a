//! Page context - the explicit handle other parts of the app call into.
//!
//! Replaces the usual "grab the global widget singleton" pattern with a
//! context object holding an injected [`Surface`]. The surface is the
//! only thing that touches real widgets, so everything here runs under
//! plain unit tests with a recording stand-in.

use crate::validate::{validate_fields, FieldInput, FormReport};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Toast flavor, which fixes the display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Welcome,
    Success,
    Error,
}

impl ToastKind {
    /// How long the toast stays up, in seconds.
    pub fn timeout_secs(&self) -> u32 {
        match self {
            ToastKind::Welcome => 3,
            ToastKind::Success => 4,
            ToastKind::Error => 5,
        }
    }
}

/// UI capability seam: toasts plus the loading overlay.
///
/// The GTK implementation lives in `ui::surface`; tests substitute a
/// recorder. The overlay contract is split into build/reveal/conceal so
/// the context can enforce the build-once rule itself.
pub trait Surface {
    /// Materialize the overlay node. Called at most once per context.
    fn build_overlay(&self, message: &str);

    /// Fade the overlay in.
    fn reveal_overlay(&self);

    /// Fade the overlay out.
    fn conceal_overlay(&self);

    /// Show a transient notification.
    fn toast(&self, kind: ToastKind, message: &str);
}

/// A form that can hand over its current field values and display a
/// validation outcome.
pub trait FormSource {
    fn fields(&self) -> Vec<FieldInput>;
    fn apply_report(&self, report: &FormReport);
}

/// Shared page-level services: validation, loading overlay, toasts.
pub struct PageContext {
    surface: Rc<dyn Surface>,
    overlay_built: Cell<bool>,
    forms: RefCell<HashMap<String, Rc<dyn FormSource>>>,
}

impl PageContext {
    pub fn new(surface: Rc<dyn Surface>) -> Rc<Self> {
        Rc::new(Self {
            surface,
            overlay_built: Cell::new(false),
            forms: RefCell::new(HashMap::new()),
        })
    }

    /// Make a form reachable through [`validate_form`](Self::validate_form).
    pub fn register_form(&self, id: &str, form: Rc<dyn FormSource>) {
        self.forms.borrow_mut().insert(id.to_string(), form);
    }

    /// Validate a registered form and paint the outcome onto it.
    ///
    /// An unknown id is vacuously valid - there are no fields to fail.
    pub fn validate_form(&self, id: &str) -> bool {
        let form = match self.forms.borrow().get(id) {
            Some(form) => form.clone(),
            None => return true,
        };

        let report = validate_fields(&form.fields());
        form.apply_report(&report);
        report.is_valid()
    }

    /// Show the full-page loading overlay.
    ///
    /// The overlay node is created on the first call only; later calls
    /// reuse it and ignore `message`.
    pub fn show_loading(&self, message: &str) {
        if !self.overlay_built.get() {
            self.surface.build_overlay(message);
            self.overlay_built.set(true);
        }
        self.surface.reveal_overlay();
    }

    /// Hide the loading overlay. No-op if it was never shown.
    pub fn hide_loading(&self) {
        if self.overlay_built.get() {
            self.surface.conceal_overlay();
        }
    }

    pub fn show_success(&self, message: &str) {
        self.surface.toast(ToastKind::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.surface.toast(ToastKind::Error, message);
    }

    /// Page-ready greeting toast.
    pub(crate) fn show_welcome(&self, message: &str) {
        self.surface.toast(ToastKind::Welcome, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldKind;

    #[derive(Default)]
    struct RecordingSurface {
        builds: RefCell<Vec<String>>,
        reveals: Cell<u32>,
        conceals: Cell<u32>,
        toasts: RefCell<Vec<(ToastKind, String)>>,
    }

    impl Surface for RecordingSurface {
        fn build_overlay(&self, message: &str) {
            self.builds.borrow_mut().push(message.to_string());
        }

        fn reveal_overlay(&self) {
            self.reveals.set(self.reveals.get() + 1);
        }

        fn conceal_overlay(&self) {
            self.conceals.set(self.conceals.get() + 1);
        }

        fn toast(&self, kind: ToastKind, message: &str) {
            self.toasts.borrow_mut().push((kind, message.to_string()));
        }
    }

    struct FixedForm {
        fields: Vec<FieldInput>,
        last_report: RefCell<Option<FormReport>>,
    }

    impl FormSource for FixedForm {
        fn fields(&self) -> Vec<FieldInput> {
            self.fields.clone()
        }

        fn apply_report(&self, report: &FormReport) {
            *self.last_report.borrow_mut() = Some(report.clone());
        }
    }

    #[test]
    fn test_show_loading_builds_overlay_once() {
        let surface = Rc::new(RecordingSurface::default());
        let ctx = PageContext::new(surface.clone());

        ctx.show_loading("Loading...");
        ctx.show_loading("Different message");

        // Exactly one node, first message wins, both calls reveal
        assert_eq!(*surface.builds.borrow(), vec!["Loading...".to_string()]);
        assert_eq!(surface.reveals.get(), 2);
    }

    #[test]
    fn test_hide_loading_before_show_is_noop() {
        let surface = Rc::new(RecordingSurface::default());
        let ctx = PageContext::new(surface.clone());

        ctx.hide_loading();
        assert_eq!(surface.conceals.get(), 0);

        ctx.show_loading("Loading...");
        ctx.hide_loading();
        assert_eq!(surface.conceals.get(), 1);
    }

    #[test]
    fn test_toast_kinds_and_durations() {
        let surface = Rc::new(RecordingSurface::default());
        let ctx = PageContext::new(surface.clone());

        ctx.show_success("sent");
        ctx.show_error("failed");
        ctx.show_welcome("hello");

        let toasts = surface.toasts.borrow();
        assert_eq!(toasts[0], (ToastKind::Success, "sent".to_string()));
        assert_eq!(toasts[1], (ToastKind::Error, "failed".to_string()));
        assert_eq!(toasts[2], (ToastKind::Welcome, "hello".to_string()));

        assert_eq!(ToastKind::Success.timeout_secs(), 4);
        assert_eq!(ToastKind::Error.timeout_secs(), 5);
        assert_eq!(ToastKind::Welcome.timeout_secs(), 3);
    }

    #[test]
    fn test_validate_unknown_form_is_vacuously_true() {
        let surface = Rc::new(RecordingSurface::default());
        let ctx = PageContext::new(surface);

        assert!(ctx.validate_form("nope"));
    }

    #[test]
    fn test_validate_registered_form_reports_back() {
        let surface = Rc::new(RecordingSurface::default());
        let ctx = PageContext::new(surface);

        let form = Rc::new(FixedForm {
            fields: vec![
                FieldInput::new("name", "", true, FieldKind::Text),
                FieldInput::new("email", "a@b.com", true, FieldKind::Email),
            ],
            last_report: RefCell::new(None),
        });
        ctx.register_form("contact", form.clone());

        assert!(!ctx.validate_form("contact"));

        let report = form.last_report.borrow();
        let report = report.as_ref().expect("report applied");
        assert_eq!(report.field("name"), Some(false));
        assert_eq!(report.field("email"), Some(true));
    }
}
