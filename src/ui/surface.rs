//! GTK implementations of the headless seams.
//!
//! [`GtkSurface`] renders toasts through an `AdwToastOverlay` and owns
//! the lazily created loading overlay; [`GlibTimers`] runs debounce
//! callbacks on the GLib main loop.

use crate::context::{Surface, ToastKind};
use crate::debounce::TimerHost;
use adw::prelude::*;
use gtk::glib;
use std::cell::RefCell;
use std::time::Duration;

/// Fade length for the loading overlay, matching the page transitions.
const OVERLAY_FADE_MS: u32 = 300;

/// One-shot timers on the GLib main loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlibTimers;

impl TimerHost for GlibTimers {
    type Handle = glib::SourceId;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> glib::SourceId {
        glib::timeout_add_local_once(delay, callback)
    }

    fn cancel(&self, handle: glib::SourceId) {
        handle.remove();
    }
}

/// The real widget-backed [`Surface`].
///
/// Holds the toast overlay and the `GtkOverlay` the loading node is
/// attached to. The build-once rule lives in `PageContext`; this type
/// only materializes and fades the node it is told to.
pub struct GtkSurface {
    toasts: adw::ToastOverlay,
    host: gtk::Overlay,
    overlay_box: RefCell<Option<gtk::Box>>,
    fade: RefCell<Option<adw::TimedAnimation>>,
}

impl GtkSurface {
    pub fn new(toasts: adw::ToastOverlay, host: gtk::Overlay) -> Self {
        Self {
            toasts,
            host,
            overlay_box: RefCell::new(None),
            fade: RefCell::new(None),
        }
    }

    fn animate_opacity(&self, widget: &gtk::Box, to: f64, hide_on_done: bool) {
        // A fade already in flight is superseded, not stacked
        if let Some(prev) = self.fade.borrow_mut().take() {
            prev.pause();
        }

        let target = adw::CallbackAnimationTarget::new({
            let widget = widget.clone();
            move |value| {
                widget.set_opacity(value);
            }
        });

        let animation = adw::TimedAnimation::builder()
            .widget(widget)
            .value_from(widget.opacity())
            .value_to(to)
            .duration(OVERLAY_FADE_MS)
            .target(&target)
            .build();

        if hide_on_done {
            let widget = widget.clone();
            animation.connect_done(move |_| {
                widget.set_visible(false);
            });
        }

        animation.play();
        *self.fade.borrow_mut() = Some(animation);
    }
}

impl Surface for GtkSurface {
    fn build_overlay(&self, message: &str) {
        let spinner = gtk::Spinner::builder()
            .width_request(48)
            .height_request(48)
            .spinning(true)
            .build();

        let label = gtk::Label::builder()
            .label(message)
            .css_classes(["title-3"])
            .build();

        let content = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(16)
            .halign(gtk::Align::Center)
            .valign(gtk::Align::Center)
            .hexpand(true)
            .vexpand(true)
            .build();
        content.append(&spinner);
        content.append(&label);

        let overlay = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .css_classes(["loading-overlay"])
            .hexpand(true)
            .vexpand(true)
            .visible(false)
            .build();
        overlay.set_opacity(0.0);
        overlay.append(&content);

        self.host.add_overlay(&overlay);
        *self.overlay_box.borrow_mut() = Some(overlay);
    }

    fn reveal_overlay(&self) {
        let overlay = match self.overlay_box.borrow().clone() {
            Some(overlay) => overlay,
            None => return,
        };

        overlay.set_visible(true);
        self.animate_opacity(&overlay, 1.0, false);
    }

    fn conceal_overlay(&self) {
        let overlay = match self.overlay_box.borrow().clone() {
            Some(overlay) => overlay,
            None => return,
        };

        self.animate_opacity(&overlay, 0.0, true);
    }

    fn toast(&self, kind: ToastKind, message: &str) {
        let toast = adw::Toast::new(message);
        toast.set_timeout(kind.timeout_secs());
        self.toasts.add_toast(toast);
    }
}
