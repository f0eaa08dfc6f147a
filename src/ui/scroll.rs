//! Smooth section navigation within the page's scrolled window.
//!
//! Sections register under a name; `scroll_to` animates the vertical
//! adjustment to the section's offset minus the fixed header height and
//! records the section as current once the animation finishes - the
//! desktop analog of updating the URL fragment after the scroll.

use crate::error::ScrollError;
use crate::viewport::{Span, Viewport};
use adw::prelude::*;
use gtk::glib;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct SectionScroller {
    scrolled: gtk::ScrolledWindow,
    header_offset: f64,
    duration_ms: u32,
    sections: RefCell<HashMap<String, gtk::Widget>>,
    current: Rc<RefCell<Option<String>>>,
    animation: RefCell<Option<adw::TimedAnimation>>,
}

impl SectionScroller {
    pub fn new(scrolled: gtk::ScrolledWindow, header_offset: u32, duration_ms: u32) -> Self {
        Self {
            scrolled,
            header_offset: f64::from(header_offset),
            duration_ms,
            sections: RefCell::new(HashMap::new()),
            current: Rc::new(RefCell::new(None)),
            animation: RefCell::new(None),
        }
    }

    /// Make a widget reachable as a named section.
    pub fn register(&self, name: &str, section: &impl IsA<gtk::Widget>) {
        self.sections
            .borrow_mut()
            .insert(name.to_string(), section.clone().upcast());
    }

    /// The section last navigated to with `record = true`.
    pub fn current_section(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// Animate the page to `name`.
    ///
    /// With `record` set, the section becomes [`current_section`]
    /// when the animation completes; the scroll-indicator path passes
    /// `false` and leaves the recorded position untouched.
    pub fn scroll_to(&self, name: &str, record: bool) -> Result<(), ScrollError> {
        let section = self
            .sections
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ScrollError::UnknownSection(name.to_string()))?;

        let content = self
            .scrolled
            .child()
            .ok_or_else(|| ScrollError::NotRealized(name.to_string()))?;

        let bounds = section
            .compute_bounds(&content)
            .ok_or_else(|| ScrollError::NotRealized(name.to_string()))?;

        let adjustment = self.scrolled.vadjustment();
        let max = (adjustment.upper() - adjustment.page_size()).max(0.0);
        let destination = (f64::from(bounds.y()) - self.header_offset).clamp(0.0, max);

        // A navigation already in flight is superseded
        if let Some(prev) = self.animation.borrow_mut().take() {
            prev.pause();
        }

        let target = adw::CallbackAnimationTarget::new(glib::clone!(
            @weak adjustment =>
            move |value| {
                adjustment.set_value(value);
            }
        ));

        let animation = adw::TimedAnimation::builder()
            .widget(&self.scrolled)
            .value_from(adjustment.value())
            .value_to(destination)
            .duration(self.duration_ms)
            .easing(adw::Easing::EaseInOutCubic)
            .target(&target)
            .build();

        if record {
            let current = self.current.clone();
            let name = name.to_string();
            animation.connect_done(move |_| {
                *current.borrow_mut() = Some(name.clone());
            });
        }

        animation.play();
        *self.animation.borrow_mut() = Some(animation);

        Ok(())
    }

    /// The currently visible slice of the page content.
    pub fn viewport(&self) -> Viewport {
        let adjustment = self.scrolled.vadjustment();
        Viewport::new(adjustment.value(), adjustment.page_size())
    }

    /// A widget's vertical extent within the page content, if laid out.
    pub fn span_of(&self, widget: &impl IsA<gtk::Widget>) -> Option<Span> {
        let content = self.scrolled.child()?;
        let bounds = widget.as_ref().compute_bounds(&content)?;
        Some(Span::new(
            f64::from(bounds.y()),
            f64::from(bounds.height()),
        ))
    }
}
