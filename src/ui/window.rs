//! SilverDesk Window - the single-page marketing layout.
//!
//! Assembles the navigation drawer (right-edge flap), header bar with
//! dropdown menu, toast overlay, loading-overlay host, and the
//! scrollable hero/intro/services/contact sections. All page-level
//! services hang off one `PageContext` built here.

use crate::config::DeskConfig;
use crate::context::PageContext;
use crate::debounce::Debouncer;
use crate::ui::app::DeskApplication;
use crate::ui::form::ContactForm;
use crate::ui::scroll::SectionScroller;
use crate::ui::surface::{GlibTimers, GtkSurface};
use crate::viewport::is_in_viewport;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::{gio, glib};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct DeskWindow {
        pub config: RefCell<DeskConfig>,
        pub context: RefCell<Option<Rc<PageContext>>>,
        pub scroller: RefCell<Option<Rc<SectionScroller>>>,
        pub cards: RefCell<Vec<gtk::Widget>>,
        pub reveal_debounce: RefCell<Option<Debouncer<(), GlibTimers>>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for DeskWindow {
        const NAME: &'static str = "SilverDeskWindow";
        type Type = super::DeskWindow;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for DeskWindow {
        fn constructed(&self) {
            self.parent_constructed();
            // NOTE: setup_ui() runs in new(), after the config is set
        }
    }

    impl WidgetImpl for DeskWindow {}
    impl WindowImpl for DeskWindow {}
    impl ApplicationWindowImpl for DeskWindow {}
    impl AdwApplicationWindowImpl for DeskWindow {}
}

glib::wrapper! {
    pub struct DeskWindow(ObjectSubclass<imp::DeskWindow>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl DeskWindow {
    pub fn new(app: &DeskApplication, config: DeskConfig) -> Self {
        let window: Self = glib::Object::builder()
            .property("application", app)
            .property("title", &config.branding.title)
            .property("default-width", 1100)
            .property("default-height", 720)
            .build();

        *window.imp().config.borrow_mut() = config;
        window.setup_ui();

        window
    }

    fn setup_ui(&self) {
        let imp = self.imp();
        let config = imp.config.borrow().clone();

        // Scrollable page content
        let content_box = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(48)
            .margin_start(48)
            .margin_end(48)
            .margin_bottom(96)
            .build();

        let scrolled = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .vexpand(true)
            .child(&content_box)
            .build();

        // Overlay host for the lazily created loading node
        let overlay_host = gtk::Overlay::new();
        overlay_host.set_child(Some(&scrolled));

        let toast_overlay = adw::ToastOverlay::new();
        toast_overlay.set_child(Some(&overlay_host));

        // Page-level services behind the widget seam
        let surface = Rc::new(GtkSurface::new(toast_overlay.clone(), overlay_host.clone()));
        let context = PageContext::new(surface);

        let scroller = Rc::new(SectionScroller::new(
            scrolled.clone(),
            config.page.header_offset,
            config.page.scroll_duration_ms,
        ));

        // Sections
        let hero = self.build_hero(&config);
        let intro = self.build_intro();
        let services = self.build_services(&config);
        let contact = self.build_contact(&context, &config);

        for (name, section) in [
            ("hero", &hero),
            ("intro", &intro),
            ("services", &services),
            ("contact", &contact),
        ] {
            content_box.append(section);
            scroller.register(name, section);
        }

        // Header bar with nav links, dropdown menu, and drawer trigger
        let header = self.build_header();

        let column = gtk::Box::new(gtk::Orientation::Vertical, 0);
        column.append(&header);
        column.append(&toast_overlay);

        // Right-edge navigation drawer
        let flap = adw::Flap::builder()
            .flap_position(gtk::PackType::End)
            .fold_policy(adw::FlapFoldPolicy::Always)
            .modal(true)
            .swipe_to_close(true)
            .reveal_flap(false)
            .build();
        flap.set_content(Some(&column));
        flap.set_flap(Some(&self.build_drawer(&flap)));

        self.wire_drawer_trigger(&header, &flap);
        self.set_content(Some(&flap));

        *imp.context.borrow_mut() = Some(context.clone());
        *imp.scroller.borrow_mut() = Some(scroller);

        // Debounced scroll-reveal for the service cards
        let debouncer = Debouncer::new(
            GlibTimers,
            Duration::from_millis(u64::from(config.page.reveal_debounce_ms)),
            glib::clone!(
                @weak self as window =>
                move |_| {
                    window.reveal_visible_cards();
                }
            ),
        );
        *imp.reveal_debounce.borrow_mut() = Some(debouncer);

        scrolled.vadjustment().connect_value_changed(glib::clone!(
            @weak self as window =>
            move |_| {
                if let Some(ref debouncer) = *window.imp().reveal_debounce.borrow() {
                    debouncer.call(());
                };
            }
        ));

        // Page-ready: welcome toast and an initial reveal pass once the
        // first layout has happened
        glib::idle_add_local_once(glib::clone!(
            @weak self as window =>
            move || {
                let welcome = window.imp().config.borrow().branding.welcome.clone();
                if let Some(ref context) = *window.imp().context.borrow() {
                    context.show_welcome(&welcome);
                }
                window.reveal_visible_cards();
            }
        ));
    }

    fn build_header(&self) -> adw::HeaderBar {
        let header = adw::HeaderBar::new();

        for (label, section) in [("About", "intro"), ("Services", "services"), ("Contact", "contact")] {
            let button = gtk::Button::builder()
                .label(label)
                .css_classes(["flat"])
                .tooltip_text(format!("Go to {label}"))
                .build();
            button.connect_clicked(glib::clone!(
                @weak self as window =>
                move |_| {
                    window.navigate_to(section);
                }
            ));
            header.pack_start(&button);
        }

        // Dropdown menu
        let menu = gio::Menu::new();
        menu.append(Some("About SilverDesk"), Some("app.about"));
        menu.append(Some("Quit"), Some("app.quit"));

        let menu_button = gtk::MenuButton::builder()
            .icon_name("view-more-symbolic")
            .menu_model(&menu)
            .tooltip_text("More")
            .build();
        header.pack_end(&menu_button);

        header
    }

    /// Drawer trigger with the original sidenav toggle semantics: one
    /// button both opens and closes, and carries `is-active` while open.
    fn wire_drawer_trigger(&self, header: &adw::HeaderBar, flap: &adw::Flap) {
        let trigger = gtk::Button::builder()
            .icon_name("open-menu-symbolic")
            .css_classes(["sidenav-trigger"])
            .tooltip_text("Menu")
            .build();

        trigger.connect_clicked(glib::clone!(
            @weak flap =>
            move |_| {
                flap.set_reveal_flap(!flap.reveals_flap());
            }
        ));

        flap.connect_reveal_flap_notify(glib::clone!(
            @weak trigger =>
            move |flap| {
                if flap.reveals_flap() {
                    trigger.add_css_class("is-active");
                } else {
                    trigger.remove_css_class("is-active");
                }
            }
        ));

        header.pack_end(&trigger);
    }

    fn build_drawer(&self, flap: &adw::Flap) -> gtk::Box {
        let drawer = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(8)
            .width_request(260)
            .css_classes(["drawer"])
            .build();

        let title = gtk::Label::builder()
            .label("Navigation")
            .css_classes(["title-4", "dim-label"])
            .margin_top(16)
            .margin_bottom(8)
            .build();
        drawer.append(&title);

        for (label, section) in [
            ("Home", "hero"),
            ("About us", "intro"),
            ("Services", "services"),
            ("Contact", "contact"),
        ] {
            let button = gtk::Button::builder()
                .label(label)
                .css_classes(["flat"])
                .build();
            button.connect_clicked(glib::clone!(
                @weak self as window,
                @weak flap =>
                move |_| {
                    flap.set_reveal_flap(false);
                    window.navigate_to(section);
                }
            ));
            drawer.append(&button);
        }

        drawer
    }

    fn build_hero(&self, config: &DeskConfig) -> gtk::Box {
        let hero = section_box(["section", "hero"]);
        hero.set_margin_top(96);
        hero.set_margin_bottom(96);

        let title = gtk::Label::builder()
            .label(&config.branding.title)
            .css_classes(["title-1"])
            .build();

        let tagline = gtk::Label::builder()
            .label(&config.branding.tagline)
            .css_classes(["title-4", "dim-label"])
            .build();

        let quote_button = gtk::Button::builder()
            .label("Request a quote")
            .css_classes(["pill", "suggested-action"])
            .halign(gtk::Align::Center)
            .margin_top(24)
            .build();
        quote_button.connect_clicked(glib::clone!(
            @weak self as window =>
            move |_| {
                window.show_quote_dialog();
            }
        ));

        // Scroll indicator: nudges the reader down without recording a
        // navigation target
        let indicator = gtk::Button::builder()
            .icon_name("go-down-symbolic")
            .css_classes(["circular", "flat", "scroll-indicator"])
            .halign(gtk::Align::Center)
            .margin_top(32)
            .tooltip_text("Scroll to learn more")
            .build();
        indicator.connect_clicked(glib::clone!(
            @weak self as window =>
            move |_| {
                if let Some(ref scroller) = *window.imp().scroller.borrow() {
                    if let Err(e) = scroller.scroll_to("intro", false) {
                        tracing::warn!("Scroll indicator target missing: {e}");
                    }
                };
            }
        ));

        hero.append(&title);
        hero.append(&tagline);
        hero.append(&quote_button);
        hero.append(&indicator);
        hero
    }

    fn build_intro(&self) -> gtk::Box {
        let intro = section_box(["section"]);

        let heading = gtk::Label::builder()
            .label("About us")
            .css_classes(["title-2"])
            .halign(gtk::Align::Start)
            .build();

        let body = gtk::Label::builder()
            .label(
                "SilverTech delivers fabrication, maintenance, and consulting \
                 services to plants across the region. Three decades on the \
                 shop floor, one point of contact.",
            )
            .wrap(true)
            .max_width_chars(70)
            .halign(gtk::Align::Start)
            .css_classes(["body"])
            .build();

        intro.append(&heading);
        intro.append(&body);
        intro
    }

    fn build_services(&self, config: &DeskConfig) -> gtk::Box {
        let section = section_box(["section"]);

        let heading = gtk::Label::builder()
            .label("Services")
            .css_classes(["title-2"])
            .halign(gtk::Align::Start)
            .build();
        section.append(&heading);

        let carousel = adw::Carousel::builder()
            .spacing(16)
            .height_request(220)
            .build();

        for service in &config.services {
            let card = gtk::Box::builder()
                .orientation(gtk::Orientation::Vertical)
                .spacing(8)
                .width_request(320)
                .css_classes(["card", "service-card"])
                .build();

            let title = gtk::Label::builder()
                .label(&service.title)
                .css_classes(["title-3"])
                .margin_top(24)
                .build();

            let summary = gtk::Label::builder()
                .label(&service.summary)
                .wrap(true)
                .max_width_chars(36)
                .css_classes(["dim-label"])
                .build();

            card.append(&title);
            card.append(&summary);
            carousel.append(&card);

            self.imp().cards.borrow_mut().push(card.upcast());
        }

        let dots = adw::CarouselIndicatorDots::builder()
            .carousel(&carousel)
            .halign(gtk::Align::Center)
            .margin_top(12)
            .build();

        section.append(&carousel);
        section.append(&dots);
        section
    }

    fn build_contact(&self, context: &Rc<PageContext>, config: &DeskConfig) -> gtk::Box {
        let section = section_box(["section"]);

        let heading = gtk::Label::builder()
            .label("Contact")
            .css_classes(["title-2"])
            .halign(gtk::Align::Start)
            .build();

        let form = ContactForm::new(context.clone(), &config.contact.service_options);
        form.set_halign(gtk::Align::Start);
        form.set_width_request(480);

        section.append(&heading);
        section.append(&form);
        section
    }

    /// Navigate to a named section, recording it as current.
    ///
    /// A missing section is inert, matching the empty-selector no-op
    /// convention the page otherwise follows.
    pub fn navigate_to(&self, section: &str) {
        if let Some(ref scroller) = *self.imp().scroller.borrow() {
            if let Err(e) = scroller.scroll_to(section, true) {
                tracing::warn!("Navigation failed: {e}");
            }
        }
    }

    fn show_quote_dialog(&self) {
        let dialog = adw::MessageDialog::new(
            Some(self),
            Some("Request a quote"),
            Some(&format!(
                "Call us on {} or use the contact form and we will get back \
                 to you within one working day.",
                crate::format::format_phone("9876543210")
            )),
        );
        dialog.add_response("close", "Close");
        dialog.add_response("contact", "Go to contact form");
        dialog.set_response_appearance("contact", adw::ResponseAppearance::Suggested);
        dialog.set_default_response(Some("contact"));
        dialog.set_close_response("close");
        dialog.connect_response(
            None,
            glib::clone!(
                @weak self as window =>
                move |_, response| {
                    if response == "contact" {
                        window.navigate_to("contact");
                    }
                }
            ),
        );
        dialog.present();
    }

    /// Mark every service card currently inside the viewport.
    fn reveal_visible_cards(&self) {
        let imp = self.imp();
        let scroller = match imp.scroller.borrow().clone() {
            Some(scroller) => scroller,
            None => return,
        };

        let viewport = scroller.viewport();
        for card in imp.cards.borrow().iter() {
            if card.has_css_class("animate-fade-in") {
                continue;
            }
            if let Some(span) = scroller.span_of(card) {
                if is_in_viewport(span, viewport) {
                    card.add_css_class("animate-fade-in");
                }
            }
        }
    }
}

fn section_box<'a>(classes: impl IntoIterator<Item = &'a str>) -> gtk::Box {
    let classes: Vec<&str> = classes.into_iter().collect();
    gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(16)
        .css_classes(classes)
        .build()
}
