//! SilverDesk Application - GTK4 Application Setup
//!
//! Initializes the GTK4/Libadwaita application and handles the main
//! event loop.

use crate::config::DeskConfig;
use crate::ui::window::DeskWindow;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::gio;
use std::cell::RefCell;

/// Application ID for SilverDesk
const APP_ID: &str = "in.silvertech.SilverDesk";

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct DeskApplication {
        pub config: RefCell<DeskConfig>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for DeskApplication {
        const NAME: &'static str = "SilverDeskApplication";
        type Type = super::DeskApplication;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for DeskApplication {}

    impl ApplicationImpl for DeskApplication {
        fn activate(&self) {
            let app = self.obj();
            let config = self.config.borrow().clone();

            let window = DeskWindow::new(&app, config);
            window.present();
        }

        fn startup(&self) {
            self.parent_startup();

            // Load CSS - with graceful handling for missing display
            let css_provider = gtk::CssProvider::new();
            css_provider.load_from_data(include_str!("styles.css"));

            match gtk::gdk::Display::default() {
                Some(display) => {
                    gtk::style_context_add_provider_for_display(
                        &display,
                        &css_provider,
                        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
                    );
                }
                None => {
                    // Might be running in a container or via SSH
                    tracing::warn!("No display available. CSS styling will not be applied.");
                }
            }

            let app = self.obj();
            app.setup_actions();
        }
    }

    impl GtkApplicationImpl for DeskApplication {}
    impl AdwApplicationImpl for DeskApplication {}
}

glib::wrapper! {
    pub struct DeskApplication(ObjectSubclass<imp::DeskApplication>)
        @extends adw::Application, gtk::Application, gio::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl DeskApplication {
    pub fn new(config: DeskConfig) -> Self {
        let app: Self = glib::Object::builder()
            .property("application-id", APP_ID)
            .property("flags", gio::ApplicationFlags::FLAGS_NONE)
            .build();

        *app.imp().config.borrow_mut() = config;

        app
    }

    fn setup_actions(&self) {
        // Quit action
        let quit_action = gio::SimpleAction::new("quit", None);
        quit_action.connect_activate(glib::clone!(
            @weak self as app =>
            move |_, _| {
                app.quit();
            }
        ));
        self.add_action(&quit_action);

        // About dialog, reachable from the header dropdown
        let about_action = gio::SimpleAction::new("about", None);
        about_action.connect_activate(glib::clone!(
            @weak self as app =>
            move |_, _| {
                app.show_about();
            }
        ));
        self.add_action(&about_action);

        // Set keyboard shortcuts
        self.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn show_about(&self) {
        let parent = self.active_window();
        let dialog = adw::MessageDialog::new(
            parent.as_ref(),
            Some("SilverDesk"),
            Some(&format!(
                "SilverTech Industrial Services desktop experience\nVersion {}",
                env!("CARGO_PKG_VERSION")
            )),
        );
        dialog.add_response("close", "Close");
        dialog.set_close_response("close");
        dialog.present();
    }

    pub fn run(&self) -> glib::ExitCode {
        ApplicationExtManual::run(self)
    }
}

impl Default for DeskApplication {
    fn default() -> Self {
        Self::new(DeskConfig::default())
    }
}
