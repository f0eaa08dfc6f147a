//! Contact Form - name, email, phone, service select, and message.
//!
//! Implements the `FormSource` seam so `PageContext::validate_form`
//! drives the validation rules; the outcome is painted back by toggling
//! the `invalid` CSS class per field. Submission shows the loading
//! overlay, then a success toast.

use crate::context::{FormSource, PageContext};
use crate::format::format_phone;
use crate::validate::{FieldInput, FieldKind, FormReport};
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Registry id the form is reachable under on the page context.
pub const CONTACT_FORM_ID: &str = "contact";

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct ContactForm {
        // Weak: the context's form registry holds the form strongly
        pub context: RefCell<Option<Weak<PageContext>>>,
        pub name_entry: RefCell<Option<gtk::Entry>>,
        pub email_entry: RefCell<Option<gtk::Entry>>,
        pub phone_entry: RefCell<Option<gtk::Entry>>,
        pub service_select: RefCell<Option<gtk::DropDown>>,
        pub message_view: RefCell<Option<gtk::TextView>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ContactForm {
        const NAME: &'static str = "SilverContactForm";
        type Type = super::ContactForm;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for ContactForm {
        fn constructed(&self) {
            self.parent_constructed();
            // NOTE: setup_ui() runs in new(), after the context is set
        }
    }

    impl WidgetImpl for ContactForm {}
    impl BoxImpl for ContactForm {}
}

glib::wrapper! {
    pub struct ContactForm(ObjectSubclass<imp::ContactForm>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ContactForm {
    pub fn new(context: Rc<PageContext>, service_options: &[String]) -> Self {
        let obj: Self = glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("spacing", 12)
            .build();

        *obj.imp().context.borrow_mut() = Some(Rc::downgrade(&context));
        obj.setup_ui(service_options);

        context.register_form(CONTACT_FORM_ID, Rc::new(obj.clone()));

        obj
    }

    fn setup_ui(&self, service_options: &[String]) {
        let imp = self.imp();

        let name_entry = gtk::Entry::builder()
            .placeholder_text("Your name")
            .build();

        let email_entry = gtk::Entry::builder()
            .placeholder_text("Email address")
            .input_purpose(gtk::InputPurpose::Email)
            .build();

        let phone_entry = gtk::Entry::builder()
            .placeholder_text("Phone (optional)")
            .input_purpose(gtk::InputPurpose::Phone)
            .tooltip_text("10-digit mobile numbers are formatted as +91")
            .build();

        // Reformat the phone number once the user leaves the field
        let focus = gtk::EventControllerFocus::new();
        focus.connect_leave(glib::clone!(
            @weak phone_entry =>
            move |_| {
                let formatted = format_phone(&phone_entry.text());
                phone_entry.set_text(&formatted);
            }
        ));
        phone_entry.add_controller(focus);

        let options: Vec<&str> = service_options.iter().map(String::as_str).collect();
        let service_select = gtk::DropDown::from_strings(&options);
        service_select.set_tooltip_text(Some("Service required"));

        let message_view = gtk::TextView::builder()
            .wrap_mode(gtk::WrapMode::WordChar)
            .height_request(120)
            .top_margin(8)
            .bottom_margin(8)
            .left_margin(8)
            .right_margin(8)
            .build();

        let message_frame = gtk::Frame::builder()
            .child(&message_view)
            .build();

        let submit_button = gtk::Button::builder()
            .label("Send message")
            .css_classes(["pill", "suggested-action"])
            .halign(gtk::Align::Start)
            .margin_top(8)
            .build();

        submit_button.connect_clicked(glib::clone!(
            @weak self as form =>
            move |_| {
                form.submit();
            }
        ));

        self.append(&field_row("Name", &name_entry));
        self.append(&field_row("Email", &email_entry));
        self.append(&field_row("Phone", &phone_entry));
        self.append(&field_row("Service", &service_select));
        self.append(&field_row("Message", &message_frame));
        self.append(&submit_button);

        *imp.name_entry.borrow_mut() = Some(name_entry);
        *imp.email_entry.borrow_mut() = Some(email_entry);
        *imp.phone_entry.borrow_mut() = Some(phone_entry);
        *imp.service_select.borrow_mut() = Some(service_select);
        *imp.message_view.borrow_mut() = Some(message_view);
    }

    fn context(&self) -> Option<Rc<PageContext>> {
        self.imp().context.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn entry_text(slot: &RefCell<Option<gtk::Entry>>) -> String {
        slot.borrow()
            .as_ref()
            .map(|entry| entry.text().to_string())
            .unwrap_or_default()
    }

    fn message_text(&self) -> String {
        self.imp()
            .message_view
            .borrow()
            .as_ref()
            .map(|view| {
                let buffer = view.buffer();
                buffer
                    .text(&buffer.start_iter(), &buffer.end_iter(), false)
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// Validate and, if clean, simulate dispatch with the loading overlay.
    pub fn submit(&self) {
        let context = match self.context() {
            Some(context) => context,
            None => return,
        };

        if !context.validate_form(CONTACT_FORM_ID) {
            context.show_error("Please correct the highlighted fields");
            return;
        }

        context.show_loading("Sending your message...");

        let form = self.clone();
        glib::spawn_future_local(async move {
            // No backend is wired up; hold the overlay briefly so the
            // submission reads as acknowledged.
            glib::timeout_future(std::time::Duration::from_millis(1200)).await;

            let context = match form.context() {
                Some(context) => context,
                None => return,
            };
            context.hide_loading();
            context.show_success("Thanks! We will be in touch shortly.");
            form.reset();
        });
    }

    /// Clear every field and any invalid markers.
    pub fn reset(&self) {
        let imp = self.imp();

        for slot in [&imp.name_entry, &imp.email_entry, &imp.phone_entry] {
            if let Some(ref entry) = *slot.borrow() {
                entry.set_text("");
                entry.remove_css_class("invalid");
            }
        }

        if let Some(ref view) = *imp.message_view.borrow() {
            view.buffer().set_text("");
            view.remove_css_class("invalid");
        }

        if let Some(ref select) = *imp.service_select.borrow() {
            select.set_selected(0);
        }
    }

    fn set_field_validity(widget: Option<&gtk::Widget>, valid: bool) {
        if let Some(widget) = widget {
            if valid {
                widget.remove_css_class("invalid");
            } else {
                widget.add_css_class("invalid");
            }
        }
    }
}

impl FormSource for ContactForm {
    fn fields(&self) -> Vec<FieldInput> {
        let imp = self.imp();
        vec![
            FieldInput::new(
                "name",
                &Self::entry_text(&imp.name_entry),
                true,
                FieldKind::Text,
            ),
            FieldInput::new(
                "email",
                &Self::entry_text(&imp.email_entry),
                true,
                FieldKind::Email,
            ),
            FieldInput::new(
                "phone",
                &Self::entry_text(&imp.phone_entry),
                false,
                FieldKind::Text,
            ),
            FieldInput::new("message", &self.message_text(), true, FieldKind::Text),
        ]
    }

    fn apply_report(&self, report: &FormReport) {
        let imp = self.imp();

        for (name, slot) in [
            ("name", &imp.name_entry),
            ("email", &imp.email_entry),
            ("phone", &imp.phone_entry),
        ] {
            if let Some(valid) = report.field(name) {
                let widget = slot.borrow();
                Self::set_field_validity(
                    widget.as_ref().map(|entry| entry.upcast_ref::<gtk::Widget>()),
                    valid,
                );
            }
        }

        if let Some(valid) = report.field("message") {
            let view = imp.message_view.borrow();
            Self::set_field_validity(
                view.as_ref().map(|view| view.upcast_ref::<gtk::Widget>()),
                valid,
            );
        }
    }
}

/// Label + input pair, stacked vertically.
fn field_row(label: &str, input: &impl IsA<gtk::Widget>) -> gtk::Box {
    let caption = gtk::Label::builder()
        .label(label)
        .halign(gtk::Align::Start)
        .css_classes(["caption", "dim-label"])
        .build();

    let row = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .build();
    row.append(&caption);
    row.append(input);
    row
}
