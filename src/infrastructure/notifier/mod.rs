mod disabled;
mod emailjs;

pub use disabled::DisabledNotifier;
pub use emailjs::{EMAILJS_SEND_URL, EmailJsNotifier, EmailJsSettings};
