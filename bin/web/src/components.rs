//! Components shared by every page.

pub mod chrome;
pub mod field;
pub mod guard;
pub mod redirect;

pub use chrome::Shell;
pub use field::{Feedback, Field};
pub use guard::Guarded;
pub use redirect::RedirectListener;
