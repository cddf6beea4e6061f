//! Shared-file pages: the recorded list and the record form.

mod form;
mod list;

pub use form::RecordForm;
pub use list::SharedList;
