pub mod direction_toggle;
pub use direction_toggle::DirectionToggle;

pub mod source_form;
pub use source_form::SourceForm;
