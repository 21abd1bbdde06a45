pub mod color_picker;
pub mod form_select;
pub mod validated_input;

pub use color_picker::*;
pub use form_select::*;
pub use validated_input::*;
