pub mod login_styles_form;
pub mod org_identity_providers_form;
pub mod save_reset;

pub use login_styles_form::*;
pub use org_identity_providers_form::*;
pub use save_reset::*;
