pub mod alert_group;
pub mod loading_indicator;

pub use alert_group::*;
pub use loading_indicator::*;
