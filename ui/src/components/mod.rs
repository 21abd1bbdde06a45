//! User Interface Components
//!
//! - **forms**: the login styles and organization identity provider panels
//! - **display**: alerts and loading indicators
//! - **input**: validated inputs, selects and the color picker

pub mod display;
pub mod forms;
pub mod input;
