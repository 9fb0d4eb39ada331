//! Helper functions shared by the components and the generator

mod date;
mod html;
mod reading;
mod url;

pub use date::*;
pub use html::*;
pub use reading::*;
pub use url::*;
