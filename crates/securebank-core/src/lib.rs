// UI modules
pub mod button;
pub mod class;
pub mod error;
pub mod header;
pub mod markup;
pub mod page;

pub use button::{button, button_class, ButtonProps, ButtonSize, ButtonVariant};
pub use class::merge_classes;
pub use error::{Result, UiError};
pub use header::bank_header;
pub use markup::{Element, Node};
pub use page::{document, landing_page};
