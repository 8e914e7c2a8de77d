//! Commons value types and their wire representations.
//!
//! All types here are immutable values: construct them fully, then read.
//! Each carries its own JSON contract, either as a handwritten serde impl
//! (`Locale`, `Dict`, where the wire format diverges from what a derive
//! would produce) or as a derive pinned to exact field names
//! (`LocalizedString`, `Ref`, `ValidationError`).

mod dict;
mod locale;
mod localized_string;
mod reference;
mod validation;

pub use dict::Dict;
pub use locale::Locale;
pub use localized_string::LocalizedString;
pub use reference::Ref;
pub use validation::{ErrorLevel, ValidationError};
