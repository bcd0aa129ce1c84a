pub mod constants;
pub mod naming;

pub use constants::*;
pub use naming::{camel_to_kebab, kebab_to_camel, names_match, strip_code_spans, to_pascal_case};
