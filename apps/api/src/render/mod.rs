// Page assembly: literal placeholder substitution into a fixed HTML skeleton.
// No escaping or re-parsing happens here; model output is inserted as-is.

pub mod page;
pub mod placeholders;
