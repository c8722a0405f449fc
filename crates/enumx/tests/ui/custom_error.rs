use std::borrow::Cow;

#[enumx_derive::enum_error]
pub enum LoadError {
    #[error("Missing field{}: {message}", format_context(.context))]
    MissingField { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn load() -> Result<(), LoadError> {
    Err(LoadError::missing_field("seed"))
}

fn main() {
    let err = load().context("reading config").unwrap_err();
    assert_eq!(err.kind(), "MissingField");
    assert_eq!(err.message(), "seed");
    assert_eq!(err.to_string(), "Missing field (reading config): seed");
}
