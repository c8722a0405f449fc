use enumx::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
#[enumeration(display)]
enum Keyword {
    r#Type,
    r#Match = 40,
    Loop = -3,
}

fn main() {
    assert_eq!(Keyword::r#Type.name(), "Type");
    assert_eq!(Keyword::r#Match.code(), 40);
    assert_eq!(Keyword::Loop.to_string(), "Loop");
    assert_eq!(enumx::parse::<Keyword>("match").unwrap(), Keyword::r#Match);
    assert_eq!(enumx::cast(-3, Keyword::r#Type), Keyword::Loop);
    assert_eq!(Keyword::default_value(), Keyword::r#Type);
}
