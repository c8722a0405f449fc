mod status {
    use enumx::Enumeration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
    #[enumeration(from_str)]
    #[repr(u8)]
    pub enum Status {
        Active = 1,
        #[enumeration(description = "Temporarily disabled")]
        Suspended = 2,
        #[enumeration(default)]
        Unknown = 255,
    }
}

use enumx::prelude::*;
use status::Status;

fn main() {
    assert_eq!(enumx::count::<Option<Status>>(), 3);
    assert_eq!(Status::Unknown.code(), 255);
    assert_eq!("suspended".parse::<Status>().unwrap(), Status::Suspended);
    assert_eq!(Status::Suspended.description(), Some("Temporarily disabled"));
    assert_eq!(enumx::try_parse::<Status>("gone"), Status::Unknown);
    assert!(TypeDescriptor::of::<Status>().is_enum());
}
