use enumx::Enumeration;

#[derive(Enumeration)]
struct Weekday {
    day: u8,
}

fn main() {}
