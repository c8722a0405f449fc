use enumx::Enumeration;

#[derive(Enumeration)]
enum Level {
    #[enumeration(default)]
    Low,
    #[enumeration(default)]
    High,
}

fn main() {}
