use enumx::Enumeration;

#[derive(Enumeration)]
enum Level {
    #[enumeration(alias = "lo")]
    Low,
}

fn main() {}
