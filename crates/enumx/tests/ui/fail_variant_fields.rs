use enumx::Enumeration;

#[derive(Enumeration)]
enum Shape {
    Circle(f64),
    Empty,
}

fn main() {}
