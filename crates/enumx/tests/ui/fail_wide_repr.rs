use enumx::Enumeration;

#[derive(Enumeration)]
#[repr(u64)]
enum Big {
    Zero = 0,
    Max = u64::MAX,
}

fn main() {}
