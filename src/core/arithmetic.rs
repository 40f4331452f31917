/// Sum of `a` and `b`. Overflow wraps.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn hello(name: &str) -> String {
    format!("Hello, {}!", name)
}
