use std::cmp::Ordering;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Checks the heap property over a tree laid out in array order.
pub fn is_heap<P, C>(data: &[P], comparator: C) -> bool
where
    C: Fn(&P, &P) -> Ordering,
{
    (1..data.len()).all(|i| comparator(&data[(i - 1) / 2], &data[i]) != Ordering::Greater)
}
