#![allow(clippy::extra_unused_lifetimes)]

/// Tests to verify that certain types offered by the crate are [covariant].
///
/// [covariant]: https://doc.rust-lang.org/nomicon/subtyping.html

use circular_deque::CircularBuffer;

/// Verify that `CircularBuffer<T>` is covariant over `T`
#[test]
fn circular_buffer<'a>() {
    let buf = CircularBuffer::<&'static str>::with_capacity(1).unwrap();
    let _: CircularBuffer::<&'a str> = buf;
}

/// Verify that `Result<&T>` returned by accessors is covariant over `T`
#[test]
fn front<'a>() {
    let mut buf = CircularBuffer::<&'static str>::with_capacity(1).unwrap();
    buf.push_back("a").unwrap();
    let front: circular_deque::Result<&&'static str> = buf.front();
    let _: circular_deque::Result<&&'a str> = front;
}
