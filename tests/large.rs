// Copyright © 2023, 2024 Andrea Corbellini and contributors
// SPDX-License-Identifier: BSD-3-Clause

use circular_deque::CircularBuffer;

#[cfg(not(miri))]
const SIZE: usize = 2 * 1024 * 1024; // 2 MiB

#[cfg(miri)]
const SIZE: usize = 2 * 1024; // 2 KiB

#[test]
fn large() {
    let chunk = b"abcdefghijklmnopqrstuvxyz0123456789";
    let mut buf = CircularBuffer::<u8>::with_capacity(SIZE).unwrap();
    let mut vec = Vec::new();

    assert_ne!(SIZE % chunk.len(), 0);

    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(!buf.is_full());
    assert_eq!(buf.as_slices().0, &[][..]);
    assert_eq!(buf.as_slices().1, &[][..]);

    for _ in 0..(SIZE / chunk.len()) {
        buf.extend(&chunk[..]);
        vec.extend_from_slice(&chunk[..]);

        assert_eq!(buf.len(), vec.len());
        assert!(!buf.is_empty());
        assert!(!buf.is_full());
        assert_eq!(buf.as_slices().0, &vec[..]);
        assert_eq!(buf.as_slices().1, &[][..]);
    }

    for _ in 0..(SIZE / chunk.len()) {
        buf.extend(&chunk[..]);
        vec.extend_from_slice(&chunk[..]);

        assert_eq!(buf.len(), SIZE);
        assert!(!buf.is_empty());
        assert!(buf.is_full());
        assert_eq!(buf.as_slices().0, &vec[vec.len() - SIZE..SIZE]);
        assert_eq!(buf.as_slices().1, &vec[SIZE..]);
    }

    assert!(!buf.is_linearized());
    assert_eq!(buf.linearize(), &vec[vec.len() - SIZE..]);
    assert!(buf.is_linearized());
}

#[test]
fn large_set_capacity() {
    let mut buf = CircularBuffer::<u32>::with_capacity(SIZE / 2).unwrap();
    buf.extend(0..SIZE as u32);
    assert!(buf.is_full());
    assert_eq!(buf.front(), Ok(&(SIZE as u32 / 2)));

    buf.set_capacity(SIZE).unwrap();
    assert_eq!(buf.capacity(), SIZE);
    assert_eq!(buf.len(), SIZE / 2);
    assert!(buf.is_linearized());

    buf.resize(SIZE, 7).unwrap();
    assert!(buf.is_full());
    assert_eq!(buf.front(), Ok(&(SIZE as u32 / 2)));
    assert_eq!(buf.at(SIZE / 2 - 1), Ok(&(SIZE as u32 - 1)));
    assert_eq!(buf.back(), Ok(&7));

    buf.rotate(SIZE / 2).unwrap();
    assert_eq!(buf.front(), Ok(&7));
    assert_eq!(buf.back(), Ok(&(SIZE as u32 - 1)));
}
