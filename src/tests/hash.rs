use core::num::NonZeroUsize;

use crate::hash::KeyHash;
use crate::params::Capacity;

#[test]
fn matches_jvm_string_hash() {
  // Reference values of `String::hashCode`.
  assert_eq!(KeyHash::new(""), KeyHash::from_bits(0));
  assert_eq!(KeyHash::new("a"), KeyHash::from_bits(97));
  assert_eq!(KeyHash::new("ab"), KeyHash::from_bits(3105));
  assert_eq!(KeyHash::new("hello"), KeyHash::from_bits(99_162_322));
}

#[test]
fn negative_hash_is_made_absolute() {
  // "polygenelubricants".hashCode() == i32::MIN
  assert_eq!(KeyHash::new("polygenelubricants"), KeyHash::from_bits(1 << 31));

  // "probe sequence".hashCode() == -1762904527
  assert_eq!(KeyHash::new("probe sequence"), KeyHash::from_bits(1_762_904_527));
  assert_eq!(KeyHash::new("hello world"), KeyHash::from_bits(1_794_106_052));
}

#[test]
fn hashes_utf16_code_units() {
  // U+1F600 is the surrogate pair 0xD83D 0xDE00.
  let expected: u32 = 0xD83D * 31 + 0xDE00;

  assert_eq!(KeyHash::new("\u{1F600}"), KeyHash::from_bits(expected));
}

#[test]
fn home_slot_uses_current_capacity() {
  let hash: KeyHash = KeyHash::from_bits(100);

  assert_eq!(hash.home(Capacity::new(5)), 0);
  assert_eq!(hash.home(Capacity::new(11)), 1);
  assert_eq!(hash.home(Capacity::new(23)), 8);
  assert_eq!(hash.home(Capacity::new(101)), 100);
}

#[test]
fn home_slot_is_in_bounds() {
  for key in ["", "a", "zz", "polygenelubricants", "a longer key with spaces"] {
    for value in [2, 3, 5, 7, 11, 97, 4_294_967_291] {
      let capacity: Capacity = Capacity::new(value);
      assert!(KeyHash::new(key).home(capacity) < capacity.as_usize());
    }
  }
}

#[test]
fn stride_is_never_zero() {
  let bound: NonZeroUsize = NonZeroUsize::new(8).unwrap();

  for bits in 0..64 {
    let stride: usize = KeyHash::from_bits(bits).stride(bound);
    assert!((1..=8).contains(&stride), "stride = {stride}");
  }
}

#[test]
fn debug_transparency() {
  let hash: KeyHash = KeyHash::from_bits(123);

  assert_eq!(format!("{hash:?}"), format!("{:?}", 123_u32));
  assert_eq!(format!("{hash}"), format!("{}", 123_u32));
}
