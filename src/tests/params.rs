use core::num::NonZeroUsize;

use crate::params::Capacity;
use crate::params::ConstParams;
use crate::params::DefaultParams;
use crate::params::LoadFactor;
use crate::params::Params;
use crate::params::ParamsExt;
use crate::utils::is_prime;

#[test]
fn test_capacity_min() {
  for value in [0, 1, 2] {
    assert_eq!(
      Capacity::new(value),
      Capacity::MIN,
      "invalid capacity: expected clamp to MIN",
    );
  }
}

#[test]
fn test_capacity_max() {
  assert_eq!(
    Capacity::new(usize::MAX),
    Capacity::MAX,
    "invalid capacity: expected clamp to MAX",
  );

  assert!(is_prime(Capacity::MAX.as_usize()));
  assert!(u32::try_from(Capacity::MAX.as_usize()).is_ok());
}

#[test]
fn test_capacity_round_up() {
  assert_eq!(
    Capacity::new(10).as_usize(),
    11,
    "invalid capacity: expected round up",
  );

  assert_eq!(
    Capacity::new(1000).as_usize(),
    1009,
    "invalid capacity: expected round up",
  );
}

#[test]
fn test_capacity_exact() {
  for value in [2, 3, 5, 7, 11, 13, 7919] {
    assert_eq!(
      Capacity::new(value).as_usize(),
      value,
      "invalid capacity: expected no change",
    );
  }
}

#[test]
fn test_capacity_is_always_prime() {
  for value in 0..2000 {
    assert!(
      is_prime(Capacity::new(value).as_usize()),
      "invalid capacity: {value} produced a composite",
    );
  }
}

#[test]
fn test_capacity_exact_rejects_composites() {
  assert_eq!(Capacity::exact(11), Some(Capacity::new(11)));
  assert_eq!(Capacity::exact(0), None);
  assert_eq!(Capacity::exact(1), None);
  assert_eq!(Capacity::exact(12), None);
  assert_eq!(Capacity::exact(usize::MAX), None);
}

#[test]
fn test_capacity_grow() {
  let sequence: [usize; 6] = [5, 11, 23, 47, 97, 197];

  for pair in sequence.windows(2) {
    assert_eq!(
      Capacity::new(pair[0]).grow().map(Capacity::as_usize),
      Some(pair[1]),
      "invalid growth from {}",
      pair[0],
    );
  }
}

#[test]
fn test_capacity_grow_at_least_doubles() {
  let mut capacity: Capacity = Capacity::MIN;

  while let Some(next) = capacity.grow() {
    assert!(next.as_usize() >= capacity.as_usize() * 2);
    assert!(is_prime(next.as_usize()));
    capacity = next;
  }

  assert!(capacity.as_usize() > Capacity::MAX.as_usize() / 2);
}

#[test]
fn test_capacity_debug() {
  assert_eq!(format!("{:?}", Capacity::new(10)), "11");
}

#[test]
fn test_load_factor_clamp() {
  assert_eq!(LoadFactor::new(0), LoadFactor::MIN);
  assert_eq!(LoadFactor::new(100), LoadFactor::MAX);
  assert_eq!(LoadFactor::new(u8::MAX), LoadFactor::MAX);
  assert_eq!(LoadFactor::new(60), LoadFactor::DEF);
  assert_eq!(LoadFactor::default().as_percent(), 60);
}

#[test]
fn test_load_factor_threshold() {
  let factor: LoadFactor = LoadFactor::DEF;

  assert!(!factor.is_reached(2, 5));
  assert!(factor.is_reached(3, 5));
  assert!(factor.is_reached(4, 5));
  assert!(!factor.is_reached(6, 11));
  assert!(factor.is_reached(7, 11));
  assert!((factor.as_f64() - 0.6).abs() < f64::EPSILON);
}

#[test]
fn test_default_params() {
  assert_eq!(DefaultParams::MAX_LOAD, LoadFactor::DEF);
  assert_eq!(DefaultParams::DOUBLE_HASH_MAX.get(), 8);
}

#[test]
fn test_const_params() {
  type P = ConstParams<75, 4>;
  type Z = ConstParams<0, 0>;

  assert_eq!(P::MAX_LOAD.as_percent(), 75);
  assert_eq!(P::DOUBLE_HASH_MAX.get(), 4);

  assert_eq!(Z::MAX_LOAD, LoadFactor::MIN);
  assert_eq!(Z::DOUBLE_HASH_MAX, NonZeroUsize::MIN);
}

#[test]
fn test_stride_bound() {
  assert_eq!(DefaultParams::stride_bound(Capacity::new(2)).get(), 1);
  assert_eq!(DefaultParams::stride_bound(Capacity::new(5)).get(), 4);
  assert_eq!(DefaultParams::stride_bound(Capacity::new(7)).get(), 6);
  assert_eq!(DefaultParams::stride_bound(Capacity::new(11)).get(), 8);
  assert_eq!(DefaultParams::stride_bound(Capacity::MAX).get(), 8);
}

#[test]
fn test_exceeds_load() {
  assert!(!DefaultParams::exceeds_load(2, Capacity::new(5)));
  assert!(DefaultParams::exceeds_load(3, Capacity::new(5)));
  assert!(!ConstParams::<99, 8>::exceeds_load(1, Capacity::MIN));
  assert!(ConstParams::<1, 8>::exceeds_load(1, Capacity::new(97)));
}

#[test]
fn test_debug_params() {
  let debug: String = format!("{:?}", DefaultParams::debug());

  assert!(debug.contains("MAX_LOAD: 60%"), "{debug}");
  assert!(debug.contains("DOUBLE_HASH_MAX: 8"), "{debug}");
}
