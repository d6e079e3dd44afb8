macro_rules! each_strategy {
  ($expr:expr) => {
    $crate::utils::each_strategy!(
      @impl $expr,
      Linear, Quadratic, DoubleHash,
    );
  };
  (@impl $expr:expr, $($probe:ident),+ $(,)?) => {
    $(
      $crate::utils::each_strategy!(@run $expr, $probe);
    )+
  };
  (@run $expr:expr, $probe:ident) => {{
    const PROBE: $crate::probe::Probe = $crate::probe::Probe::$probe;
    $expr
  }};
}

pub(crate) use each_strategy;
