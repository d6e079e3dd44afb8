#[cfg(test)]
mod macros;
mod prime;

#[cfg(test)]
pub(crate) use self::macros::each_strategy;
pub(crate) use self::prime::is_prime;
pub(crate) use self::prime::next_prime;
