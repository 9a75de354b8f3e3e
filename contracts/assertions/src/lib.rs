//! Assertion helpers that turn a failed check into a `ProgramError`.

use pinocchio::{program_error::ProgramError, ProgramResult};

/// Compares two byte slices of an expected length.
#[inline(always)]
pub fn assert_bytes_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    left.len() == len && right.len() == len && left == right
}

macro_rules! sol_assert {
  ($func_name:ident, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E: Into<ProgramError>>($($param: $type,)* error: E) -> ProgramResult {
          if $check {
              Ok(())
          } else {
              Err(error.into())
          }
      }
  };
}

macro_rules! sol_assert_return {
  ($func_name:ident, $return_type:ty, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E: Into<ProgramError>>($($param: $type,)* error: E) -> Result<$return_type, ProgramError> {
          match $check {
              Some(value) => Ok(value),
              None => Err(error.into()),
          }
      }
  };
}

sol_assert!(check_condition, condition: bool |
  condition
);

sol_assert!(check_nonzero, value: u64 |
  value != 0
);

sol_assert!(check_at_most, value: u64, limit: u64 |
  value <= limit
);

// Remaining lifetime in seconds; `None` once `now` reaches `expires_at`.
sol_assert_return!(check_not_expired, u64, now: u64, expires_at: u64 |
  expires_at.checked_sub(now).filter(|remaining| *remaining > 0)
);

sol_assert_return!(check_checked_add, u64, left: u64, right: u64 |
  left.checked_add(right)
);

#[inline(always)]
pub fn check_some<T, E: Into<ProgramError>>(value: Option<T>, error: E) -> Result<T, ProgramError> {
    value.ok_or_else(|| error.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_eq_requires_length() {
        assert!(assert_bytes_eq(&[1, 2], &[1, 2], 2));
        assert!(!assert_bytes_eq(&[1, 2], &[1, 2], 3));
        assert!(!assert_bytes_eq(&[1, 2], &[1, 3], 2));
    }

    #[test]
    fn test_not_expired_boundary() {
        assert_eq!(check_not_expired(99, 100, ProgramError::InvalidArgument), Ok(1));
        assert_eq!(
            check_not_expired(100, 100, ProgramError::InvalidArgument),
            Err(ProgramError::InvalidArgument)
        );
        assert_eq!(
            check_not_expired(200, 100, ProgramError::InvalidArgument),
            Err(ProgramError::InvalidArgument)
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(
            check_checked_add(u64::MAX, 1, ProgramError::ArithmeticOverflow),
            Err(ProgramError::ArithmeticOverflow)
        );
    }
}
