//! Property-based tests for exact integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn mul_distributes_over_add(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn neg_is_involution(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!(-(-a.clone()), a);
        }

        #[test]
        fn add_inverse(a in small_int()) {
            let a = Integer::new(a);
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn sign_matches_abs(a in small_int()) {
            let a = Integer::new(a);
            // a == signum(a) * |a|
            let rebuilt = Integer::new(i64::from(a.signum())) * a.abs();
            prop_assert_eq!(rebuilt, a);
        }

        #[test]
        fn ref_ops_match_owned(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, a.clone() + b.clone());
            prop_assert_eq!(&a * &b, a.clone() * b.clone());
            prop_assert_eq!(&a - &b, a - b);
        }
    }
}
