//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use quartic_integers::Integer;

    use crate::dense::DensePoly;
    use crate::poly::{Poly, Polynomial};
    use crate::sparse::SparsePoly;
    use crate::term::Term;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Integer> {
        (-50i64..50i64).prop_map(Integer::new)
    }

    // Strategy for generating dense polynomials of degree < 6
    fn dense_poly() -> impl Strategy<Value = DensePoly> {
        proptest::collection::vec(small_coeff(), 0..6).prop_map(DensePoly::from_coeffs)
    }

    // Strategy for generating sparse polynomials, negative exponents included
    fn sparse_poly() -> impl Strategy<Value = SparsePoly> {
        proptest::collection::vec((small_coeff(), -8i64..=8), 0..6).prop_map(|pairs| {
            SparsePoly::from_terms(pairs.into_iter().map(|(c, e)| Term::new(c, e)).collect())
        })
    }

    // Strategy for generating either representation behind the contract
    fn any_poly() -> impl Strategy<Value = Poly> {
        prop_oneof![
            dense_poly().prop_map(Poly::Dense),
            sparse_poly().prop_map(Poly::Sparse),
        ]
    }

    proptest! {
        #[test]
        fn add_commutative(a in any_poly(), b in any_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative_sparse(a in sparse_poly(), b in sparse_poly(), c in sparse_poly()) {
            prop_assert_eq!(
                a.add_sparse(&b).add_sparse(&c),
                a.add_sparse(&b.add_sparse(&c))
            );
        }

        #[test]
        fn add_identity(a in any_poly()) {
            let zero = Poly::Sparse(SparsePoly::zero());
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn add_inverse(a in any_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn sub_self_is_zero(a in any_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn scale_by_zero_is_zero(a in any_poly()) {
            prop_assert!(a.scale(&Integer::zero()).is_zero());
        }

        #[test]
        fn scale_by_one_is_identity(a in any_poly()) {
            prop_assert_eq!(a.scale(&Integer::one()), a);
        }

        #[test]
        fn neg_is_involution(a in any_poly()) {
            prop_assert_eq!(a.neg().neg(), a);
        }

        #[test]
        fn canonical_after_add(a in any_poly(), b in any_poly()) {
            prop_assert!(a.add(&b).is_well_formed());
        }

        #[test]
        fn canonical_after_scale(a in any_poly(), factor in -20i64..20i64) {
            prop_assert!(a.scale(&Integer::new(factor)).is_well_formed());
        }

        #[test]
        fn add_agrees_with_pointwise_coefficients(a in any_poly(), b in any_poly()) {
            let sum = a.add(&b);
            for exp in -10i64..=10 {
                prop_assert_eq!(sum.coeff(exp), a.coeff(exp) + b.coeff(exp));
            }
        }

        #[test]
        fn operands_survive_arithmetic(a in any_poly(), b in any_poly()) {
            let before: Vec<Integer> = (-10i64..=10).map(|e| a.coeff(e)).collect();
            let _ = a.add(&b);
            let _ = a.sub(&b);
            let _ = a.scale(&Integer::new(3));
            let _ = a.neg();
            let after: Vec<Integer> = (-10i64..=10).map(|e| a.coeff(e)).collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn cross_representation_round_trip(a in dense_poly()) {
            let s = SparsePoly::from(&a);
            prop_assert!(s.is_well_formed());
            // identical canonical text, identical polynomial
            prop_assert_eq!(a.to_string(), s.to_string());
            prop_assert_eq!(Poly::Dense(a.clone()), Poly::Sparse(s.clone()));

            let back = DensePoly::try_from(&s).unwrap();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn mixed_addition_matches_sparse_addition(a in dense_poly(), b in sparse_poly()) {
            let via_fold = Poly::Dense(a.clone()).add(&Poly::Sparse(b.clone()));
            let via_merge = SparsePoly::from(&a).add_sparse(&b);
            prop_assert_eq!(via_fold, Poly::Sparse(via_merge));
        }

        #[test]
        fn exponent_range_brackets_support(a in sparse_poly()) {
            if !a.is_zero() {
                prop_assert!(a.min_exponent() <= a.max_exponent());
                prop_assert!(!a.coeff(a.min_exponent()).is_zero());
                prop_assert!(!a.coeff(a.max_exponent()).is_zero());
            } else {
                prop_assert_eq!(a.min_exponent(), 0);
                prop_assert_eq!(a.max_exponent(), 0);
            }
        }
    }
}
