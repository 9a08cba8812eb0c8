//! Sample polynomial computations across both representations.

use quartic::prelude::*;

fn main() {
    let zero = Poly::Dense(DensePoly::zero());
    println!("zero: {zero}");

    let one = Poly::Dense(DensePoly::monomial(Integer::new(1), 0));
    println!("one: {one}");

    let two_x = Poly::Dense(DensePoly::monomial(Integer::new(2), 1));
    println!("one plus 2x: {}", one.add(&two_x));

    let minus_two_x = Poly::Dense(DensePoly::monomial(Integer::new(-2), 1));
    println!(
        "one plus 2x plus -2x: {}",
        one.add(&two_x).add(&minus_two_x)
    );

    let tiny = Poly::Sparse(SparsePoly::monomial(Integer::new(1), -100));
    println!("one plus x^-100: {}", one.add(&tiny));

    let quadratic = Poly::Sparse(SparsePoly::from_terms(vec![
        Term::new(Integer::new(4), 2),
        Term::new(Integer::new(4), 1),
        Term::new(Integer::new(1), 0),
    ]));
    println!("quadratic: {quadratic}");
    println!("quadratic doubled: {}", quadratic.scale(&Integer::new(2)));
    println!("quadratic negated: {}", quadratic.neg());

    // operations return fresh values; the operands are untouched
    let _ = one.add(&two_x);
    let _ = one.sub(&two_x);
    let _ = one.scale(&Integer::new(5));
    assert!(one.coeff(1) == Integer::new(0) && one.coeff(0) == Integer::new(1));
    println!("operands are immutable: one is still {one}");
}
