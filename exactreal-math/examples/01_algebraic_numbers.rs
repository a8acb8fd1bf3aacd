//! # Real Algebraic Numbers Example
//!
//! This example walks through the exact real arithmetic kernel.
//! It covers:
//! - Interval arithmetic with typed bounds, including division through zero
//! - Isolating the roots of a polynomial with its Sturm sequence
//! - Comparing, signing and branching on irrational roots
//!
//! ## Applications
//! - Non-linear real arithmetic (NRA)
//! - Cylindrical algebraic decomposition (CAD) sample points
//! - Branch-and-bound over algebraic assignments

use exactreal_math::{
    AlgebraicManager, ExactInterval, IntervalSplit, Polynomial, RefinementConfig, SturmSequence,
};
use num_bigint::BigInt;
use num_rational::BigRational;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Exact Real Arithmetic ===\n");

    // Intervals
    let a = ExactInterval::closed(rat(1), rat(2))?;
    let b = ExactInterval::open(rat(-1), rat(3))?;
    println!("a = {}, b = {}", a, b);
    println!("a + b = {}", a.add(&b));
    println!("a * b = {}", a.mul(&b));
    println!("b^2 = {}", b.power(2));
    match a.div_ext(&b) {
        IntervalSplit::Single(q) => println!("a / b = {}", q),
        IntervalSplit::Split(lo, hi) => println!("a / b = {} u {}", lo, hi),
    }
    if let Err(e) = a.div(&b) {
        println!("a.div(b) fails: {}", e);
    }

    // Root isolation
    let p = Polynomial::from_integers(&[2, 0, -4, 0, 1]); // x^4 - 4x^2 + 2
    let sturm = SturmSequence::new(&p);
    println!("\np = {}", p);
    println!(
        "real roots: {}",
        sturm.count_roots(&ExactInterval::unbounded_interval())
    );

    let config = RefinementConfig::default().with_precision_bits(30);
    let mut manager = AlgebraicManager::new(config);

    let mut roots = Vec::new();
    for (l, r) in [(-2, -1), (-1, 0), (0, 1), (1, 2)] {
        roots.push(manager.create_root_between(p.clone(), rat(l), rat(r), true)?);
    }

    for root in &mut roots {
        let sign = manager.sgn(root);
        let branch = manager.branching_point(root)?;
        manager.refine_to_precision(root)?;
        println!(
            "root {} sign {} branch at {} approx {}",
            root,
            sign,
            branch,
            root.approximate_value()
        );
    }

    // sqrt(2 + sqrt(2)) against sqrt(3)
    let mut largest = roots.pop().ok_or("no roots")?;
    let three = Polynomial::from_integers(&[-3, 0, 1]);
    let mut sqrt3 = manager.create_root_between(three, rat(1), rat(2), true)?;
    println!(
        "\nlargest root vs sqrt(3): {:?}",
        manager.compare(&mut largest, &mut sqrt3)?
    );

    println!("\nstats: {:?}", manager.stats());
    Ok(())
}
