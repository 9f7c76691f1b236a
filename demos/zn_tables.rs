//! Integers modulo n
//!
//! This example demonstrates:
//! - Building (Z/nZ, +, *) from the ready-made modular operators
//! - Querying neutral elements and inverses
//! - Telling rings from fields
//!
//! Run with: cargo run --example zn_tables

use algebraic_structures::modular::integers_mod;
use algebraic_structures::{Field, TwoOperators};

fn main() {
    for n in [5u64, 6] {
        let zn = integers_mod(n);
        println!("=== Z/{} ===\n", n);

        print!("  * |");
        for b in zn.elements() {
            print!(" {}", b);
        }
        println!();
        for a in zn.elements() {
            print!("  {} |", a);
            for b in zn.elements() {
                print!(" {}", zn.multiplication().apply(a, b));
            }
            println!();
        }

        let (zero, one) = zn.neutral_elements();
        println!("\n  zero = {:?}, one = {:?}", zero, one);
        for x in zn.elements() {
            // Members of the structure always have an answer.
            if let Ok((neg, inv)) = zn.find_inverses(x) {
                println!("  -{} = {:?}, {}^-1 = {:?}", x, neg, x, inv);
            }
        }

        match zn.check() {
            Ok(()) => println!("  ring: yes"),
            Err(v) => println!("  ring: no ({})", v),
        }
        let field = Field::try_from(zn.into_structure()).map(|f| f.is_valid());
        println!("  field: {}\n", if field == Ok(true) { "yes" } else { "no" });
    }
}
