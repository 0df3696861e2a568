use fractal::{ParamError, Rational, farey_sequence};

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[test]
fn order_five_matches_known_sequence() {
    let expected: Vec<Rational> = [
        (0, 1),
        (1, 5),
        (1, 4),
        (1, 3),
        (2, 5),
        (1, 2),
        (3, 5),
        (2, 3),
        (3, 4),
        (4, 5),
        (1, 1),
    ]
    .iter()
    .map(|&(n, d)| Rational::new(n, d))
    .collect();

    let sequence = farey_sequence(5).expect("order 5 is valid");
    assert_eq!(sequence, expected);
}

#[test]
fn order_one_is_just_the_endpoints() {
    let sequence = farey_sequence(1).expect("order 1 is valid");
    assert_eq!(sequence, vec![Rational::new(0, 1), Rational::new(1, 1)]);
}

#[test]
fn sequence_is_strictly_increasing_and_reduced() {
    for order in [2, 3, 7, 12, 30] {
        let sequence = farey_sequence(order).expect("valid order");

        assert_eq!(sequence.first().copied(), Some(Rational::new(0, 1)));
        assert_eq!(sequence.last().copied(), Some(Rational::new(1, 1)));

        for term in &sequence {
            assert!(term.denom >= 1 && term.denom <= order, "denominator bound");
            assert!(term.is_reduced(), "term {term} not reduced");
        }
        for pair in sequence.windows(2) {
            assert!(pair[0] < pair[1], "sequence not strictly increasing");
        }
    }
}

#[test]
fn sequence_length_matches_totient_sum() {
    // |F_n| = 1 + sum of Euler's totient over 1..=n.
    let totients = [1, 1, 2, 2, 4, 2, 6, 4];
    let expected_len = 1 + totients.iter().sum::<i64>() as usize;
    let sequence = farey_sequence(8).expect("order 8 is valid");
    assert_eq!(sequence.len(), expected_len);
}

#[test]
fn contains_every_reduced_fraction_up_to_order() {
    let order = 12;
    let sequence = farey_sequence(order).expect("valid order");
    for denom in 1..=order {
        for numer in 0..=denom {
            if gcd(numer, denom) == 1 {
                let frac = Rational::new(numer, denom);
                assert!(sequence.contains(&frac), "missing {frac}");
            }
        }
    }
}

#[test]
fn rejects_orders_below_one() {
    for order in [0, -1, -100] {
        assert!(matches!(
            farey_sequence(order),
            Err(ParamError::InvalidOrder(o)) if o == order
        ));
    }
}
