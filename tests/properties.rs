// ============================================================================
// Property Tests
// Invariants that must hold for any amount, scale and ratio set
// ============================================================================

use num_bigint::BigInt;
use proptest::prelude::*;
use quickcheck::quickcheck;
use rust_decimal::Decimal;
use scaled_money::prelude::*;

fn usd_at(amount: i64, scale: i64) -> NativeMoney {
    NativeMoney::with_scale(amount, iso::USD.to_currency::<NativeCalculator>(), scale)
        .expect("valid scale")
}

fn ratios() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1_000, 1..8).prop_filter("at least one non-zero ratio", |r| {
        r.iter().any(|ratio| *ratio != 0)
    })
}

proptest! {
    #[test]
    fn allocation_sums_to_original_native(amount in -1_000_000_000_000i64..1_000_000_000_000, ratios in ratios()) {
        let value = NativeMoney::from_minor(amount, &iso::USD);
        let parts = allocate(&value, &ratios).unwrap();

        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert_eq!(parts.iter().map(|m| *m.amount()).sum::<i64>(), amount);

        // A zero ratio never receives anything
        for (part, ratio) in parts.iter().zip(&ratios) {
            if *ratio == 0 {
                prop_assert_eq!(*part.amount(), 0);
            }
        }
    }

    #[test]
    fn allocation_sums_to_original_bigint(digits in "[1-9][0-9]{19,38}", ratios in ratios()) {
        let amount: BigInt = digits.parse().unwrap();
        let value = BigMoney::new(amount.clone(), iso::USD.to_currency::<BigIntCalculator>()).unwrap();
        let ratios: Vec<BigInt> = ratios.into_iter().map(BigInt::from).collect();

        let parts = allocate(&value, &ratios).unwrap();
        let total = parts.iter().fold(BigInt::from(0), |acc, m| acc + m.amount());
        prop_assert_eq!(total, amount);
    }

    #[test]
    fn allocation_sums_to_original_decimal(amount in -1_000_000_000i64..1_000_000_000, ratios in ratios()) {
        let value = DecimalMoney::from_minor(amount, &iso::USD);
        let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();

        let parts = allocate(&value, &ratios).unwrap();
        let total: Decimal = parts.iter().map(|m| *m.amount()).sum();
        prop_assert_eq!(total, Decimal::from(amount));
    }

    #[test]
    fn trimming_is_idempotent(amount in -1_000_000_000i64..1_000_000_000, scale in 2i64..9) {
        let value = usd_at(amount, scale);
        let once = trim_scale(&value, None).unwrap();
        let twice = trim_scale(&once, None).unwrap();

        prop_assert_eq!(once.amount(), twice.amount());
        prop_assert_eq!(once.scale(), twice.scale());
        prop_assert!(*once.scale() >= 2 && once.scale() <= value.scale());
        prop_assert!(equal(&once, &value));
    }

    #[test]
    fn normalization_preserves_value(a in -1_000_000i64..1_000_000, sa in 0i64..6, b in -1_000_000i64..1_000_000, sb in 0i64..6) {
        let x = usd_at(a, sa);
        let y = usd_at(b, sb);
        let (nx, ny, common) = normalize(&x, &y).unwrap();

        prop_assert_eq!(common, sa.max(sb));
        prop_assert!(equal(&nx, &x));
        prop_assert!(equal(&ny, &y));
    }

    #[test]
    fn rounding_lands_between_floor_and_ceiling(amount in -1_000_000i64..1_000_000, divisor in 1i64..1_000) {
        let value = NativeMoney::from_minor(amount, &iso::USD);
        let floor = *divide(&value, &divisor, RoundingMode::Down).unwrap().amount();
        let ceiling = *divide(&value, &divisor, RoundingMode::Up).unwrap().amount();

        prop_assert!(ceiling - floor <= 1);
        for mode in [
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::HalfOdd,
            RoundingMode::HalfTowardsZero,
            RoundingMode::HalfAwayFromZero,
        ] {
            let rounded = *divide(&value, &divisor, mode).unwrap().amount();
            prop_assert!(floor <= rounded && rounded <= ceiling);
        }
    }
}

// ============================================================================
// Sign symmetry
// ============================================================================

#[test]
fn addition_is_sign_symmetric() {
    fn property(a: i32, b: i32) -> bool {
        let x = NativeMoney::from_minor(i64::from(a), &iso::USD);
        let y = NativeMoney::from_minor(i64::from(b), &iso::USD);
        let sum = add(&x, &y).unwrap();
        let negated = add(&negate(&x).unwrap(), &negate(&y).unwrap()).unwrap();
        equal(&negate(&sum).unwrap(), &negated)
    }
    quickcheck(property as fn(i32, i32) -> bool);
}

#[test]
fn symmetric_modes_mirror_negation() {
    fn property(a: i32, d: u16) -> bool {
        let divisor = i64::from(d) + 1;
        let x = NativeMoney::from_minor(i64::from(a), &iso::USD);
        let minus_x = negate(&x).unwrap();

        [
            RoundingMode::HalfEven,
            RoundingMode::HalfOdd,
            RoundingMode::HalfTowardsZero,
            RoundingMode::HalfAwayFromZero,
        ]
        .into_iter()
        .all(|mode| {
            let positive = divide(&x, &divisor, mode).unwrap();
            let negative = divide(&minus_x, &divisor, mode).unwrap();
            *negative.amount() == -*positive.amount()
        })
    }
    quickcheck(property as fn(i32, u16) -> bool);
}
