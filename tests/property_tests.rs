use proptest::prelude::*;
use sequence_ops::{Record, ops, sort};

fn arb_record() -> impl Strategy<Value = Record> {
    (0..120_i32, "[a-z]{1,8}").prop_map(|(age, name)| Record::new(age, name))
}

fn arb_sequence() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..64)
}

proptest! {
    #[test]
    fn filtered_elements_all_satisfy_the_predicate(seq in arb_sequence(), cutoff in 0..120_i32) {
        let kept = ops::filter(&seq, |r| r.age > cutoff);
        prop_assert!(ops::all_match(&kept, |r| r.age > cutoff));
    }

    #[test]
    fn take_while_and_drop_while_reconstruct_the_input(seq in arb_sequence(), cutoff in 0..120_i32) {
        let mut rebuilt = ops::take_while(&seq, |r| r.age < cutoff);
        rebuilt.extend(ops::drop_while(&seq, |r| r.age < cutoff));
        prop_assert_eq!(rebuilt, seq);
    }

    #[test]
    fn sorting_by_age_is_stable(seq in arb_sequence()) {
        let indexed: Vec<(Record, usize)> =
            seq.into_iter().enumerate().map(|(i, r)| (r, i)).collect();
        let sorted = sort::sort_by_key(&indexed, |(r, _)| r.age);
        for pair in sorted.windows(2) {
            let ((a, ai), (b, bi)) = (&pair[0], &pair[1]);
            prop_assert!(a.age <= b.age);
            if a.age == b.age {
                prop_assert!(ai < bi);
            }
        }
    }

    #[test]
    fn set_materialization_never_grows(seq in arb_sequence()) {
        let set = ops::to_set(&seq);
        prop_assert!(set.len() <= seq.len());
        for r in &seq {
            prop_assert!(set.contains(r));
        }
    }

    #[test]
    fn limit_never_exceeds_length_or_n(seq in arb_sequence(), n in 0..100_usize) {
        let out = ops::limit(&seq, n);
        prop_assert_eq!(out.len(), n.min(seq.len()));
        prop_assert_eq!(&out[..], &seq[..out.len()]);
    }

    #[test]
    fn reduce_over_ages_equals_iterator_sum(seq in arb_sequence()) {
        let total = ops::reduce(&seq, 0_i64, |acc, r| acc + i64::from(r.age));
        let expected: i64 = seq.iter().map(|r| i64::from(r.age)).sum();
        prop_assert_eq!(total, expected);
    }
}
