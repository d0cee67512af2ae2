use std::collections::HashSet;

use proptest::prelude::*;
use theatre_sim::models::Theatre;

proptest! {
    // Every grab is all-or-nothing and the occupancy moves by exactly the
    // granted amount; with no external releases the reserved seats always
    // form the contiguous prefix 1..=M.
    #[test]
    fn block_grabs_are_all_or_nothing(
        requests in proptest::collection::vec(1usize..=3, 1..60),
    ) {
        let theatre = Theatre::new(1, 20);
        let mut reserved = 0usize;

        for count in requests {
            let before = 20 - theatre.free_seats();
            prop_assert_eq!(before, reserved);

            let granted = theatre.reserve_block(count);
            let after = 20 - theatre.free_seats();

            if granted.is_empty() {
                prop_assert_eq!(after, before);
            } else {
                prop_assert_eq!(granted.len(), count);
                prop_assert_eq!(after, before + count);
                prop_assert!(granted.windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert!(granted.iter().all(|seat| (1..=20).contains(seat)));
                reserved += count;
            }
            prop_assert!(after <= 20);
        }

        for (index, seat) in theatre.seats().iter().enumerate() {
            prop_assert_eq!(seat.is_reserved(), index < reserved);
        }
    }

    // A grab against an arbitrary pre-reserved pattern either takes the
    // lowest free seats or leaves the pattern untouched.
    #[test]
    fn grabs_take_the_lowest_free_seats_or_nothing(
        pre in proptest::collection::hash_set(0usize..20, 0..20),
        count in 1usize..=3,
    ) {
        let theatre = Theatre::new(1, 20);
        for &index in &pre {
            prop_assert!(theatre.seats()[index].try_reserve());
        }

        let free = 20 - pre.len();
        let granted = theatre.reserve_block(count);

        if free >= count {
            let expected: Vec<u32> = (0..20usize)
                .filter(|index| !pre.contains(index))
                .take(count)
                .map(|index| index as u32 + 1)
                .collect();
            prop_assert_eq!(granted, expected);
        } else {
            prop_assert!(granted.is_empty());
            for (index, seat) in theatre.seats().iter().enumerate() {
                prop_assert_eq!(seat.is_reserved(), pre.contains(&index));
            }
        }
    }

    // Hammering one theatre from many threads never double-books a seat
    // and never leaves a partial grab behind.
    #[test]
    fn parallel_grabs_stay_disjoint(
        counts in proptest::collection::vec(1usize..=3, 2..24),
    ) {
        let theatre = std::sync::Arc::new(Theatre::new(1, 20));

        let handles: Vec<_> = counts
            .iter()
            .map(|&count| {
                let theatre = theatre.clone();
                std::thread::spawn(move || theatre.reserve_block(count))
            })
            .collect();

        let mut seen = HashSet::new();
        let mut granted_total = 0usize;
        for (handle, &count) in handles.into_iter().zip(&counts) {
            let seats = handle.join().unwrap();
            prop_assert!(seats.is_empty() || seats.len() == count);
            for seat in seats {
                prop_assert!(seen.insert(seat));
                granted_total += 1;
            }
        }

        prop_assert!(granted_total <= 20);
        prop_assert_eq!(20 - theatre.free_seats(), granted_total);
    }
}
