#![no_main]

use libfuzzer_sys::fuzz_target;
use tiercache::policy::lfu::LfuCore;
use tiercache::traits::EvictionPolicy;

// Fuzz LfuCore operation sequences; structure is validated after every step.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let mut cache: LfuCore<u8, u32> = LfuCore::new(usize::from(first % 16) + 1);

    for pair in rest.chunks_exact(2) {
        let key = pair[1] % 32;
        match pair[0] % 7 {
            0 | 1 => {
                let before = cache.frequency(&key);
                let was_full = cache.len() == cache.capacity();
                let victim = cache.peek_victim().map(|(k, _)| *k);
                let replaced = cache.put(key, u32::from(pair[0]));

                assert_eq!(replaced.is_some(), before.is_some());
                match before {
                    Some(count) => assert_eq!(cache.frequency(&key), Some(count + 1)),
                    None => {
                        assert_eq!(cache.frequency(&key), Some(1));
                        if was_full {
                            assert!(victim.is_some_and(|v| !cache.contains(&v)));
                        }
                    }
                }
            }
            2 | 3 => {
                let before = cache.frequency(&key);
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, before.is_some());
                assert_eq!(cache.frequency(&key), before.map(|c| c + 1));
            }
            4 => {
                let had = cache.contains(&key);
                assert_eq!(cache.remove(&key).is_some(), had);
                assert!(!cache.contains(&key));
            }
            5 => {
                let new_capacity = usize::from(pair[1] % 16);
                let before = cache.len();
                match cache.resize(new_capacity) {
                    Ok(evicted) => {
                        assert_eq!(evicted, before.saturating_sub(new_capacity));
                        assert_eq!(cache.capacity(), new_capacity);
                    }
                    Err(_) => assert_eq!(new_capacity, 0),
                }
            }
            6 => {
                let expected = cache.peek_victim().map(|(k, _)| *k);
                let popped = cache.pop_victim().map(|(k, _)| k);
                assert_eq!(popped, expected);
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= cache.capacity());
        if let Err(err) = cache.check_invariants() {
            panic!("invariant violated: {err}");
        }
    }
});
