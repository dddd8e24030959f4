#![no_main]

use libfuzzer_sys::fuzz_target;
use tiercache::policy::lru::LruCore;
use tiercache::traits::EvictionPolicy;

// Fuzz LruCore against a Vec-based reference model (front = most recent).
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let mut capacity = usize::from(first % 16) + 1;
    let mut cache: LruCore<u8, u8> = LruCore::new(capacity);
    let mut model: Vec<(u8, u8)> = Vec::new();

    for pair in rest.chunks_exact(2) {
        let key = pair[1] % 32;
        match pair[0] % 6 {
            0 | 1 => {
                let got = cache.put(key, pair[0]);
                let expected = match model.iter().position(|(k, _)| *k == key) {
                    Some(pos) => {
                        let (_, old) = model.remove(pos);
                        Some(old)
                    }
                    None => {
                        if model.len() >= capacity {
                            model.pop();
                        }
                        None
                    }
                };
                model.insert(0, (key, pair[0]));
                assert_eq!(got, expected);
            }
            2 => {
                let got = cache.get(&key).copied();
                let expected = model.iter().position(|(k, _)| *k == key).map(|pos| {
                    let entry = model.remove(pos);
                    model.insert(0, entry);
                    entry.1
                });
                assert_eq!(got, expected);
            }
            3 => {
                let got = cache.remove(&key);
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|pos| model.remove(pos).1);
                assert_eq!(got, expected);
            }
            4 => {
                let new_capacity = usize::from(pair[1] % 16);
                match cache.resize(new_capacity) {
                    Ok(evicted) => {
                        assert!(new_capacity >= 1);
                        let before = model.len();
                        capacity = new_capacity;
                        model.truncate(capacity);
                        assert_eq!(evicted, before - model.len());
                    }
                    Err(_) => assert_eq!(new_capacity, 0),
                }
            }
            5 => {
                let got = cache.pop_victim().map(|(k, _)| k);
                assert_eq!(got, model.pop().map(|(k, _)| k));
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= cache.capacity());
        assert!(cache.check_invariants().is_ok());
        assert!(cache.keys().copied().eq(model.iter().map(|(k, _)| *k)));
    }
});
