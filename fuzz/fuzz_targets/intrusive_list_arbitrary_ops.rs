#![no_main]

use libfuzzer_sys::fuzz_target;
use tiercache::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Covers push_front, push_back, insert_before, pop_front, pop_back,
// move_to_front, move_before, remove and clear. Handles are kept after their
// node is gone so stale-handle rejection is exercised too.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut all_ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 9;
        let value = u32::from(pair[1]);
        let pick = |ids: &Vec<_>| (!ids.is_empty()).then(|| ids[value as usize % ids.len()]);

        match op {
            0 => {
                let id = list.push_front(value);
                all_ids.push(id);
                assert_eq!(list.front_id(), Some(id));
            }
            1 => {
                let id = list.push_back(value);
                all_ids.push(id);
                assert_eq!(list.back_id(), Some(id));
            }
            2 => {
                if let Some(anchor) = pick(&all_ids) {
                    let id = list.insert_before(value, anchor);
                    all_ids.push(id);
                    if list.contains(anchor) {
                        assert_eq!(list.next_id(id), Some(anchor));
                    } else {
                        assert_eq!(list.front_id(), Some(id));
                    }
                }
            }
            3 => {
                let old_len = list.len();
                if list.pop_front().is_some() {
                    assert_eq!(list.len(), old_len - 1);
                }
            }
            4 => {
                let old_len = list.len();
                if list.pop_back().is_some() {
                    assert_eq!(list.len(), old_len - 1);
                }
            }
            5 => {
                if let Some(id) = pick(&all_ids) {
                    if list.move_to_front(id) {
                        assert_eq!(list.front_id(), Some(id));
                    } else {
                        assert!(!list.contains(id));
                    }
                }
            }
            6 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    let anchor = all_ids[(value as usize / 3) % all_ids.len()];
                    if list.move_before(id, anchor) && id != anchor {
                        assert_eq!(list.next_id(id), Some(anchor));
                    }
                }
            }
            7 => {
                if let Some(id) = pick(&all_ids) {
                    let old_len = list.len();
                    if list.remove(id).is_some() {
                        assert_eq!(list.len(), old_len - 1);
                        assert!(!list.contains(id));
                        assert_eq!(list.remove(id), None);
                    }
                }
            }
            8 => {
                list.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
                for id in &all_ids {
                    assert!(!list.contains(*id));
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.iter_ids().count(), list.len());
        assert_eq!(list.is_empty(), list.front().is_none());
    }
});
