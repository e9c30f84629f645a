//! The open-addressed cube-state dictionary: fixed capacity, linear
//! probing, no tombstones (entries are only ever inserted; `clear` is the
//! only bulk removal). Rust's ownership model retires the explicit `free`
//! operation a C-style table would need — a `CubeDictionary` releases its
//! storage via `Drop` when it goes out of scope, so there is no separate
//! free call.

use crate::algorithm::{Algorithm, AlgorithmList};
use crate::error::Error;
use crate::face::Face;
use crate::packed::PackedCube;

/// Order the hash walks the six face words in. Not the crate's usual
/// `U,R,F,D,L,B` enumeration order — fixed independently so the hash is
/// reproducible regardless of how `Face`'s discriminants are laid out.
const HASH_FACE_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::L, Face::B, Face::D];

fn hash_key(cube: &PackedCube) -> u64 {
    let mut h: u64 = 0;
    for f in HASH_FACE_ORDER {
        h ^= cube.faces[f as usize];
        h = h.rotate_left(17);
    }
    h
}

struct Entry {
    key: PackedCube,
    algs: AlgorithmList,
}

/// A fixed-capacity open-addressed hash table keyed by cube state.
pub struct CubeDictionary {
    slots: Vec<Option<Entry>>,
    len: usize,
}

impl CubeDictionary {
    /// Empty table of exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> CubeDictionary {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        CubeDictionary { slots, len: 0 }
    }

    /// Capacity sized to keep the load factor below 0.7 for roughly
    /// `expected_entries` keys.
    pub fn for_expected_entries(expected_entries: usize) -> CubeDictionary {
        let capacity = ((expected_entries as f64 / 0.65).ceil() as usize).max(16);
        CubeDictionary::with_capacity(capacity)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    fn probe_sequence(&self, key: &PackedCube) -> impl Iterator<Item = usize> {
        let start = (hash_key(key) % self.slots.len() as u64) as usize;
        let n = self.slots.len();
        (0..n).map(move |step| (start + step) % n)
    }

    /// Probes from the key's hash; on an empty slot, stores `key` with
    /// `moves` as the first algorithm of a fresh list; on a slot already
    /// holding `key`, appends a deep copy of `moves` to that list. Fails
    /// with `TableFull` if the probe wraps without finding either.
    pub fn insert(&mut self, key: PackedCube, moves: Algorithm) -> Result<(), Error> {
        for idx in self.probe_sequence(&key) {
            match &mut self.slots[idx] {
                None => {
                    let mut algs = AlgorithmList::create(1);
                    algs.push(moves)?;
                    self.slots[idx] = Some(Entry { key, algs });
                    self.len += 1;
                    return Ok(());
                }
                Some(entry) if entry.key == key => {
                    entry.algs.push(moves)?;
                    return Ok(());
                }
                Some(_) => continue,
            }
        }
        Err(Error::TableFull)
    }

    /// Identical to `insert`, except a slot already holding `key` returns
    /// `Ok(false)` without appending, rather than treating it as success.
    pub fn insert_if_new(&mut self, key: PackedCube, moves: Algorithm) -> Result<bool, Error> {
        for idx in self.probe_sequence(&key) {
            match &mut self.slots[idx] {
                None => {
                    let mut algs = AlgorithmList::create(1);
                    algs.push(moves)?;
                    self.slots[idx] = Some(Entry { key, algs });
                    self.len += 1;
                    return Ok(true);
                }
                Some(entry) if entry.key == key => return Ok(false),
                Some(_) => continue,
            }
        }
        Err(Error::TableFull)
    }

    /// Probes from the key's hash until the stored key matches (returns its
    /// algorithm list), an empty slot is found, or the probe wraps (both
    /// return `None`).
    pub fn lookup(&self, key: &PackedCube) -> Option<&AlgorithmList> {
        for idx in self.probe_sequence(key) {
            match &self.slots[idx] {
                None => return None,
                Some(entry) if &entry.key == key => return Some(&entry.algs),
                Some(_) => continue,
            }
        }
        None
    }

    pub fn contains_key(&self, key: &PackedCube) -> bool {
        self.lookup(key).is_some()
    }

    /// Drops every stored entry, resetting the table to empty without
    /// changing capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::packed::solved;

    #[test]
    fn insert_then_lookup_returns_last_element_equal_to_v() {
        let mut dict = CubeDictionary::with_capacity(64);
        let key = solved().apply_move(Move::U);
        let v = Algorithm::parse("U").unwrap();
        dict.insert(key, v.clone()).unwrap();
        let found = dict.lookup(&key).unwrap();
        assert_eq!(found.last().unwrap(), &v);
    }

    #[test]
    fn insert_twice_appends_to_the_same_key() {
        let mut dict = CubeDictionary::with_capacity(64);
        let key = solved().apply_move(Move::R);
        dict.insert(key, Algorithm::parse("R").unwrap()).unwrap();
        dict.insert(key, Algorithm::parse("U R U3").unwrap()).unwrap();
        let found = dict.lookup(&key).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn insert_if_new_refuses_to_append_on_collision() {
        let mut dict = CubeDictionary::with_capacity(64);
        let key = solved();
        assert!(dict.insert_if_new(key, Algorithm::create(0)).unwrap());
        assert!(!dict.insert_if_new(key, Algorithm::parse("U").unwrap()).unwrap());
        assert_eq!(dict.lookup(&key).unwrap().len(), 1);
    }

    #[test]
    fn lookup_miss_on_empty_table() {
        let dict = CubeDictionary::with_capacity(64);
        assert!(dict.lookup(&solved()).is_none());
    }

    #[test]
    fn clear_empties_without_changing_capacity() {
        let mut dict = CubeDictionary::with_capacity(64);
        dict.insert(solved(), Algorithm::create(0)).unwrap();
        dict.clear();
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.capacity(), 64);
        assert!(dict.lookup(&solved()).is_none());
    }

    #[test]
    fn table_full_once_every_slot_is_occupied() {
        let mut dict = CubeDictionary::with_capacity(4);
        for m in [Move::U, Move::R, Move::F, Move::D] {
            dict.insert(solved().apply_move(m), Algorithm::create(0)).unwrap();
        }
        let err = dict.insert(solved().apply_move(Move::L), Algorithm::create(0));
        assert!(matches!(err, Err(Error::TableFull)));
    }
}
