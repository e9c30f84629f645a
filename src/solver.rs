//! The four-stage solving pipeline: cross, four F2L slots, one-look last
//! layer, then a final simplify pass over the concatenated algorithm.

use std::collections::HashMap;

use crate::algorithm::Algorithm;
use crate::dict::CubeDictionary;
use crate::error::Error;
use crate::mask::{mask_cross, mask_f2l_slot, mask_last_layer};
use crate::moves::ALL_MOVES;
use crate::packed::{solved, PackedCube};
use crate::tables::{generate_1lll_table, generate_f2l_tables};

/// Tunable generation and search bounds. No config-file crate is pulled in
/// for these — a plain struct with a `Default` impl is the whole of the
/// configuration layer.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Live per-solve BFS depth cap for the cross stage.
    pub cross_max_depth: usize,
    /// BFS depth cap used once, at table-generation time, for each F2L slot.
    pub f2l_max_depth: usize,
    /// Expected entry count per F2L slot table, used to size its dictionary.
    pub f2l_expected_entries: usize,
    /// BFS depth cap used once, at table-generation time, for 1LLL.
    pub lll_max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            cross_max_depth: 8,
            f2l_max_depth: 10,
            f2l_expected_entries: 4096,
            lll_max_depth: 12,
        }
    }
}

/// A single stage of the pipeline: given the live cube state, produce an
/// algorithm that advances it (leaving earlier stages' work intact).
pub trait Stage {
    fn solve(&self, state: &PackedCube) -> Result<Algorithm, Error>;
}

/// Solves the four bottom-layer cross edges via a live, depth-bounded BFS
/// from the current state — no pregenerated table, since the masked cross
/// state space is small enough to search per call.
pub struct CrossStage {
    max_depth: usize,
}

impl CrossStage {
    pub fn new(max_depth: usize) -> CrossStage {
        CrossStage { max_depth }
    }
}

impl Stage for CrossStage {
    fn solve(&self, state: &PackedCube) -> Result<Algorithm, Error> {
        let mask = mask_cross();
        let target = solved().masked(&mask);
        if state.masked(&mask) == target {
            return Ok(Algorithm::create(0));
        }

        let mut visited: HashMap<PackedCube, Algorithm> = HashMap::new();
        visited.insert(state.masked(&mask), Algorithm::create(0));
        let mut frontier = vec![(*state, Algorithm::create(0))];

        for _ in 0..self.max_depth {
            let mut next_frontier = Vec::new();
            for (cur_state, cur_alg) in &frontier {
                for &m in &ALL_MOVES {
                    let next_state = cur_state.apply_move(m);
                    let key = next_state.masked(&mask);
                    if visited.contains_key(&key) {
                        continue;
                    }
                    let mut next_alg = cur_alg.copy();
                    next_alg.push(m)?;
                    if key == target {
                        return Ok(next_alg);
                    }
                    visited.insert(key, next_alg.copy());
                    next_frontier.push((next_state, next_alg));
                }
            }
            frontier = next_frontier;
            if frontier.is_empty() {
                break;
            }
        }
        Err(Error::LookupMiss("cross"))
    }
}

/// Solves one F2L corner-edge slot against a pregenerated, cross-plus-slot
/// masked table. The table records the shortest path *from* solved *to*
/// each masked state, so solving means looking up the live masked state
/// and applying the stored algorithm's inverse.
pub struct F2lStage {
    slot: usize,
    table: CubeDictionary,
}

impl F2lStage {
    pub fn new(slot: usize, table: CubeDictionary) -> F2lStage {
        F2lStage { slot, table }
    }
}

impl Stage for F2lStage {
    fn solve(&self, state: &PackedCube) -> Result<Algorithm, Error> {
        let mask = mask_f2l_slot(self.slot);
        let key = state.masked(&mask);
        let algs = self.table.lookup(&key).ok_or(Error::LookupMiss("f2l"))?;
        let mut alg = algs.last().expect("a stored entry always has at least one algorithm").copy();
        alg.invert();
        Ok(alg)
    }
}

/// Solves the whole last layer in one lookup against the 1LLL table, the
/// same inverted-lookup scheme as `F2lStage`.
pub struct LastLayerStage {
    table: CubeDictionary,
}

impl LastLayerStage {
    pub fn new(table: CubeDictionary) -> LastLayerStage {
        LastLayerStage { table }
    }
}

impl Stage for LastLayerStage {
    fn solve(&self, state: &PackedCube) -> Result<Algorithm, Error> {
        let mask = mask_last_layer();
        let key = state.masked(&mask);
        let algs = self.table.lookup(&key).ok_or(Error::LookupMiss("last_layer"))?;
        let mut alg = algs.last().expect("a stored entry always has at least one algorithm").copy();
        alg.invert();
        Ok(alg)
    }
}

/// The full cross -> F2L x4 -> 1LLL pipeline. Table generation happens once,
/// in `new`; `solve` itself never mutates the tables.
pub struct Solver {
    cross: CrossStage,
    f2l: [F2lStage; 4],
    last_layer: LastLayerStage,
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::new(SolverConfig::default())
    }
}

impl Solver {
    /// Runs every table generator up front. This is the expensive part of
    /// constructing a `Solver`; the result is cheap to reuse across solves.
    pub fn new(config: SolverConfig) -> Solver {
        let f2l_tables = generate_f2l_tables(config.f2l_max_depth, config.f2l_expected_entries);
        let f2l = {
            let mut slots = f2l_tables.into_iter();
            [
                F2lStage::new(0, slots.next().unwrap()),
                F2lStage::new(1, slots.next().unwrap()),
                F2lStage::new(2, slots.next().unwrap()),
                F2lStage::new(3, slots.next().unwrap()),
            ]
        };
        let lll_table = generate_1lll_table(config.lll_max_depth);

        Solver {
            cross: CrossStage::new(config.cross_max_depth),
            f2l,
            last_layer: LastLayerStage::new(lll_table),
        }
    }

    /// Solves a scramble, returning a single simplified algorithm that
    /// restores the solved state when applied after it.
    pub fn solve(&self, scramble: &Algorithm) -> Result<Algorithm, Error> {
        let mut state = solved().apply_alg(scramble.as_slice());
        let mut total = Algorithm::create(0);

        let cross_alg = self.cross.solve(&state)?;
        state = state.apply_alg(cross_alg.as_slice());
        total.concat(&cross_alg)?;

        for stage in &self.f2l {
            let alg = stage.solve(&state)?;
            state = state.apply_alg(alg.as_slice());
            total.concat(&alg)?;
        }

        let ll_alg = self.last_layer.solve(&state)?;
        state = state.apply_alg(ll_alg.as_slice());
        total.concat(&ll_alg)?;

        debug_assert_eq!(state, solved(), "solver pipeline must terminate at the solved state");

        total.simplify();
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    fn tiny_config() -> SolverConfig {
        SolverConfig {
            cross_max_depth: 8,
            f2l_max_depth: 8,
            f2l_expected_entries: 4096,
            lll_max_depth: 12,
        }
    }

    #[test]
    fn solves_a_short_scramble() {
        let solver = Solver::new(tiny_config());
        let scramble = Algorithm::parse("R U R' U'").unwrap();
        let solution = solver.solve(&scramble).expect("short scramble should solve");

        let mut combined = scramble.copy();
        combined.concat(&solution).unwrap();
        let final_state = solved().apply_alg(combined.as_slice());
        assert_eq!(final_state, solved());
    }

    #[test]
    fn solving_an_already_solved_cube_yields_empty_algorithm() {
        let solver = Solver::new(tiny_config());
        let scramble = Algorithm::create(0);
        let solution = solver.solve(&scramble).unwrap();
        assert!(solution.is_empty());
    }

    const NINE_SCRAMBLES: [&str; 9] = [
        "F D' R2 D' L' F L B' U R D' R F' U2 F D R U' F' D2 L U' R2 B' U2",
        "L' B R2 F2 L' B L' D' F' L' D2 R' B' R F R' F R F U L B L U' R'",
        "D F L U B' U' L2 B' L' B' U' R' D F' D' L2 D F L U L' D2 L U L'",
        "B2 D R' F' R2 B' D2 L2 D B2 D L' F D2 L2 D L' F' R2 U L' D' F U B'",
        "R' D F L' D' R' D F2 R' F' R' B' R F2 R B' U F' L' D B2 L' D L' F",
        "L' B D F' L' B D2 B L' B' D L' U B L D R' B2 R D2 R U L D' B",
        "D B' L' D F' R' D L F2 U F D' L F' L' F' D' L U' B D R B' U2 F",
        "L2 D R2 F D R2 U2 R' F' R' F' L F D R B' U R' U F' D B' R' B R'",
        "F2 U L' U R' U L U B' L F D' F' U' R' D F2 R B' L D2 B' L' F' L'",
    ];

    fn generous_config() -> SolverConfig {
        SolverConfig {
            cross_max_depth: 8,
            f2l_max_depth: 12,
            f2l_expected_entries: 8192,
            lll_max_depth: 16,
        }
    }

    #[test]
    fn e5_solver_round_trip_on_nine_known_scrambles() {
        let solver = Solver::new(generous_config());
        for scramble_str in NINE_SCRAMBLES {
            let scramble = Algorithm::parse(scramble_str).unwrap();
            let solution = solver.solve(&scramble).expect("every known scramble should solve");

            let mut combined = scramble.copy();
            combined.concat(&solution).unwrap();
            assert_eq!(solved().apply_alg(combined.as_slice()), solved());
        }
    }

    #[test]
    fn e6_invert_property_on_nine_known_scrambles() {
        for scramble_str in NINE_SCRAMBLES {
            let mut alg = Algorithm::parse(scramble_str).unwrap();
            let mut inv = alg.clone();
            inv.invert();
            alg.concat(&inv).unwrap();
            alg.simplify();
            assert_eq!(solved().apply_alg(alg.as_slice()), solved());
        }
    }
}
