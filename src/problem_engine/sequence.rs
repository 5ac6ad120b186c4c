//! Random index sequences drawn without replacement.
//!
//! A [`SequenceGenerator`] hands out sequences of `size` indices from
//! `0..item_count`, never the same sequence twice. Which indices may follow a
//! partial sequence is decided by a [`SequencePolicy`]:
//!
//! - [`Permutation`]: any index not yet on the path. Exhausts after
//!   `item_count! / (item_count - size)!` draws.
//! - [`Combination`]: only indices greater than the last one, leaving room to
//!   finish. Sequences come out strictly increasing and the generator exhausts
//!   after `C(item_count, size)` draws.
//!
//! Uniqueness comes from a choice tree: every draw walks from the root,
//! choosing among children whose subtree is not yet exhausted, and marks the
//! walked branch exhausted bottom-up once all of a node's children are.
//! Nodes live in an arena owned by the generator and the walk is iterative,
//! so long sequences do not recurse.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Decides which indices are eligible for the next position of a sequence.
///
/// Implemented by [`Permutation`], [`Combination`], and any
/// `Fn(item_count, size, chosen) -> Vec<usize>`.
pub trait SequencePolicy {
    fn eligible(&self, item_count: usize, size: usize, chosen: &[usize]) -> Vec<usize>;
}

impl<F> SequencePolicy for F
where
    F: Fn(usize, usize, &[usize]) -> Vec<usize>,
{
    fn eligible(&self, item_count: usize, size: usize, chosen: &[usize]) -> Vec<usize> {
        self(item_count, size, chosen)
    }
}

/// Order matters, no index repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permutation;

impl SequencePolicy for Permutation {
    fn eligible(&self, item_count: usize, _size: usize, chosen: &[usize]) -> Vec<usize> {
        (0..item_count).filter(|i| !chosen.contains(i)).collect()
    }
}

/// Strictly increasing index subsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Combination;

impl SequencePolicy for Combination {
    fn eligible(&self, item_count: usize, size: usize, chosen: &[usize]) -> Vec<usize> {
        let lowest = chosen.iter().max().map_or(0, |&m| m + 1);
        let remaining = size.saturating_sub(chosen.len());
        if remaining == 0 || remaining > item_count {
            return Vec::new();
        }
        // Leave `remaining - 1` indices above the pick.
        let highest = item_count - remaining;
        if lowest > highest {
            return Vec::new();
        }
        (lowest..=highest).collect()
    }
}

/// One explored branch of the choice tree.
#[derive(Debug)]
struct Node {
    eligible: Vec<usize>,
    /// Chosen index -> arena slot of the child node.
    children: HashMap<usize, usize>,
    exhausted: bool,
}

impl Node {
    fn new(eligible: Vec<usize>) -> Self {
        Node { eligible, children: HashMap::new(), exhausted: false }
    }
}

/// Hands out unique random sequences until the policy's space is used up.
#[derive(Debug)]
pub struct SequenceGenerator<P> {
    item_count: usize,
    size: usize,
    policy: P,
    nodes: Vec<Node>,
}

const ROOT: usize = 0;

impl<P: SequencePolicy> SequenceGenerator<P> {
    /// Counts are signed so callers can pass unchecked values straight through;
    /// negative or inconsistent ones are rejected before any tree is built.
    pub fn new(item_count: i64, size: i64, policy: P) -> Result<Self> {
        if item_count < 0 {
            return Err(Error::invalid("itemCount cannot be negative"));
        }
        if size < 0 {
            return Err(Error::invalid("size cannot be negative"));
        }
        if size > item_count {
            return Err(Error::invalid("size cannot be larger than itemCount"));
        }
        let item_count = item_count as usize;
        let size = size as usize;

        let root = Node::new(Self::eligible_after(&policy, item_count, size, &[]));
        Ok(SequenceGenerator { item_count, size, policy, nodes: vec![root] })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True while at least one sequence has not been handed out yet.
    pub fn can_generate(&self) -> bool {
        !self.nodes[ROOT].exhausted
    }

    /// Draw a sequence not returned before, uniformly among the remaining
    /// choices at each position. Returns `None` once exhausted.
    pub fn random_sequence<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vec<usize>> {
        if !self.can_generate() {
            return None;
        }

        let mut sequence = Vec::with_capacity(self.size);
        let mut path = vec![ROOT];
        let mut current = ROOT;

        loop {
            if sequence.len() == self.size || self.nodes[current].eligible.is_empty() {
                self.nodes[current].exhausted = true;
                break;
            }

            let open: Vec<usize> = {
                let node = &self.nodes[current];
                node.eligible
                    .iter()
                    .copied()
                    .filter(|i| node.children.get(i).map_or(true, |&c| !self.nodes[c].exhausted))
                    .collect()
            };
            let Some(&choice) = open.choose(rng) else {
                // Every child is exhausted; the propagation below records it.
                self.nodes[current].exhausted = true;
                break;
            };
            sequence.push(choice);

            let next = match self.nodes[current].children.get(&choice) {
                Some(&slot) => slot,
                None => {
                    let eligible =
                        Self::eligible_after(&self.policy, self.item_count, self.size, &sequence);
                    let slot = self.nodes.len();
                    self.nodes.push(Node::new(eligible));
                    self.nodes[current].children.insert(choice, slot);
                    slot
                }
            };
            path.push(next);
            current = next;
        }

        // Walk back up: a node is spent once every possible child exists and is spent.
        for &slot in path.iter().rev().skip(1) {
            let node = &self.nodes[slot];
            let exhausted = node.children.len() == node.eligible.len()
                && node.children.values().all(|&c| self.nodes[c].exhausted);
            self.nodes[slot].exhausted = exhausted;
        }

        Some(sequence)
    }

    /// Full-length paths never get children, so their eligible set is left empty.
    fn eligible_after(policy: &P, item_count: usize, size: usize, chosen: &[usize]) -> Vec<usize> {
        if chosen.len() >= size {
            return Vec::new();
        }
        policy.eligible(item_count, size, chosen)
    }
}
