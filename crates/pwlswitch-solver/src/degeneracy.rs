use crate::prelude::*;

/// Every `k`-element subset of `items`, in the combinatorial order
/// `itertools.combinations` would produce (lexicographic over indices).
fn combinations(items: &[StateHandle], k: usize) -> Vec<Vec<StateHandle>> {
    fn recurse(
        items: &[StateHandle],
        k: usize,
        start: usize,
        current: &mut Vec<StateHandle>,
        out: &mut Vec<Vec<StateHandle>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i]);
            recurse(items, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    recurse(items, k, 0, &mut Vec::new(), &mut out);
    out
}

/// Enumerates inductor-state disable-set candidates in increasing
/// cardinality order (spec.md §4.5: "generate subsets ... in order of
/// increasing cardinality k = 0, 1, 2, …; within each k, iterate subsets
/// in a fixed combinatorial order"), capped at `max_attempts` total
/// candidates. The empty set is always first, so the natural
/// non-degenerate specialization is tried before anything that alters
/// the state-space semantics.
pub fn disable_set_candidates(
    inductor_states: &[StateHandle],
    max_attempts: usize,
) -> Vec<Vec<StateHandle>> {
    let mut configs = Vec::new();
    for k in 0..=inductor_states.len() {
        if configs.len() >= max_attempts {
            break;
        }
        for combo in combinations(inductor_states, k) {
            if configs.len() >= max_attempts {
                break;
            }
            configs.push(combo);
        }
    }
    configs
}
