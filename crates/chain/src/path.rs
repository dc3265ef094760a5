//! Decay paths and the Bateman solution along them

// external crates
use log::trace;

/// One nuclide on a decay path
#[derive(Debug, Clone, PartialEq)]
pub struct ChainNode {
    /// Canonical symbol
    pub symbol: String,
    /// Decay constant λ (1/s)
    pub decay_constant: f64,
    /// Branching ratio from the previous node on the path, 1 for the root
    pub branch_ratio: f64,
}

impl ChainNode {
    /// New node reached with some branching ratio
    pub fn new(symbol: &str, decay_constant: f64, branch_ratio: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            decay_constant,
            branch_ratio,
        }
    }

    /// New node at the start of a path
    pub fn root(symbol: &str, decay_constant: f64) -> Self {
        Self::new(symbol, decay_constant, 1.0)
    }
}

/// Linear decay path from a parent nuclide to the current descendant
///
/// This is a stack. Nodes are pushed while walking down a decay chain and
/// popped when backtracking, so the path always runs from the root to
/// whichever nuclide is being evaluated.
///
/// ```rust
/// # use ndecay_chain::{ChainNode, DecayPath};
/// let mut path = DecayPath::new(ChainNode::root("Sr-90", 7.629215e-10));
/// path.push(ChainNode::new("Y-90", 3.008451e-06, 1.0));
///
/// assert_eq!(path.depth(), 1);
/// assert_eq!(path.to_string(), "Sr-90 -> Y-90");
///
/// path.pop();
/// assert_eq!(path.depth(), 0);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DecayPath {
    nodes: Vec<ChainNode>,
}

impl DecayPath {
    /// New path starting at a root nuclide
    pub fn new(root: ChainNode) -> Self {
        Self { nodes: vec![root] }
    }

    /// Step down to a daughter
    pub fn push(&mut self, node: ChainNode) {
        self.nodes.push(node);
    }

    /// Step back up from the last daughter
    pub fn pop(&mut self) -> Option<ChainNode> {
        self.nodes.pop()
    }

    /// Number of decays from the root to the last node
    pub fn depth(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check for an empty path
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes from the root to the last daughter
    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    /// First node on the path
    pub fn root(&self) -> Option<&ChainNode> {
        self.nodes.first()
    }

    /// Node currently being evaluated
    pub fn last(&self) -> Option<&ChainNode> {
        self.nodes.last()
    }

    /// Combined branching ratio from the root to the last node
    ///
    /// Ratios that are not positive are skipped rather than zeroing the
    /// product.
    pub fn branching(&self) -> f64 {
        self.nodes
            .iter()
            .filter(|n| n.branch_ratio > 0.0)
            .map(|n| n.branch_ratio)
            .product()
    }

    /// Bateman sum over every node on the path at time `t` (s)
    ///
    /// ```text
    ///  n
    ///  Σ  λi exp(-λi t) / Π (1 - λi/λj)
    /// i=1                j≠i
    /// ```
    ///
    /// Nodes sharing a symbol are excluded from each other's product, so
    /// equal decay constants on distinct nuclides divide by zero.
    pub fn bateman_sum(&self, t: f64) -> f64 {
        let mut sum = 0.0;
        for i in &self.nodes {
            let mut product = 1.0;
            for j in &self.nodes {
                if i.symbol != j.symbol {
                    product *= 1.0 - (i.decay_constant / j.decay_constant);
                }
            }
            let term = i.decay_constant * (-i.decay_constant * t).exp() / product;
            trace!("  {} term {term:e} (product {product:e})", i.symbol);
            sum += term;
        }
        sum
    }

    /// Activity of the last node from `activity` of the root after `t` (s)
    ///
    /// The root activity is converted to a number of atoms with the root
    /// decay constant, scaled by the branching ratio of every step, and
    /// multiplied by the Bateman sum.
    ///
    /// ```rust
    /// # use ndecay_chain::{ChainNode, DecayPath};
    /// // a single nuclide just decays exponentially
    /// let lambda = 1.0e-3;
    /// let path = DecayPath::new(ChainNode::root("Xx-1", lambda));
    /// let expected = 100.0 * (-lambda * 500.0_f64).exp();
    /// assert!((path.activity(100.0, 500.0) - expected).abs() < 1.0e-12);
    /// ```
    ///
    /// An empty path has no activity.
    pub fn activity(&self, activity: f64, t: f64) -> f64 {
        let Some(root) = self.root() else {
            return 0.0;
        };

        activity / root.decay_constant * self.branching() * self.bateman_sum(t)
    }
}

impl std::fmt::Display for DecayPath {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbols: Vec<&str> = self.nodes.iter().map(|n| n.symbol.as_str()).collect();
        write!(f, "{}", symbols.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1.0e-10 * a.abs().max(b.abs())
    }

    fn two_step(branch_ratio: f64) -> DecayPath {
        let mut path = DecayPath::new(ChainNode::root("A-1", 1.0e-3));
        path.push(ChainNode::new("B-1", 5.0e-3, branch_ratio));
        path
    }

    #[test]
    fn depth_tracks_the_stack() {
        let mut path = two_step(1.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path.depth(), 1);
        assert_eq!(path.root().unwrap().symbol, "A-1");
        assert_eq!(path.last().unwrap().symbol, "B-1");

        assert_eq!(path.pop().unwrap().symbol, "B-1");
        assert_eq!(path.pop().unwrap().symbol, "A-1");
        assert!(path.is_empty());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.activity(100.0, 1.0), 0.0);
    }

    #[test]
    fn single_node_at_time_zero() {
        let path = DecayPath::new(ChainNode::root("A-1", 2.5e-6));
        assert_eq!(path.bateman_sum(0.0), 2.5e-6);
        assert!(close(path.activity(1234.5, 0.0), 1234.5));
    }

    #[test]
    fn two_step_matches_analytic_solution() {
        let (la, lb): (f64, f64) = (1.0e-3, 5.0e-3);
        let t = 600.0;
        let expected = 100.0 * lb / (lb - la) * ((-la * t).exp() - (-lb * t).exp());
        assert!(close(two_step(1.0).activity(100.0, t), expected));
    }

    #[test]
    fn daughter_starts_with_no_activity() {
        assert!(two_step(1.0).activity(100.0, 0.0).abs() < 1.0e-12);
    }

    #[test]
    fn branching_scales_linearly() {
        let t = 250.0;
        let full = two_step(1.0).activity(100.0, t);
        assert!(close(two_step(0.25).activity(100.0, t), 0.25 * full));
    }

    #[test]
    fn non_positive_ratios_are_skipped() {
        let t = 250.0;
        let full = two_step(1.0).activity(100.0, t);
        assert_eq!(two_step(0.0).activity(100.0, t), full);
        assert_eq!(two_step(-0.5).activity(100.0, t), full);
        assert_eq!(two_step(-0.5).branching(), 1.0);
        assert_eq!(two_step(0.3).branching(), 0.3);
    }

    #[test]
    fn three_step_matches_analytic_solution() {
        let (la, lb, lc): (f64, f64, f64) = (1.0e-4, 3.0e-3, 7.0e-3);
        let t = 1_000.0;

        let mut path = DecayPath::new(ChainNode::root("A-1", la));
        path.push(ChainNode::new("B-1", lb, 1.0));
        path.push(ChainNode::new("C-1", lc, 1.0));

        let expected = 50.0
            * lb
            * lc
            * ((-la * t).exp() / ((lb - la) * (lc - la))
                + (-lb * t).exp() / ((la - lb) * (lc - lb))
                + (-lc * t).exp() / ((la - lc) * (lb - lc)));

        assert!(close(path.activity(50.0, t), expected));
    }

    #[test]
    fn activity_is_built_from_branching() {
        let mut path = two_step(0.4);
        path.push(ChainNode::new("C-1", 2.0e-2, 0.5));
        let t = 300.0;

        assert_eq!(path.branching(), 0.4 * 0.5);
        let expected = 10.0 / 1.0e-3 * path.branching() * path.bateman_sum(t);
        assert_eq!(path.activity(10.0, t), expected);

        let mut unbranched = two_step(1.0);
        unbranched.push(ChainNode::new("C-1", 2.0e-2, 1.0));
        assert!(close(path.activity(10.0, t), 0.2 * unbranched.activity(10.0, t)));
    }

    #[test]
    fn display_joins_symbols() {
        assert_eq!(two_step(1.0).to_string(), "A-1 -> B-1");
        assert_eq!(DecayPath::default().to_string(), "");
    }
}
