use crate::movegen::Move;

/// One decision point of the root driver: the best leg found there and the
/// node that continues the capture chain after it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChainNode {
    pub best: Option<Move>,
    pub next: Option<usize>,
    pub score: f64,
}

/// Arena of driver nodes addressed by index; node 0 is the root.
#[derive(Clone, Debug, Default)]
pub struct ChainArena {
    nodes: Vec<ChainNode>,
}

impl ChainArena {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.nodes.clear(); }

    /// Allocate a node and return its index.
    pub fn open(&mut self) -> usize {
        self.nodes.push(ChainNode::default());
        self.nodes.len() - 1
    }

    /// Index the next `open` will return.
    pub fn next_index(&self) -> usize { self.nodes.len() }

    pub fn record(&mut self, node: usize, best: Move, next: Option<usize>, score: f64) {
        self.nodes[node] = ChainNode { best: Some(best), next, score };
    }

    pub fn get(&self, node: usize) -> Option<&ChainNode> { self.nodes.get(node) }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Follow `next` links from `start`, collecting legs until a node with no
    /// recorded leg or the end of the chain.
    pub fn reconstruct(&self, start: usize) -> Vec<Move> {
        let mut turn = Vec::new();
        let mut at = Some(start);
        while let Some(i) = at {
            let Some(node) = self.nodes.get(i) else { break };
            let Some(mv) = node.best else { break };
            turn.push(mv);
            at = node.next;
        }
        turn
    }

    /// Copy `other` in, shifting its indices; returns where its root landed.
    pub fn graft(&mut self, other: &ChainArena) -> usize {
        let base = self.nodes.len();
        self.nodes.extend(other.nodes.iter().map(|n| ChainNode { next: n.next.map(|i| i + base), ..*n }));
        base
    }
}
