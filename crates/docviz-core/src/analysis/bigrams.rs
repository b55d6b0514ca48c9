//! Adjacent word pairs and the undirected co-occurrence graph built from them.

use std::collections::HashMap;

use serde::Serialize;

use super::frequency::{count_in_order, most_common};

/// An undirected, weighted edge between two node indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BigramEdge {
    pub source: usize,
    pub target: usize,
    pub weight: usize,
}

impl BigramEdge {
    /// True when both ends are the same word.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Co-occurrence graph: one node per distinct word, one edge per unordered pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BigramGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<BigramEdge>,
}

impl BigramGraph {
    /// Build the graph from counted ordered pairs.
    ///
    /// `(a, b)` and `(b, a)` collapse into one edge whose weight is the sum
    /// of both counts.
    pub fn from_pairs(pairs: &[((String, String), usize)]) -> Self {
        let mut graph = BigramGraph::default();
        let mut node_index: HashMap<String, usize> = HashMap::new();
        let mut edge_index: HashMap<(usize, usize), usize> = HashMap::new();

        for ((first, second), count) in pairs {
            let a = graph.node(&mut node_index, first);
            let b = graph.node(&mut node_index, second);
            let key = (a.min(b), a.max(b));
            match edge_index.get(&key) {
                Some(&i) => graph.edges[i].weight += count,
                None => {
                    edge_index.insert(key, graph.edges.len());
                    graph.edges.push(BigramEdge {
                        source: a,
                        target: b,
                        weight: *count,
                    });
                }
            }
        }
        graph
    }

    fn node(&mut self, index: &mut HashMap<String, usize>, word: &str) -> usize {
        if let Some(&i) = index.get(word) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(word.to_string());
        index.insert(word.to_string(), i);
        i
    }

    /// Weight of the edge joining two words, in either orientation.
    pub fn weight(&self, a: &str, b: &str) -> Option<usize> {
        let ia = self.nodes.iter().position(|n| n == a)?;
        let ib = self.nodes.iter().position(|n| n == b)?;
        self.edges
            .iter()
            .find(|e| (e.source == ia && e.target == ib) || (e.source == ib && e.target == ia))
            .map(|e| e.weight)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Top `k` adjacent token pairs of `text` by count, ties first-encountered.
pub fn top_bigrams(text: &str, k: usize) -> Vec<((String, String), usize)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let pairs = tokens
        .windows(2)
        .map(|w| (w[0].to_string(), w[1].to_string()));
    most_common(count_in_order(pairs), k)
}

/// Count the top `k` pairs and build the graph.
pub fn bigram_graph(text: &str, k: usize) -> BigramGraph {
    BigramGraph::from_pairs(&top_bigrams(text, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_top_bigrams_counts() {
        let pairs = top_bigrams("red fish blue fish red fish", 10);
        assert_eq!(
            pairs,
            vec![
                (pair("red", "fish"), 2),
                (pair("fish", "blue"), 1),
                (pair("blue", "fish"), 1),
                (pair("fish", "red"), 1),
            ]
        );
    }

    #[test]
    fn test_orientations_collapse_and_accumulate() {
        // (a,b) twice and (b,a) once: one edge, weight 3.
        // The undirected edge sums both orientations rather than keeping the larger count of 2.
        let graph = bigram_graph("a b a b", 10);
        assert_eq!(graph.nodes, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.weight("a", "b"), Some(3));
        assert_eq!(graph.weight("b", "a"), Some(3));
    }

    #[test]
    fn test_self_loop() {
        let graph = bigram_graph("go go", 10);
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges[0].is_self_loop());
        assert_eq!(graph.edges[0].weight, 1);
    }

    #[test]
    fn test_top_k_limits_edges() {
        let graph = bigram_graph("one two three four five six", 2);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.nodes, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_single_token_has_no_pairs() {
        assert!(bigram_graph("alone", 10).is_empty());
    }
}
