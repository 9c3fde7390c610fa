//! 图核心模块
//!
//! 统一的图接口与三种存储表示：边列表、邻接矩阵、邻接表

mod adjacency_list;
mod adjacency_matrix;
mod edge_list;

pub use adjacency_list::{AdjacencyListGraph, AdjacencyListNeighbors};
pub use adjacency_matrix::{AdjacencyMatrixGraph, MatrixNeighbors};
pub use edge_list::{EdgeListGraph, EdgeListNeighbors};

use crate::error::{Error, Result};
use crate::types::{Orientation, Representation, VertexId};
use serde::{Deserialize, Serialize};

/// 静态图的统一接口
///
/// 三种表示方式对外语义一致：顶点数在创建时固定，
/// 之后只能通过 `add_edge` 追加边。所有带顶点参数的操作
/// 在下标超出 [0, vertex_count) 时返回 [`Error::VertexOutOfRange`]。
pub trait Graph {
    /// 邻居惰性序列；重新调用 [`Graph::neighbors`] 即可重放
    type Neighbors<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    /// 顶点数
    fn vertex_count(&self) -> usize;

    /// 边数（边列表/邻接表按 add_edge 调用计，邻接矩阵按存在的点对计）
    fn edge_count(&self) -> usize;

    /// 图方向
    fn orientation(&self) -> Orientation;

    /// 添加边；无向图同时建立反向关联
    fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()>;

    /// 检查边是否存在；无向图对两个方向都检查
    fn has_edge(&self, src: VertexId, dst: VertexId) -> Result<bool>;

    /// 顶点的邻居序列
    fn neighbors(&self, vertex: VertexId) -> Result<Self::Neighbors<'_>>;

    /// 校验顶点下标
    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.vertex_count() {
            return Err(Error::out_of_range(vertex, self.vertex_count()));
        }
        Ok(())
    }

    /// 顶点的度（邻居序列长度）
    fn degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.neighbors(vertex)?.count())
    }
}

/// 按表示方式选择的图（标签化变体）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGraph {
    EdgeList(EdgeListGraph),
    AdjacencyMatrix(AdjacencyMatrixGraph),
    AdjacencyList(AdjacencyListGraph),
}

impl AnyGraph {
    /// 创建无向图
    pub fn new(representation: Representation, vertex_count: usize) -> Self {
        Self::with_orientation(representation, vertex_count, Orientation::default())
    }

    /// 创建指定方向的图
    pub fn with_orientation(
        representation: Representation,
        vertex_count: usize,
        orientation: Orientation,
    ) -> Self {
        match representation {
            Representation::EdgeList => {
                AnyGraph::EdgeList(EdgeListGraph::with_orientation(vertex_count, orientation))
            }
            Representation::AdjacencyMatrix => AnyGraph::AdjacencyMatrix(
                AdjacencyMatrixGraph::with_orientation(vertex_count, orientation),
            ),
            Representation::AdjacencyList => AnyGraph::AdjacencyList(
                AdjacencyListGraph::with_orientation(vertex_count, orientation),
            ),
        }
    }

    /// 当前使用的表示方式
    pub fn representation(&self) -> Representation {
        match self {
            AnyGraph::EdgeList(_) => Representation::EdgeList,
            AnyGraph::AdjacencyMatrix(_) => Representation::AdjacencyMatrix,
            AnyGraph::AdjacencyList(_) => Representation::AdjacencyList,
        }
    }
}

impl Graph for AnyGraph {
    type Neighbors<'a> = AnyNeighbors<'a>;

    fn vertex_count(&self) -> usize {
        match self {
            AnyGraph::EdgeList(g) => g.vertex_count(),
            AnyGraph::AdjacencyMatrix(g) => g.vertex_count(),
            AnyGraph::AdjacencyList(g) => g.vertex_count(),
        }
    }

    fn edge_count(&self) -> usize {
        match self {
            AnyGraph::EdgeList(g) => g.edge_count(),
            AnyGraph::AdjacencyMatrix(g) => g.edge_count(),
            AnyGraph::AdjacencyList(g) => g.edge_count(),
        }
    }

    fn orientation(&self) -> Orientation {
        match self {
            AnyGraph::EdgeList(g) => g.orientation(),
            AnyGraph::AdjacencyMatrix(g) => g.orientation(),
            AnyGraph::AdjacencyList(g) => g.orientation(),
        }
    }

    fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        match self {
            AnyGraph::EdgeList(g) => g.add_edge(src, dst),
            AnyGraph::AdjacencyMatrix(g) => g.add_edge(src, dst),
            AnyGraph::AdjacencyList(g) => g.add_edge(src, dst),
        }
    }

    fn has_edge(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        match self {
            AnyGraph::EdgeList(g) => g.has_edge(src, dst),
            AnyGraph::AdjacencyMatrix(g) => g.has_edge(src, dst),
            AnyGraph::AdjacencyList(g) => g.has_edge(src, dst),
        }
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Self::Neighbors<'_>> {
        Ok(match self {
            AnyGraph::EdgeList(g) => AnyNeighbors::EdgeList(g.neighbors(vertex)?),
            AnyGraph::AdjacencyMatrix(g) => AnyNeighbors::AdjacencyMatrix(g.neighbors(vertex)?),
            AnyGraph::AdjacencyList(g) => AnyNeighbors::AdjacencyList(g.neighbors(vertex)?),
        })
    }
}

/// [`AnyGraph`] 的邻居迭代器
pub enum AnyNeighbors<'a> {
    EdgeList(EdgeListNeighbors<'a>),
    AdjacencyMatrix(MatrixNeighbors<'a>),
    AdjacencyList(AdjacencyListNeighbors<'a>),
}

impl<'a> Iterator for AnyNeighbors<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        match self {
            AnyNeighbors::EdgeList(it) => it.next(),
            AnyNeighbors::AdjacencyMatrix(it) => it.next(),
            AnyNeighbors::AdjacencyList(it) => it.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn all_graphs(vertex_count: usize) -> Vec<AnyGraph> {
        Representation::ALL
            .iter()
            .map(|&rep| AnyGraph::new(rep, vertex_count))
            .collect()
    }

    #[test]
    fn test_cycle_scenario() {
        // 4 个顶点的环: (0,1), (1,2), (2,3), (3,0)
        for mut g in all_graphs(4) {
            g.add_edge(0, 1).unwrap();
            g.add_edge(1, 2).unwrap();
            g.add_edge(2, 3).unwrap();
            g.add_edge(3, 0).unwrap();

            let rep = g.representation();
            let mut n0: Vec<_> = g.neighbors(0).unwrap().collect();
            n0.sort_unstable();
            assert_eq!(n0, vec![1, 3], "representation: {}", rep);
            assert!(!g.has_edge(0, 2).unwrap(), "representation: {}", rep);
            assert!(g.has_edge(1, 2).unwrap(), "representation: {}", rep);
            assert_eq!(g.degree(2).unwrap(), 2, "representation: {}", rep);
        }
    }

    #[test]
    fn test_cross_representation_equivalence() {
        let n = 8;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let edges: Vec<(VertexId, VertexId)> = (0..30)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();

        let mut graphs = all_graphs(n);
        for g in &mut graphs {
            for &(u, v) in &edges {
                g.add_edge(u, v).unwrap();
            }
        }

        for u in 0..n {
            for v in 0..n {
                let expected = graphs[0].has_edge(u, v).unwrap();
                for g in &graphs[1..] {
                    assert_eq!(
                        g.has_edge(u, v).unwrap(),
                        expected,
                        "has_edge({}, {}) 在 {} 下不一致",
                        u,
                        v,
                        g.representation()
                    );
                }
            }
        }
    }

    #[test]
    fn test_directed_equivalence() {
        let n = 6;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let edges: Vec<(VertexId, VertexId)> = (0..20)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();

        let mut graphs: Vec<AnyGraph> = Representation::ALL
            .iter()
            .map(|&rep| AnyGraph::with_orientation(rep, n, Orientation::Directed))
            .collect();
        for g in &mut graphs {
            for &(u, v) in &edges {
                g.add_edge(u, v).unwrap();
            }
        }

        for u in 0..n {
            for v in 0..n {
                let expected = graphs[0].has_edge(u, v).unwrap();
                for g in &graphs[1..] {
                    assert_eq!(g.has_edge(u, v).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_zero_vertex_graph() {
        for mut g in all_graphs(0) {
            assert_eq!(g.vertex_count(), 0);
            assert_eq!(g.edge_count(), 0);
            assert_eq!(g.add_edge(0, 0), Err(Error::out_of_range(0, 0)));
            assert!(g.has_edge(0, 0).is_err());
            assert!(g.neighbors(0).is_err());
        }
    }

    #[test]
    fn test_any_graph_representation_tag() {
        assert_eq!(
            AnyGraph::new(Representation::EdgeList, 1).representation(),
            Representation::EdgeList
        );
        assert_eq!(
            AnyGraph::new(Representation::AdjacencyMatrix, 1).representation(),
            Representation::AdjacencyMatrix
        );
        assert_eq!(
            AnyGraph::new(Representation::AdjacencyList, 1).representation(),
            Representation::AdjacencyList
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut g = AnyGraph::new(Representation::AdjacencyList, 3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();

        let json = serde_json::to_string(&g).unwrap();
        let restored: AnyGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, restored);
    }
}
