//! 邻接表表示
//!
//! 每个顶点维护一个按插入顺序排列的邻居序列

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Orientation, VertexId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{iter, slice};
use tracing::trace;

/// 邻居序列（小度数顶点内联存储）
type NeighborVec = SmallVec<[VertexId; 4]>;

/// 邻接表的邻居迭代器（直接遍历存储的序列）
pub type AdjacencyListNeighbors<'a> = iter::Copied<slice::Iter<'a, VertexId>>;

/// 邻接表图
///
/// `add_edge` 为 O(1) 追加，`has_edge` 为 O(deg(src)) 扫描，
/// `neighbors` 直接返回存储的序列。允许重复邻居（多重边）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyListGraph {
    /// 图方向
    orientation: Orientation,
    /// 顶点下标到邻居序列的映射
    adjacency: Vec<NeighborVec>,
    /// add_edge 调用次数
    edge_count: usize,
}

impl AdjacencyListGraph {
    /// 创建无向邻接表图
    pub fn new(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::default())
    }

    /// 创建指定方向的邻接表图
    pub fn with_orientation(vertex_count: usize, orientation: Orientation) -> Self {
        Self {
            orientation,
            adjacency: vec![NeighborVec::new(); vertex_count],
            edge_count: 0,
        }
    }
}

impl Graph for AdjacencyListGraph {
    type Neighbors<'a> = AdjacencyListNeighbors<'a>;

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.adjacency[src].push(dst);
        if self.orientation.is_undirected() {
            self.adjacency[dst].push(src);
        }
        self.edge_count += 1;

        trace!(src, dst, total = self.edge_count, "邻接表: 追加边");
        Ok(())
    }

    fn has_edge(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        // 无向图在 add_edge 时双向登记，扫描 src 的序列即可
        Ok(self.adjacency[src].contains(&dst))
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Self::Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().copied())
    }
}
