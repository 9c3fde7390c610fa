//! 边列表表示
//!
//! 把图存为按插入顺序排列的 (src, dst) 序列，
//! 查询通过线性扫描完成

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Orientation, VertexId};
use serde::{Deserialize, Serialize};
use std::slice;
use tracing::trace;

/// 边列表图
///
/// `add_edge` 为 O(1) 追加，`has_edge` 和 `neighbors` 为 O(E) 扫描。
/// 不去重：重复添加同一条边会产生多重边。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListGraph {
    /// 顶点数（创建时固定）
    vertex_count: usize,
    /// 图方向
    orientation: Orientation,
    /// 边序列（插入顺序）
    edges: Vec<(VertexId, VertexId)>,
}

impl EdgeListGraph {
    /// 创建无向边列表图
    pub fn new(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::default())
    }

    /// 创建指定方向的边列表图
    pub fn with_orientation(vertex_count: usize, orientation: Orientation) -> Self {
        Self {
            vertex_count,
            orientation,
            edges: Vec::new(),
        }
    }

    /// 获取边的插入序列
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }
}

impl Graph for EdgeListGraph {
    type Neighbors<'a> = EdgeListNeighbors<'a>;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.edges.push((src, dst));
        trace!(src, dst, total = self.edges.len(), "边列表: 追加边");
        Ok(())
    }

    fn has_edge(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let undirected = self.orientation.is_undirected();
        Ok(self.edges.iter().any(|&(a, b)| {
            (a, b) == (src, dst) || (undirected && (a, b) == (dst, src))
        }))
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Self::Neighbors<'_>> {
        self.check_vertex(vertex)?;

        Ok(EdgeListNeighbors {
            edges: self.edges.iter(),
            vertex,
            undirected: self.orientation.is_undirected(),
        })
    }
}

/// 边列表的邻居迭代器（按边插入顺序扫描）
pub struct EdgeListNeighbors<'a> {
    edges: slice::Iter<'a, (VertexId, VertexId)>,
    vertex: VertexId,
    undirected: bool,
}

impl<'a> Iterator for EdgeListNeighbors<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        loop {
            let &(src, dst) = self.edges.next()?;
            if src == self.vertex {
                return Some(dst);
            }
            if self.undirected && dst == self.vertex {
                return Some(src);
            }
        }
    }
}
