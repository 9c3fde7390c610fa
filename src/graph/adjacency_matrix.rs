//! 邻接矩阵表示
//!
//! 把图存为 N×N 的权重网格（行优先一维存储），
//! 0 表示边不存在

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Orientation, VertexId, Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 邻接矩阵图
///
/// `has_edge` 为 O(1) 查表，`neighbors` 为 O(N) 行扫描，
/// 空间固定为 O(N²)。重复添加同一条边只是覆盖权重（幂等），
/// 不会产生多重边。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrixGraph {
    /// 顶点数（创建时固定）
    vertex_count: usize,
    /// 图方向
    orientation: Orientation,
    /// N×N 权重网格，grid[u * N + v] 为边 (u, v) 的权重
    grid: Vec<Weight>,
    /// 当前存在的边数（无向图按无序点对计）
    edge_count: usize,
}

impl AdjacencyMatrixGraph {
    /// 创建无向邻接矩阵图
    pub fn new(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::default())
    }

    /// 创建指定方向的邻接矩阵图
    pub fn with_orientation(vertex_count: usize, orientation: Orientation) -> Self {
        Self {
            vertex_count,
            orientation,
            grid: vec![0; vertex_count * vertex_count],
            edge_count: 0,
        }
    }

    fn cell(&self, src: VertexId, dst: VertexId) -> usize {
        src * self.vertex_count + dst
    }

    /// 添加带权边，覆盖该点对之前的权重
    pub fn add_edge_weighted(&mut self, src: VertexId, dst: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let idx = self.cell(src, dst);
        match (self.grid[idx] != 0, weight != 0) {
            (false, true) => self.edge_count += 1,
            (true, false) => self.edge_count -= 1,
            _ => {}
        }
        self.grid[idx] = weight;

        if self.orientation.is_undirected() {
            let mirror = self.cell(dst, src);
            self.grid[mirror] = weight;
        }

        trace!(src, dst, weight, "邻接矩阵: 设置边");
        Ok(())
    }

    /// 获取边 (src, dst) 的权重，0 表示边不存在
    pub fn weight(&self, src: VertexId, dst: VertexId) -> Result<Weight> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        Ok(self.grid[self.cell(src, dst)])
    }
}

impl Graph for AdjacencyMatrixGraph {
    type Neighbors<'a> = MatrixNeighbors<'a>;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.add_edge_weighted(src, dst, DEFAULT_WEIGHT)
    }

    fn has_edge(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        Ok(self.weight(src, dst)? != 0)
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Self::Neighbors<'_>> {
        self.check_vertex(vertex)?;

        let start = vertex * self.vertex_count;
        Ok(MatrixNeighbors {
            row: &self.grid[start..start + self.vertex_count],
            next: 0,
        })
    }
}

/// 邻接矩阵的邻居迭代器（按顶点下标升序）
pub struct MatrixNeighbors<'a> {
    row: &'a [Weight],
    next: usize,
}

impl<'a> Iterator for MatrixNeighbors<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        while self.next < self.row.len() {
            let vertex = self.next;
            self.next += 1;
            if self.row[vertex] != 0 {
                return Some(vertex);
            }
        }
        None
    }
}
