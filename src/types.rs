//! 通用类型定义
//!
//! 顶点 ID、边权重、图方向和表示方式选择

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（0 起始的连续下标，上限在创建时固定）
pub type VertexId = usize;

/// 边权重（0 表示边不存在）
pub type Weight = i64;

/// 无权边的默认权重
pub const DEFAULT_WEIGHT: Weight = 1;

/// 图方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// 无向图：add_edge(u, v) 同时建立 v -> u
    Undirected,
    /// 有向图：add_edge(u, v) 仅建立 u -> v
    Directed,
}

impl Orientation {
    pub fn is_undirected(&self) -> bool {
        matches!(self, Orientation::Undirected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Undirected => "undirected",
            Orientation::Directed => "directed",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Undirected
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 图的存储表示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Representation {
    /// 边列表：按插入顺序存储 (u, v) 序列
    EdgeList,
    /// 邻接矩阵：N×N 权重网格
    AdjacencyMatrix,
    /// 邻接表：每个顶点到其邻居序列的映射
    AdjacencyList,
}

impl Representation {
    /// 全部三种表示方式
    pub const ALL: [Representation; 3] = [
        Representation::EdgeList,
        Representation::AdjacencyMatrix,
        Representation::AdjacencyList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::EdgeList => "edge-list",
            Representation::AdjacencyMatrix => "adjacency-matrix",
            Representation::AdjacencyList => "adjacency-list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_default() {
        assert_eq!(Orientation::default(), Orientation::Undirected);
        assert!(Orientation::Undirected.is_undirected());
        assert!(!Orientation::Directed.is_undirected());
    }

    #[test]
    fn test_representation_display() {
        assert_eq!(Representation::EdgeList.to_string(), "edge-list");
        assert_eq!(Representation::AdjacencyMatrix.to_string(), "adjacency-matrix");
        assert_eq!(Representation::AdjacencyList.to_string(), "adjacency-list");
    }
}
