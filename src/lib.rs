//! RepGraph - 静态图的三种经典表示
//!
//! 在统一接口后实现三种教科书级的图存储结构：
//! - 边列表（Edge List）
//! - 邻接矩阵（Adjacency Matrix）
//! - 邻接表（Adjacency List）
//!
//! 三者对外语义一致，差异只在内部存储与时间/空间开销，
//! 用于演示表示方式之间的取舍。

pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{
    AdjacencyListGraph, AdjacencyMatrixGraph, AnyGraph, EdgeListGraph, Graph,
};
pub use types::{Orientation, Representation, VertexId, Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
