//! 错误类型定义

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("顶点越界: {vertex} 不在 [0, {vertex_count}) 范围内")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },
}

impl Error {
    /// 构造顶点越界错误
    pub fn out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        Error::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = Error::out_of_range(7, 4);
        assert_eq!(err.to_string(), "顶点越界: 7 不在 [0, 4) 范围内");
    }
}
