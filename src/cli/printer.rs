//! 结果打印器
//!
//! 把图的结构、矩阵、边序列和度数渲染成表格文本

use crate::error::Result;
use crate::graph::{EdgeListGraph, Graph};
use crate::types::VertexId;
use prettytable::{format, row, Cell, Row, Table};

/// 图的表格渲染器
pub struct Printer;

impl Printer {
    /// 渲染图结构：每个顶点一行，列出其邻居序列
    pub fn format_structure<G: Graph>(graph: &G) -> Result<String> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["顶点", "邻居"]);

        for vertex in 0..graph.vertex_count() {
            let neighbors: Vec<String> = graph
                .neighbors(vertex)?
                .map(|v| v.to_string())
                .collect();
            let cell = if neighbors.is_empty() {
                "(无邻居)".to_string()
            } else {
                neighbors.join(", ")
            };
            table.add_row(row![vertex.to_string(), cell]);
        }

        Ok(table.to_string())
    }

    /// 渲染存在性矩阵：1 表示有边，0 表示无边
    ///
    /// 对任意表示方式通用，通过 has_edge 逐格查询。
    pub fn format_matrix<G: Graph>(graph: &G) -> Result<String> {
        let n = graph.vertex_count();
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        header.extend((0..n).map(|v| Cell::new(&v.to_string())));
        table.set_titles(Row::new(header));

        for src in 0..n {
            let mut cells = vec![Cell::new(&src.to_string())];
            for dst in 0..n {
                let mark = if graph.has_edge(src, dst)? { "1" } else { "0" };
                cells.push(Cell::new(mark));
            }
            table.add_row(Row::new(cells));
        }

        Ok(table.to_string())
    }

    /// 渲染边列表的插入序列
    pub fn format_edges(graph: &EdgeListGraph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "边"]);

        for (i, &(src, dst)) in graph.edges().iter().enumerate() {
            table.add_row(row![(i + 1).to_string(), format!("{} -> {}", src, dst)]);
        }

        table.to_string()
    }

    /// 渲染所有顶点的度数
    pub fn format_degrees<G: Graph>(graph: &G) -> Result<String> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["顶点", "度"]);

        for vertex in 0..graph.vertex_count() {
            table.add_row(row![
                vertex.to_string(),
                graph.degree(vertex)?.to_string()
            ]);
        }

        Ok(table.to_string())
    }

    /// 渲染图的统计信息
    pub fn format_stats<G: Graph>(graph: &G) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["属性", "值"]);
        table.add_row(row!["顶点数", graph.vertex_count().to_string()]);
        table.add_row(row!["边数", graph.edge_count().to_string()]);
        table.add_row(row!["方向", graph.orientation().to_string()]);
        table.to_string()
    }

    /// 渲染一次 neighbors 查询的结果
    pub fn format_neighbors(vertex: VertexId, neighbors: &[VertexId]) -> String {
        let list: Vec<String> = neighbors.iter().map(|v| v.to_string()).collect();
        if list.is_empty() {
            format!("顶点 {} 的邻居: (无)", vertex)
        } else {
            format!("顶点 {} 的邻居: {}", vertex, list.join(", "))
        }
    }
}
