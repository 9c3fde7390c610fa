//! RepGraph 演示程序
//!
//! 用三种表示方式构建同一个示例图并执行邻居/边查询

use clap::Parser;
use colored::Colorize;
use repgraph::cli::Printer;
use repgraph::graph::{AnyGraph, Graph};
use repgraph::types::{Orientation, Representation, VertexId};
use tracing_subscriber::EnvFilter;

/// 示例图：7 个顶点，顶点 6 孤立
const SAMPLE_VERTEX_COUNT: usize = 7;
const SAMPLE_EDGES: [(VertexId, VertexId); 6] = [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5)];

#[derive(Parser, Debug)]
#[command(name = "repgraph-demo")]
#[command(about = "静态图三种表示的演示程序")]
struct Args {
    /// 表示方式（缺省时依次演示全部三种）
    #[arg(short, long, value_enum)]
    representation: Option<Representation>,

    /// 构建有向图
    #[arg(short, long)]
    directed: bool,

    /// 以 JSON 输出构建的图，不打印表格
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let orientation = if args.directed {
        Orientation::Directed
    } else {
        Orientation::Undirected
    };

    println!("RepGraph 演示 v{}", repgraph::VERSION);
    println!("=================\n");

    let representations = match args.representation {
        Some(rep) => vec![rep],
        None => Representation::ALL.to_vec(),
    };

    for rep in representations {
        let graph = build_sample(rep, orientation)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&graph)?);
        } else {
            run_demo(&graph)?;
        }
    }

    Ok(())
}

/// 构建固定示例图
fn build_sample(representation: Representation, orientation: Orientation) -> anyhow::Result<AnyGraph> {
    let mut graph = AnyGraph::with_orientation(representation, SAMPLE_VERTEX_COUNT, orientation);
    for &(src, dst) in &SAMPLE_EDGES {
        graph.add_edge(src, dst)?;
    }
    Ok(graph)
}

/// 打印一种表示方式的完整演示
fn run_demo(graph: &AnyGraph) -> anyhow::Result<()> {
    let title = format!("[{}]", graph.representation());
    println!("{}", title.green().bold());

    println!("\n1. 图统计信息");
    println!("{}", Printer::format_stats(graph));

    println!("2. 图结构");
    println!("{}", Printer::format_structure(graph)?);

    println!("3. 存在性矩阵");
    println!("{}", Printer::format_matrix(graph)?);

    if let AnyGraph::EdgeList(edge_list) = graph {
        println!("4. 边插入序列");
        println!("{}", Printer::format_edges(edge_list));
    }

    println!("5. 顶点度数");
    println!("{}", Printer::format_degrees(graph)?);

    println!("6. 检查边是否存在:");
    for (src, dst) in [(0, 1), (0, 4), (6, 0)] {
        println!(
            "   存在边 {} -> {} ? {}",
            src,
            dst,
            graph.has_edge(src, dst)?
        );
    }

    println!("\n7. 列出邻居:");
    for vertex in [0, 3, 6] {
        let neighbors: Vec<VertexId> = graph.neighbors(vertex)?.collect();
        println!("   {}", Printer::format_neighbors(vertex, &neighbors));
    }

    println!();
    Ok(())
}
