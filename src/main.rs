use anyhow::Context;
use clap::Parser;
use floodgrid::collections::{AdjacencyGraph, LinkedList};
use floodgrid::io::{grid_to_string, load_grid};
use floodgrid::{flood_fill, Grid, Position};

#[derive(Parser)]
#[command(version, about = "Flood-fill a grid from a starting cell")]
struct Opts {
    /// JSON file holding an array of rows; the built-in demo grid if omitted
    #[arg(long)]
    grid: Option<String>,

    /// Starting cell as `row,col`
    #[arg(long, value_parser = parse_position, default_value = "2,2")]
    start: Position,

    /// Value written over the region
    #[arg(long, default_value_t = 2)]
    value: u8,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s.split_once(',').ok_or_else(|| format!("expected row,col, got {:?}", s))?;
    let row = row.trim().parse().map_err(|e| format!("bad row {:?}: {}", row, e))?;
    let col = col.trim().parse().map_err(|e| format!("bad col {:?}: {}", col, e))?;
    Ok(Position::new(row, col))
}

fn demo_grid() -> Grid<u8> {
    Grid::new(vec![
        vec![1, 0, 1, 1, 0],
        vec![0, 1, 0, 1, 0],
        vec![1, 1, 1, 1, 1],
        vec![0, 0, 1, 0, 1],
        vec![1, 0, 0, 0, 0],
    ])
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = if opts.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    demo_linked_list();
    demo_adjacency_graph()?;

    println!("\n--- Flood Fill ---");
    match &opts.grid {
        Some(path) => {
            let mut grid = load_grid(path)?;
            fill_and_print(&mut grid, opts.start, opts.value)?;
        }
        None => {
            let mut grid = demo_grid();
            fill_and_print(&mut grid, opts.start, opts.value)?;
            fill_and_print(&mut grid, Position::new(0, 4), 3)?;
        }
    }
    Ok(())
}

fn fill_and_print(grid: &mut Grid<u8>, start: Position, value: u8) -> anyhow::Result<()> {
    let old = *grid
        .get(start)
        .with_context(|| format!("start {} is outside the grid", start))?;
    println!("Want to flood-fill {} -> {} starting from {}", old, value, start);
    println!("{}\n", grid_to_string(grid));

    let region = flood_fill(grid, start, value)?;
    tracing::info!(cells = region.len(), "filled region");
    println!("{}\n", grid_to_string(grid));
    Ok(())
}

fn demo_linked_list() {
    println!("--- Linked List ---");
    let mut list: LinkedList<i64> = LinkedList::new();
    list.push_front(10);
    list.push_front(-10);
    list.push_back(30);
    list.push_back(40);
    println!("  {}", list);

    let tail: LinkedList<i64> = list.iter().skip(1).copied().collect();
    println!("  {}", tail);
    println!("  sum of squares: {}", list.accumulate(|x| x * x));
    println!("  sum: {}", list.accumulate(|x| *x));
}

fn demo_adjacency_graph() -> anyhow::Result<()> {
    println!("\n--- Adjacency Graph ---");
    let mut graph = AdjacencyGraph::new(5);
    for (u, v) in [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)] {
        graph.add_edge(u, v)?;
    }
    graph.display();
    println!("  {} vertices, {} edges", graph.vertex_count(), graph.edge_count());
    Ok(())
}
