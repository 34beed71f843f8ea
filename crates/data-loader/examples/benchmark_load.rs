use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading dataset from {}...\n", data_dir.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_dir(data_dir).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let cells = dataset.similarity.dim() * dataset.similarity.dim();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.movies.len());
    println!("Similarity cells: {}", cells);
    println!(
        "Genres: {}",
        dataset
            .genres
            .as_ref()
            .map_or_else(|| "derived from movies".to_string(), |g| g.len().to_string())
    );
    println!(
        "\nPerformance: {:.0} similarity cells/second",
        cells as f64 / elapsed.as_secs_f64()
    );
}
