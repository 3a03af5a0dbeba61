use shaped_wordcloud::{
    load_font, CanvasSize, FontRasterizer, FontSource, Rgba, Shape, WordCloudGenerator,
};
use std::fs;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let text = "Rust is fast. Rust is safe. Rust has fearless concurrency, \
                zero cost abstractions and a friendly compiler. Cargo builds \
                crates, crates share code, and the community keeps Rust \
                reliable, efficient and fast.";

    let loaded = load_font(&FontSource::default())?;

    let mut generator = WordCloudGenerator::builder()
        .shape(Shape::Heart)
        .font_family(loaded.family.clone())
        .seed(42)
        .build();
    generator.process_text(text);

    println!(
        "Generating word cloud with {} distinct words...",
        generator.frequencies().len()
    );

    let mut canvas = FontRasterizer::new(loaded.font, CanvasSize::new(800, 600)?, Rgba::WHITE)?;
    let cloud = generator.draw(&mut canvas);

    fs::write("output_simple.jpg", canvas.encode_jpeg(100)?)?;
    fs::write("output_simple.svg", cloud.to_svg(Rgba::WHITE))?;

    println!("Done! Saved to output_simple.jpg and output_simple.svg");
    println!("Time elapsed: {:?}", start.elapsed());

    Ok(())
}
