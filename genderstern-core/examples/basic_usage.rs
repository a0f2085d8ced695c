//! Basic usage of the rewriting engine

use genderstern_core::GenderProcessor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let processor = GenderProcessor::new()?;

    let segments = [
        "Die Schüler treffen sich morgen.",
        "Der Lehrer und die Lehrerin lesen.",
        "50 Studenten warten vor dem Hörsaal.",
        "Nichts zu tun für diesen Satz.",
    ];

    let mut total = 0;
    for segment in segments {
        let output = processor.process(segment);
        println!("{segment}");
        println!("  -> {}", output.apply(segment));
        for span in &output.spans {
            println!(
                "     [{}..{}] {} => {} ({}, {})",
                span.start, span.end, span.original, span.display, span.confidence, span.cases
            );
        }
        total += output.certain_count;
    }
    println!("{total} certain replacements");

    Ok(())
}
