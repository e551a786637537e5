use helixfile_codec::{Method, Model};

pub fn print_model(model: &Model) {
    println!("\n📋 Model");
    println!("  • Format Version: {}", model.version);
    println!("  • Method: {} [--method]", model.method);
    if let Method::Church(church) = &model.method {
        println!(
            "    - Max Homopolymer: {} [--max-homopolymer]",
            church.max_homopolymer()
        );
    }
    match model.verify {
        Some(verify) => println!("  • Verification: {verify} [--verify]"),
        None => println!("  • Verification: None [--verify]"),
    }
    println!(
        "  • Row Index: {} [--no-index]",
        if model.indexed { "Embedded" } else { "None" }
    );
    println!("  • Segment Length: {} bits [--segment-length]", model.segment_length);

    if let Some(shape) = model.method.shape() {
        println!("\n📦 Payload");
        println!("  • File Size: {} bytes", shape.layout.size);
        println!("  • Bits per Row: {} (after index and verification)", shape.row_width);
    }
    println!();
}
