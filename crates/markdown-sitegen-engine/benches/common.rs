// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

// Every block type once, with each inline span kind. No '_' outside italics,
// since a stray one is an unbalanced delimiter.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_, `code` and a [link](https://example.com/page).\n\n![logo](/images/logo.png)\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quoted\n> line\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// One long paragraph dense with inline markup, to stress the span passes.
#[allow(dead_code)]
pub fn generate_inline_heavy_text(spans: usize) -> String {
    (0..spans)
        .map(|i| match i % 5 {
            0 => format!("plain {i} "),
            1 => format!("**bold {i}** "),
            2 => format!("_italic {i}_ "),
            3 => format!("[link {i}](/page/{i}) "),
            _ => format!("![image {i}](/img/{i}.png) "),
        })
        .collect()
}
