//! Normalize tracking over a built-in sample tree and print the summary line.

use retrack::{
    LetterSpacing, Node, PreloadedFonts, TextElement, TextSpan, TrackingTables, Transformer,
    TypefaceVariant,
};

fn sample_selection() -> Vec<Node> {
    vec![
        Node::container(
            "hero",
            vec![
                Node::Text(TextElement::new("headline").with_span(TextSpan::new(
                    24,
                    "SF Pro Display",
                    17.0,
                    LetterSpacing::pixels(0.0),
                ))),
                Node::Text(
                    TextElement::new("body")
                        .with_span(TextSpan::new(
                            80,
                            "SF Pro Text",
                            13.0,
                            LetterSpacing::pixels(0.0),
                        ))
                        .with_span(TextSpan::new(
                            12,
                            "SF Pro Text",
                            28.0,
                            LetterSpacing::pixels(0.0),
                        )),
                ),
                Node::other("background"),
            ],
        ),
        Node::Text(TextElement::new("caption").with_span(
            TextSpan::new(30, "Helvetica", 11.0, LetterSpacing::pixels(0.0)),
        )),
    ]
}

async fn run() {
    let tables = TrackingTables::new();
    let fonts = PreloadedFonts::new(TypefaceVariant::ALL.map(|variant| variant.family()));
    let transformer = Transformer::new(&tables, &fonts);

    let mut selection = sample_selection();
    let report = transformer.apply(&mut selection).await;
    println!("{}", report.summary());
    println!(
        "counts: modified={} unmodified={} unsupported={}",
        report.counts.modified,
        report.counts.supported_unmodified,
        report.counts.unsupported_or_styled
    );
}

fn main() {
    env_logger::init();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build tokio runtime");
    runtime.block_on(run());
}
