//! Builds a sample presentation covering every media kind and prints its JSON.
//!
//! Usage:
//!   `cargo run --bin showqueue-demo`
//!
//! Set `RUST_LOG=debug` to watch items being queued, and `SHOWQUEUE_COMPACT=1`
//! for single-line output.

use anyhow::Context;
use showqueue::{
    AnswerOptionInput, BorderProps, BorderStyle, CharacterProps, CodeFileInput, CodeLanguage,
    CodeProjectInput, Config, CsvInput, MathProps, MediaOptions, Presentation, QrCodeInput,
    QuestionInput, QuizInput, ShapeProps, SourceInput, StickerProps, TextProps, Transition,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("loading configuration")?;
    tracing::info!("{} {}", config.app_name(), config.app_version());

    let mut deck = Presentation::from_config(&config);

    let mut title = deck.new_slide("Rust in Ten Minutes");
    title
        .set_background_color("#1e1e2e")
        .set_border(BorderProps::style(BorderStyle::Ants))
        .add_text(TextProps {
            content: Some("Rust in Ten Minutes".into()),
            font_size: Some(48.0),
            color: Some("#ffffff".into()),
            ..TextProps::default()
        })
        .add_math(MathProps {
            content: Some(r"O(n \log n)".into()),
            y: Some(120.0),
            ..MathProps::default()
        })
        .add_shape(ShapeProps {
            shape: Some("circle".into()),
            fill_color: Some("#f38ba8".into()),
            ..ShapeProps::default()
        })
        .add_sticker("🦀", StickerProps { size: Some(80.0), ..StickerProps::default() })
        .add_character(CharacterProps::default());

    deck.add_slide(&title, MediaOptions::transition(Transition::Zoom))
        .add_youtube(
            "Ownership explained",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            MediaOptions::notes("Stop at 2:30"),
        )
        .add_url("The Book", "https://doc.rust-lang.org/book/", MediaOptions::default())
        .add_code_file(
            "main.rs",
            "fn main() {\n    println!(\"hello\");\n}\n",
            CodeLanguage::Rust,
            MediaOptions::default(),
        )
        .add_csv(CsvInput::from_content(
            "Benchmarks",
            "lang,ms\nrust,12\npython,240\n",
        ))
        .add_quiz(
            QuizInput::new(
                "Check-in",
                vec![
                    QuestionInput::multiple_choice(
                        "Who owns a moved value?",
                        vec![
                            AnswerOptionInput::new("The new binding", true),
                            AnswerOptionInput::new("Both bindings", false),
                        ],
                    ),
                    QuestionInput::open_text("What confused you most?").with_timer(60),
                ],
            ),
            MediaOptions::default(),
        )
        .add_code_project(
            CodeProjectInput::new(
                "Hello web",
                vec![
                    CodeFileInput::new("index.html", CodeLanguage::Html, "<h1>Hi</h1>"),
                    CodeFileInput::new("style.css", CodeLanguage::Css, "h1 { color: red; }"),
                ],
            ),
            MediaOptions::default(),
        )
        .add_qr_code(QrCodeInput::new("Slides", "https://example.org/slides"))
        .add_source(SourceInput {
            tags: Some(vec!["book".into()]),
            ..SourceInput::new("The Rust Programming Language", "https://doc.rust-lang.org/book/")
        });

    println!("{}", deck.serialize().context("serializing presentation")?);
    Ok(())
}
