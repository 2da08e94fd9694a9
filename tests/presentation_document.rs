//! End-to-end tests of the emitted presentation document.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{json, Value};
use showqueue::{
    AnswerOptionInput, BorderProps, BorderStyle, CharacterProps, CodeFileInput, CodeLanguage,
    CodeProjectInput, CollectingSink, CsvCell, CsvInput, Diagnostic, DiagnosticSink, ImageProps,
    MathProps, MediaDraft, MediaKind, MediaOptions, PdfInput, Presentation, QrCodeInput,
    QuestionInput, QuizInput, SequentialIds, ShapeProps, SourceInput, StickerProps, TextProps,
    VideoInput, VideoTimestamp,
};

fn deck() -> (Presentation, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let p = Presentation::new()
        .with_id_generator(Arc::new(SequentialIds::new("t")))
        .with_diagnostics(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
    (p, sink)
}

fn parsed(p: &Presentation) -> Value {
    serde_json::from_str(&p.serialize().unwrap()).unwrap()
}

#[test]
fn document_has_exactly_two_top_level_keys() {
    let (p, _) = deck();
    let doc = parsed(&p);
    let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 2);
    assert_eq!(doc["mediaQueue"], json!([]));
    assert_eq!(doc["sources"], json!([]));
}

#[test]
fn youtube_watch_url_becomes_nocookie_embed() {
    let (mut p, sink) = deck();
    p.add_youtube("Video", "https://www.youtube.com/watch?v=dQw4w9WgXcQ", MediaOptions::default());

    let doc = parsed(&p);
    let item = &doc["mediaQueue"][0];
    assert_eq!(item["type"], "youtube");
    assert_eq!(item["embedUrl"], "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ");
    assert_eq!(item["url"], "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert!(sink.is_empty());
}

#[test]
fn invalid_youtube_url_is_dropped_with_diagnostic() {
    let (mut p, sink) = deck();
    p.add_url("Before", "https://example.org", MediaOptions::default());
    p.add_youtube("Video", "not-a-url", MediaOptions::default());

    assert_eq!(p.len(), 1);
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::InvalidYouTubeUrl { name: "Video".into(), url: "not-a-url".into() }]
    );
    assert!(!p.serialize().unwrap().contains("not-a-url"));
}

#[test]
fn youtube_shaped_links_on_other_hosts_are_dropped() {
    let (mut p, sink) = deck();
    p.add_url("Before", "https://example.org", MediaOptions::default());

    let url = "https://vimeo.com/embed/abcdefghijk";
    p.add_youtube("Lookalike", url, MediaOptions::default());

    assert_eq!(p.len(), 1);
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::InvalidYouTubeUrl { name: "Lookalike".into(), url: url.into() }]
    );
    assert!(!p.serialize().unwrap().contains("youtube-nocookie"));
}

#[test]
fn video_chapter_marks_reach_the_document() {
    let (mut p, _) = deck();
    p.add_video(VideoInput {
        start_time: Some(5.0),
        timestamps: Some(vec![VideoTimestamp { time: 60.0, label: "Demo".into() }]),
        ..VideoInput::new("Talk", "data:video/mp4;base64,AA")
    })
    .add_pdf(PdfInput { current_page: Some(3), ..PdfInput::new("Notes", "data:application/pdf;base64,AA") });

    let doc = parsed(&p);
    assert_eq!(doc["mediaQueue"][0]["startTime"], 5.0);
    assert_eq!(doc["mediaQueue"][0]["timestamps"], json!([{ "time": 60.0, "label": "Demo" }]));
    assert_eq!(doc["mediaQueue"][1]["currentPage"], 3);
}

#[test]
fn csv_content_is_split_and_coerced() {
    let (mut p, _) = deck();
    p.add_csv(CsvInput::from_content("t", "a,b\n1,x\n2,y"));

    let doc = parsed(&p);
    let item = &doc["mediaQueue"][0];
    assert_eq!(item["type"], "csv");
    assert_eq!(item["headers"], json!(["a", "b"]));
    assert_eq!(item["rows"], json!([[1, "x"], [2, "y"]]));
    assert_eq!(item["content"], "a,b\n1,x\n2,y");
}

#[test]
fn csv_rows_reconstitute_content() {
    let (mut p, _) = deck();
    p.add_csv(CsvInput::from_rows(
        "scores",
        vec!["name".into(), "score".into()],
        vec![vec![CsvCell::from("ada"), CsvCell::from(10_i64)]],
    ));
    assert_eq!(parsed(&p)["mediaQueue"][0]["content"], "name,score\nada,10");
}

#[test]
fn csv_without_data_is_dropped() {
    let (mut p, sink) = deck();
    p.add_csv(CsvInput { name: "t".into(), ..CsvInput::default() });
    assert!(p.is_empty());
    assert_eq!(sink.diagnostics(), vec![Diagnostic::EmptyCsv { name: "t".into() }]);
}

#[test]
fn slide_elements_keep_append_order() {
    let (mut p, _) = deck();
    let mut slide = p.new_slide("Ordered");
    slide
        .add_text(TextProps::default())
        .add_image(ImageProps::default())
        .add_math(MathProps::default());
    let expected: Vec<String> = slide.elements().iter().map(|e| e.id.to_string()).collect();
    p.add_slide(&slide, MediaOptions::default());

    let doc = parsed(&p);
    let item = &doc["mediaQueue"][0];
    assert_eq!(item["type"], "created-slide");
    assert_eq!(item["name"], "Ordered");
    let elements = item["slide"]["elements"].as_array().unwrap();
    let ids: Vec<String> = elements.iter().map(|e| e["id"].as_str().unwrap().to_string()).collect();
    let types: Vec<&str> = elements.iter().map(|e| e["type"].as_str().unwrap()).collect();
    assert_eq!(ids, expected);
    assert_eq!(types, ["text", "image", "math"]);
}

#[test]
fn slide_changes_after_queueing_do_not_leak() {
    let (mut p, _) = deck();
    let mut slide = p.new_slide("Snapshot");
    slide.add_text(TextProps::default());
    p.add_slide(&slide, MediaOptions::default());

    slide
        .add_shape(ShapeProps::default())
        .set_background_color("#000000")
        .set_border(BorderProps::style(BorderStyle::Solid));

    let MediaKind::CreatedSlide { slide: queued } = &p.media_queue()[0].kind else {
        panic!("expected created slide");
    };
    assert_eq!(queued.elements.len(), 1);
    assert_eq!(queued.background_color, "#ffffff");
    assert!(queued.border.is_none());
}

#[test]
fn repeated_border_styles_never_default_color_or_width() {
    let (mut p, _) = deck();
    let mut slide = p.new_slide("Border");
    slide
        .set_border(BorderProps::style(BorderStyle::Solid))
        .set_border(BorderProps::style(BorderStyle::Ants));
    p.add_slide(&slide, MediaOptions::default());

    assert_eq!(parsed(&p)["mediaQueue"][0]["slide"]["border"], json!({ "style": "ants" }));
}

#[test]
fn serialize_is_repeatable_and_non_freezing() {
    let (mut p, _) = deck();
    p.add_url("A", "https://a.example", MediaOptions::default());
    p.add_source(SourceInput::new("Ref", "https://ref.example"));

    let first = parsed(&p);
    let second = parsed(&p);
    assert_eq!(first, second);

    p.add_url("B", "https://b.example", MediaOptions::default());
    let third = parsed(&p);
    assert_eq!(third["mediaQueue"].as_array().unwrap().len(), 2);
    assert_eq!(first["mediaQueue"].as_array().unwrap().len(), 1);
}

#[test]
fn every_identifier_is_distinct() {
    let (mut p, _) = deck();
    let mut slide = p.new_slide("All elements");
    slide
        .add_text(TextProps::default())
        .add_image(ImageProps::default())
        .add_math(MathProps::default())
        .add_shape(ShapeProps::default())
        .add_sticker("⭐", StickerProps::default())
        .add_character(CharacterProps::default());
    p.add_slide(&slide, MediaOptions::default())
        .add_quiz(
            QuizInput::new(
                "Quiz",
                vec![QuestionInput::multiple_choice(
                    "2 + 2?",
                    vec![AnswerOptionInput::new("4", true), AnswerOptionInput::new("5", false)],
                )],
            ),
            MediaOptions::default(),
        )
        .add_code_project(
            CodeProjectInput::new(
                "Project",
                vec![CodeFileInput::new("a.py", CodeLanguage::Python, "print(1)")],
            ),
            MediaOptions::default(),
        )
        .add_qr_code(QrCodeInput::new("QR", "https://qr.example"))
        .add_source(SourceInput::new("Src", "https://src.example"));

    let doc = parsed(&p);
    let mut ids = Vec::new();
    collect_ids(&doc, &mut ids);
    let unique: HashSet<&String> = ids.iter().collect();
    assert!(ids.len() >= 17, "collected {} ids", ids.len());
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty()));
}

fn collect_ids(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(id)) = map.get("id") {
                out.push(id.clone());
            }
            map.values().for_each(|v| collect_ids(v, out));
        }
        Value::Array(items) => items.iter().for_each(|v| collect_ids(v, out)),
        _ => {}
    }
}

#[test]
fn quiz_and_project_items_mirror_titles() {
    let (mut p, _) = deck();
    p.add_quiz(
        QuizInput::new("Warm-up", vec![QuestionInput::open_text("Why Rust?")]),
        MediaOptions::default(),
    )
    .add_code_project(CodeProjectInput::new("Demo", Vec::new()), MediaOptions::default());

    let doc = parsed(&p);
    assert_eq!(doc["mediaQueue"][0]["name"], "Warm-up");
    assert_eq!(doc["mediaQueue"][0]["quiz"]["questions"][0]["type"], "open-text");
    assert_eq!(doc["mediaQueue"][1]["name"], "Demo");
    assert_eq!(doc["mediaQueue"][1]["viewMode"], "overview");
}

#[test]
fn generic_media_item_gets_id_and_default_transition() {
    let (mut p, _) = deck();
    p.add_media_item(MediaDraft::new("Raw", MediaKind::Url { url: "https://raw.example".into() }));

    let doc = parsed(&p);
    let item = &doc["mediaQueue"][0];
    assert_eq!(item["transition"], "fade");
    assert_eq!(item["type"], "url");
    assert!(!item["id"].as_str().unwrap().is_empty());
}
