//! End-to-end checks on the built-in deck, read back from disk.

use deckwright::content::{oidc_beta_session, oidc_beta_title};
use deckwright::{
    open_presentation, save_deck, Background, DeckOptions, OoxmlContainer, PlaceholderKind,
    Presentation, RgbColor, SlideLayout, SlideSize,
};
use tempfile::TempDir;

const DARK: RgbColor = RgbColor::new(24, 26, 27);

fn saved_deck() -> (TempDir, Presentation) {
    let dir = TempDir::new().unwrap();
    let options = DeckOptions::new().with_output(dir.path().join("OIDC_Beta_Intro.pptx"));
    let path = save_deck(&options).unwrap();
    assert!(path.exists());
    let prs = open_presentation(&path).unwrap();
    (dir, prs)
}

#[test]
fn slide_count_is_title_plus_records() {
    let (_dir, prs) = saved_deck();
    assert_eq!(prs.slide_count(), 1 + oidc_beta_session().len());
    assert_eq!(prs.slide_count(), 11);
}

#[test]
fn canvas_is_widescreen() {
    let (_dir, prs) = saved_deck();
    assert_eq!(prs.slide_size(), SlideSize::WIDESCREEN);
    assert!((prs.slide_size().width.inches() - 13.33).abs() < 1e-3);
    assert!((prs.slide_size().height.inches() - 7.5).abs() < 1e-9);
}

#[test]
fn title_slide_content() {
    let (_dir, prs) = saved_deck();
    let title = oidc_beta_title();
    let slide = prs.slide(0).unwrap();

    assert_eq!(slide.layout, SlideLayout::TitleSlide);
    assert_eq!(slide.title_text(), title.title);
    assert_eq!(slide.title().unwrap().placeholder.unwrap().kind, PlaceholderKind::CenterTitle);

    let subtitle = slide.placeholder(1).unwrap();
    assert_eq!(subtitle.placeholder.unwrap().kind, PlaceholderKind::Subtitle);
    assert_eq!(subtitle.text(), "Presenter: Heidi Housten\nSolidify – now a part of Eficode");
    assert_eq!(prs.metadata.title.as_deref(), Some(title.title.as_str()));
}

#[test]
fn body_paragraphs_match_records() {
    let (_dir, prs) = saved_deck();

    for (slide, record) in prs.slides[1..].iter().zip(oidc_beta_session()) {
        assert_eq!(slide.layout, SlideLayout::TitleAndContent);
        assert_eq!(slide.title_text(), record.title);

        let body = slide.placeholder(1).unwrap().text_frame.as_ref().unwrap();
        assert_eq!(body.paragraphs.len(), record.bullets.len(), "{}", record.title);
        for (para, bullet) in body.paragraphs.iter().zip(&record.bullets) {
            assert_eq!(&para.text(), bullet);
            assert_eq!(para.level, 0);
            assert_eq!(para.font.size_pt(), Some(20.0));
        }
        assert_eq!(slide.notes_text(), record.notes);
    }
}

#[test]
fn agenda_slide() {
    let (_dir, prs) = saved_deck();
    let agenda = prs.slide(1).unwrap();

    assert_eq!(agenda.title_text(), "Agenda");
    let body = agenda.placeholder(1).unwrap().text();
    assert_eq!(
        body.lines().collect::<Vec<_>>(),
        [
            "Part 1: The Why and What (15 min)",
            "• Static Keys Problem",
            "• OIDC Solution & GitHub’s Role",
            "Part 2: Workload Identity & Trust (20 min)",
            "• JWT Deep Dive",
            "• Cloud Federation Demos",
            "Feedback & Q&A",
        ]
    );
    assert_eq!(
        agenda.notes_text(),
        "Outline of today's beta session for developers/devops."
    );
}

#[test]
fn every_run_is_white_on_dark() {
    let (_dir, prs) = saved_deck();

    for slide in &prs.slides {
        assert_eq!(slide.background(), Some(&Background::Solid(DARK)));
        for frame in slide.shapes.iter().filter_map(|s| s.text_frame.as_ref()) {
            for run in frame.runs() {
                assert_eq!(run.font.color, Some(RgbColor::WHITE), "{:?}", run.text);
            }
        }
    }
}

#[test]
fn rebuild_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.pptx");
    let second = dir.path().join("second.pptx");

    save_deck(&DeckOptions::new().with_output(&first)).unwrap();
    save_deck(&DeckOptions::new().with_output(&second)).unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.pptx");
    std::fs::write(&path, b"stale").unwrap();

    save_deck(&DeckOptions::new().with_output(&path)).unwrap();
    assert_eq!(open_presentation(&path).unwrap().slide_count(), 11);
}

#[test]
fn unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("deck.pptx");
    let err = save_deck(&DeckOptions::new().with_output(path)).unwrap_err();
    assert!(matches!(err, deckwright::Error::Io(_)));
}

#[test]
fn package_layout() {
    let (dir, _prs) = saved_deck();
    let container = OoxmlContainer::open(dir.path().join("OIDC_Beta_Intro.pptx")).unwrap();

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/notesMasters/notesMaster1.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide11.xml",
        "ppt/notesSlides/notesSlide11.xml",
    ] {
        assert!(container.exists(part), "missing {}", part);
    }
    assert_eq!(container.list_files_with_prefix("ppt/slideLayouts/slideLayout").len(), 5);

    let presentation = container.read_xml("ppt/presentation.xml").unwrap();
    assert!(presentation.contains(r#"<p:sldSz cx="12188952" cy="6858000"/>"#));

    let slide = container.read_xml("ppt/slides/slide2.xml").unwrap();
    let bg = slide.find("<p:bg>").unwrap();
    let tree = slide.find("<p:spTree>").unwrap();
    assert!(bg < tree);
    assert!(slide.contains(r#"<a:srgbClr val="181A1B"/>"#));
}
