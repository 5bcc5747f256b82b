//! Integration tests for pdf-core
//!
//! These tests write real documents and read them back with lopdf.

use lopdf::{Document, Object};
use pdf_core::{Align, Color, FontStyle, FontWeight, PageSize, PdfDocument, PdfError};
use pretty_assertions::assert_eq;

fn reload(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).expect("generated PDF should parse")
}

fn page_content(doc: &Document, page: u32) -> String {
    let pages = doc.get_pages();
    let page_id = pages[&page];
    let content = doc.get_page_content(page_id).unwrap();
    String::from_utf8_lossy(&content).into_owned()
}

#[test]
fn test_single_page_document() {
    let mut doc = PdfDocument::new(PageSize::A4);
    let page = doc.add_page();
    doc.set_font_size(12.0);
    doc.insert_text("Hello", page, 72.0, 72.0, Align::Left)
        .unwrap();

    let bytes = doc.to_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let reloaded = reload(&bytes);
    assert_eq!(reloaded.get_pages().len(), 1);
}

#[test]
fn test_multi_page_document() {
    let mut doc = PdfDocument::new(PageSize::LETTER);
    for _ in 0..3 {
        let page = doc.add_page();
        doc.insert_text(&format!("Page {page}"), page, 72.0, 72.0, Align::Left)
            .unwrap();
    }
    assert_eq!(doc.page_count(), 3);

    let reloaded = reload(&doc.to_bytes().unwrap());
    assert_eq!(reloaded.get_pages().len(), 3);
}

#[test]
fn test_media_box_matches_page_size() {
    let mut doc = PdfDocument::new(PageSize::LETTER);
    doc.add_page();
    let reloaded = reload(&doc.to_bytes().unwrap());

    let page_id = reloaded.get_pages()[&1];
    let page = reloaded.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let width = media_box[2].as_float().unwrap();
    let height = media_box[3].as_float().unwrap();
    assert_eq!(width, 612.0);
    assert_eq!(height, 792.0);
}

#[test]
fn test_text_is_positioned_from_top() {
    let mut doc = PdfDocument::new(PageSize::LETTER);
    let page = doc.add_page();
    doc.set_compression(false);
    doc.insert_text("A", page, 100.0, 92.0, Align::Left).unwrap();

    let reloaded = reload(&doc.to_bytes().unwrap());
    let content = page_content(&reloaded, 1);
    // 792 - 92 = 700
    assert!(content.contains("100 700 Td"), "content was: {content}");
    assert!(content.contains("<41> Tj"));
}

#[test]
fn test_compressed_content_decodes() {
    let mut doc = PdfDocument::new(PageSize::A4);
    let page = doc.add_page();
    doc.insert_text("Compressed", page, 50.0, 50.0, Align::Left)
        .unwrap();

    let reloaded = reload(&doc.to_bytes().unwrap());
    let page_id = reloaded.get_pages()[&1];
    let page_dict = reloaded.get_dictionary(page_id).unwrap();
    let contents_id = page_dict.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = reloaded.get_object(contents_id).unwrap().as_stream().unwrap();
    assert_eq!(
        stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
        b"FlateDecode"
    );

    let content = page_content(&reloaded, 1);
    assert!(content.contains("BT"));
    assert!(content.contains("Tj"));
}

#[test]
fn test_fonts_registered_per_page() {
    let mut doc = PdfDocument::new(PageSize::A4);
    let page = doc.add_page();
    doc.insert_text("Regular", page, 50.0, 50.0, Align::Left)
        .unwrap();
    doc.set_font_weight(FontWeight::Bold);
    doc.insert_text("Bold", page, 50.0, 70.0, Align::Left).unwrap();
    doc.set_font_weight(FontWeight::Regular);
    doc.set_font_style(FontStyle::Italic);
    doc.insert_text("Italic", page, 50.0, 90.0, Align::Left)
        .unwrap();

    let reloaded = reload(&doc.to_bytes().unwrap());
    let page_id = reloaded.get_pages()[&1];
    let page = reloaded.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();

    let mut base_fonts: Vec<String> = fonts
        .iter()
        .map(|(_, font_ref)| {
            let font = reloaded
                .get_dictionary(font_ref.as_reference().unwrap())
                .unwrap();
            String::from_utf8_lossy(font.get(b"BaseFont").unwrap().as_name().unwrap()).into_owned()
        })
        .collect();
    base_fonts.sort();
    assert_eq!(
        base_fonts,
        vec!["Helvetica", "Helvetica-Bold", "Helvetica-Oblique"]
    );
}

#[test]
fn test_font_objects_shared_between_pages() {
    let mut doc = PdfDocument::new(PageSize::A4);
    for _ in 0..2 {
        let page = doc.add_page();
        doc.insert_text("Same font", page, 50.0, 50.0, Align::Left)
            .unwrap();
    }

    let reloaded = reload(&doc.to_bytes().unwrap());
    let font_objects = reloaded
        .objects
        .values()
        .filter(|obj| match obj {
            Object::Dictionary(dict) => dict
                .get(b"Type")
                .and_then(|t| t.as_name())
                .map(|name| name == b"Font")
                .unwrap_or(false),
            _ => false,
        })
        .count();
    assert_eq!(font_objects, 1);
}

#[test]
fn test_draw_line() {
    let mut doc = PdfDocument::new(PageSize::LETTER);
    let page = doc.add_page();
    doc.set_compression(false);
    doc.set_draw_color(Color::gray());
    doc.set_line_width(0.5);
    doc.draw_line(page, 10.0, 92.0, 200.0, 92.0).unwrap();

    let reloaded = reload(&doc.to_bytes().unwrap());
    let content = page_content(&reloaded, 1);
    assert!(content.contains("10 700 m"));
    assert!(content.contains("200 700 l"));
    assert!(content.contains("0.5 w"));
}

#[test]
fn test_document_info() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.add_page();
    doc.set_title("Prescription Slip");
    doc.set_producer("rxslip");

    let reloaded = reload(&doc.to_bytes().unwrap());
    let info_id = reloaded
        .trailer
        .get(b"Info")
        .unwrap()
        .as_reference()
        .unwrap();
    let info = reloaded.get_dictionary(info_id).unwrap();
    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Prescription Slip"
    );
    assert_eq!(info.get(b"Producer").unwrap().as_str().unwrap(), b"rxslip");
}

#[test]
fn test_non_ascii_title_is_utf16() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.add_page();
    doc.set_title("Prescription Slip Łukasz");

    let reloaded = reload(&doc.to_bytes().unwrap());
    let info_id = reloaded
        .trailer
        .get(b"Info")
        .unwrap()
        .as_reference()
        .unwrap();
    let info = reloaded.get_dictionary(info_id).unwrap();
    let title = info.get(b"Title").unwrap().as_str().unwrap();
    assert_eq!(&title[..2], &[0xFE, 0xFF]);

    let units: Vec<u16> = title[2..]
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    assert_eq!(String::from_utf16(&units).unwrap(), "Prescription Slip Łukasz");
}

#[test]
fn test_text_outside_win_ansi_is_rejected() {
    let mut doc = PdfDocument::new(PageSize::A4);
    let page = doc.add_page();
    let err = doc
        .insert_text("Name: Łukasz Dvořák", page, 50.0, 50.0, Align::Left)
        .unwrap_err();
    assert!(matches!(err, PdfError::UnencodableText { character: 'Ł', .. }));
}

fn mixed_font_document() -> Vec<u8> {
    let mut doc = PdfDocument::new(PageSize::A4);
    for _ in 0..3 {
        let page = doc.add_page();
        doc.set_font_weight(FontWeight::Bold);
        doc.insert_text("Bold", page, 50.0, 50.0, Align::Left).unwrap();
        doc.set_font_weight(FontWeight::Regular);
        doc.insert_text("Regular", page, 50.0, 70.0, Align::Left)
            .unwrap();
        doc.set_font_style(FontStyle::Italic);
        doc.insert_text("Italic", page, 50.0, 90.0, Align::Left)
            .unwrap();
        doc.set_font_style(FontStyle::Normal);
    }
    doc.set_title("Same");
    doc.to_bytes().unwrap()
}

#[test]
fn test_identical_documents_have_identical_bytes() {
    let first = mixed_font_document();
    for _ in 0..10 {
        assert!(mixed_font_document() == first);
    }
}

#[test]
fn test_to_bytes_twice_is_stable() {
    let mut doc = PdfDocument::new(PageSize::A4);
    let page = doc.add_page();
    doc.insert_text("Once", page, 50.0, 50.0, Align::Left).unwrap();

    let first = reload(&doc.to_bytes().unwrap());
    let second = reload(&doc.to_bytes().unwrap());
    assert_eq!(page_content(&first, 1), page_content(&second, 1));
}

#[test]
fn test_text_width_follows_font_state() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.set_font_size(10.0);
    let regular = doc.get_text_width("Prescription");
    doc.set_font_weight(FontWeight::Bold);
    let bold = doc.get_text_width("Prescription");
    doc.set_font_size(20.0);
    let bold_large = doc.get_text_width("Prescription");

    assert!(bold > regular);
    assert!((bold_large - bold * 2.0).abs() < 1e-9);
}
