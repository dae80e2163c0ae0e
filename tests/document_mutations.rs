use eframe_text_overlay::{
    Document, ElementId, FontFamily, FontSize, Position, StyleProperty, TextStyle,
};
use egui::Color32;
use std::sync::Arc;

fn create_test_document() -> Document {
    let style = TextStyle::default();
    Document::new()
        .add_text("first", style)
        .and_then(|doc| doc.add_text("second", style))
        .and_then(|doc| doc.add_text("third", style))
        .unwrap()
}

// An id that was never placed in any test document
fn unknown_id() -> ElementId {
    ElementId::next()
}

#[test]
fn test_add_rejects_blank_text() {
    let doc = create_test_document();
    let style = TextStyle::default();

    assert!(doc.add_text("", style).is_none());
    assert!(doc.add_text("   ", style).is_none());
    assert!(doc.add_text("\t\n", style).is_none());
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_add_appends_at_origin_with_given_style() {
    let style = TextStyle {
        font_size: FontSize::px(100.0),
        color: Color32::from_rgb(0, 128, 255),
        font_family: FontFamily::Impact,
    };
    let doc = create_test_document().add_text("  padded  ", style).unwrap();

    let added = doc.elements().last().unwrap();
    assert_eq!(added.text(), "  padded  ");
    assert_eq!(added.position(), Position::ORIGIN);
    assert_eq!(added.style(), &style);
}

#[test]
fn test_ids_are_unique_and_follow_insertion_order() {
    let doc = create_test_document();
    let ids: Vec<ElementId> = doc.elements().iter().map(|element| element.id()).collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_unknown_id_is_inert() {
    let doc = create_test_document();
    let id = unknown_id();

    assert!(doc.modify_text(id, "changed").is_none());
    assert!(doc.move_text(id, Position::new(5.0, 5.0)).is_none());
    assert!(doc.restyle_text(id, StyleProperty::FontSize(FontSize::px(50.0))).is_none());
}

#[test]
fn test_modify_replaces_only_text() {
    let doc = create_test_document();
    let target = doc.elements()[1].clone();

    let modified = doc.modify_text(target.id(), "changed").unwrap();
    let element = modified.get(target.id()).unwrap();

    assert_eq!(element.text(), "changed");
    assert_eq!(element.position(), target.position());
    assert_eq!(element.style(), target.style());
    // The source snapshot is untouched
    assert_eq!(doc.get(target.id()).unwrap().text(), "second");
}

#[test]
fn test_modify_to_empty_text_is_allowed() {
    let doc = create_test_document();
    let id = doc.elements()[0].id();

    let modified = doc.modify_text(id, "").unwrap();
    assert_eq!(modified.get(id).unwrap().text(), "");
}

#[test]
fn test_unchanged_values_do_not_produce_a_snapshot() {
    let doc = create_test_document();
    let element = doc.elements()[0].clone();

    assert!(doc.modify_text(element.id(), element.text()).is_none());
    assert!(doc.move_text(element.id(), element.position()).is_none());
    assert!(
        doc.restyle_text(element.id(), StyleProperty::FontSize(element.style().font_size))
            .is_none()
    );
}

#[test]
fn test_move_keeps_order() {
    let doc = create_test_document();
    let id = doc.elements()[0].id();

    let moved = doc.move_text(id, Position::new(10.0, 20.0)).unwrap();
    let texts: Vec<&str> = moved.elements().iter().map(|element| element.text()).collect();

    assert_eq!(texts, ["first", "second", "third"]);
    assert_eq!(moved.get(id).unwrap().position(), Position::new(10.0, 20.0));
}

#[test]
fn test_restyle_replaces_single_key() {
    let doc = create_test_document();
    let id = doc.elements()[2].id();

    let restyled = doc
        .restyle_text(id, StyleProperty::FontFamily(FontFamily::Garamond))
        .unwrap();
    let style = restyled.get(id).unwrap().style();

    assert_eq!(style.font_family, FontFamily::Garamond);
    assert_eq!(style.font_size, TextStyle::default().font_size);
    assert_eq!(style.color, TextStyle::default().color);
}

#[test]
fn test_untouched_elements_are_shared_between_snapshots() {
    let doc = create_test_document();
    let id = doc.elements()[1].id();

    let moved = doc.move_text(id, Position::new(1.0, 2.0)).unwrap();

    assert!(Arc::ptr_eq(&doc.elements()[0], &moved.elements()[0]));
    assert!(!Arc::ptr_eq(&doc.elements()[1], &moved.elements()[1]));
    assert!(Arc::ptr_eq(&doc.elements()[2], &moved.elements()[2]));
}
