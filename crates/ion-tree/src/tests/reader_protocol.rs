//! The lookahead state machine of `ElementReader`: values come out once, in
//! order, and the cursor is advanced once per top-level value.
use alloc::{vec, vec::Vec};

use super::utils::{Probe, ProbeError};
use crate::{
    Cursor, Element, ElementCursor, ElementReader, IonType, ReaderError, ReaderOptions, Value,
};

fn doc() -> Vec<Element> {
    vec![Element::from(1_i64), Element::from("a"), Element::from(false)]
}

#[test]
fn yields_top_level_values_in_order() {
    let doc = doc();
    let mut reader = ElementReader::new(ElementCursor::new(&doc));

    assert!(reader.has_next().unwrap());
    assert_eq!(reader.next_element().unwrap().as_i64(), Some(1));
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.next_element().unwrap().as_string(), Some("a"));
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.next_element().unwrap().as_bool(), Some(false));
    assert!(!reader.has_next().unwrap());
    assert_eq!(reader.next_element(), Err(ReaderError::EndOfIteration));
}

#[test]
fn repeated_has_next_advances_once() {
    let doc = doc();
    let mut reader = ElementReader::new(Probe::new(ElementCursor::new(&doc)));

    for _ in 0..5 {
        assert!(reader.has_next().unwrap());
    }
    assert_eq!(reader.cursor().top_level_advances, 1);
    assert_eq!(reader.next_element().unwrap().as_i64(), Some(1));
    assert_eq!(reader.cursor().top_level_advances, 1);

    assert!(reader.has_next().unwrap());
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.cursor().top_level_advances, 2);
}

#[test]
fn next_element_without_has_next_reads_directly() {
    let doc = doc();
    let mut reader = ElementReader::new(Probe::new(ElementCursor::new(&doc)));

    let values: Vec<_> = (0..3).map(|_| reader.next_element().unwrap()).collect();
    assert_eq!(values, doc);
    assert_eq!(reader.cursor().top_level_advances, 3);
    assert_eq!(reader.next_element(), Err(ReaderError::EndOfIteration));
    assert_eq!(reader.cursor().top_level_advances, 4);
}

#[test]
fn end_of_stream_is_sticky() {
    let doc = doc();
    let mut reader = ElementReader::new(Probe::new(ElementCursor::new(&doc)));
    while reader.has_next().unwrap() {
        reader.next_element().unwrap();
    }
    let advances = reader.cursor().top_level_advances;

    assert!(!reader.has_next().unwrap());
    assert_eq!(reader.next_element(), Err(ReaderError::EndOfIteration));
    assert!(!reader.has_next().unwrap());
    assert_eq!(reader.peek(), Ok(None));
    assert_eq!(reader.cursor().top_level_advances, advances);
}

#[test]
fn empty_document() {
    let mut reader = ElementReader::new(ElementCursor::new(&[]));
    assert!(!reader.has_next().unwrap());
    assert_eq!(reader.next_element(), Err(ReaderError::EndOfIteration));
    assert_eq!(reader.count(), 0);
}

#[test]
fn peek_does_not_consume() {
    let doc = doc();
    let mut reader = ElementReader::new(ElementCursor::new(&doc));

    assert_eq!(reader.peek().unwrap(), Some(&doc[0]));
    assert_eq!(reader.peek().unwrap(), Some(&doc[0]));
    assert_eq!(reader.next_element().unwrap(), doc[0]);
    assert_eq!(reader.peek().unwrap(), Some(&doc[1]));
}

#[test]
fn remove_is_unsupported() {
    let doc = doc();
    let mut reader = ElementReader::new(Probe::new(ElementCursor::new(&doc)));

    assert_eq!(reader.remove(), Err(ReaderError::Unsupported("remove")));
    assert_eq!(reader.cursor().top_level_advances, 0);
    reader.next_element().unwrap();
    assert_eq!(reader.remove(), Err(ReaderError::Unsupported("remove")));
    assert_eq!(reader.next_element().unwrap(), doc[1]);
}

#[test]
fn iterator_collects_every_value() {
    let doc = doc();
    let values: Result<Vec<_>, _> = ElementReader::new(ElementCursor::new(&doc)).collect();
    assert_eq!(values.unwrap(), doc);
}

#[test]
fn iterator_after_has_next_yields_buffered_value() {
    let doc = doc();
    let mut reader = ElementReader::new(ElementCursor::new(&doc));
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.next(), Some(Ok(doc[0].clone())));
    assert_eq!(reader.by_ref().count(), 2);
    assert_eq!(reader.next(), None);
}

#[test]
fn advance_failure_surfaces_and_reader_stays_usable() {
    let doc = doc();
    let mut probe = Probe::new(ElementCursor::new(&doc));
    probe.fail_on_advance = Some(1);
    let mut reader = ElementReader::new(probe);

    assert_eq!(reader.next_element().unwrap(), doc[0]);
    assert_eq!(
        reader.has_next(),
        Err(ReaderError::Cursor(ProbeError::Injected))
    );
    // the injected failure did not move the cursor, so nothing is lost
    assert_eq!(reader.next_element().unwrap(), doc[1]);
    assert_eq!(reader.next_element().unwrap(), doc[2]);
    assert!(!reader.has_next().unwrap());
}

#[test]
fn malformed_child_surfaces_from_has_next() {
    let doc = vec![
        Element::from(Value::List(vec![1_i64.into(), "bad".into()])),
        Element::from(true),
    ];
    let mut probe = Probe::new(ElementCursor::new(&doc));
    probe.fail_on_read = Some(IonType::String);
    let mut reader = ElementReader::new(probe);

    assert_eq!(
        reader.has_next(),
        Err(ReaderError::Cursor(ProbeError::Injected))
    );
}

#[test]
fn failure_inside_a_container_does_not_lose_later_values() {
    let doc = vec![
        Element::from(Value::List(vec![1_i64.into(), "bad".into()])),
        Element::from(true),
    ];
    let mut probe = Probe::new(ElementCursor::new(&doc));
    probe.fail_on_read = Some(IonType::String);
    let mut reader = ElementReader::new(probe);

    assert_eq!(
        reader.has_next(),
        Err(ReaderError::Cursor(ProbeError::Injected))
    );
    let stranded = Err(ReaderError::Stranded {
        depth: 1,
        expected: 0,
    });
    // not a false end of stream
    assert_eq!(reader.has_next(), stranded);
    assert!(matches!(
        reader.peek(),
        Err(ReaderError::Stranded {
            depth: 1,
            expected: 0
        })
    ));
    assert_eq!(reader.cursor().depth(), 1);
    assert_eq!(reader.cursor().top_level_advances, 1);
}

#[test]
fn failure_inside_a_container_does_not_surface_a_nested_child() {
    let doc = vec![
        Element::from(Value::List(vec!["bad".into(), 2_i64.into()])),
        Element::from(true),
    ];
    let mut probe = Probe::new(ElementCursor::new(&doc));
    probe.fail_on_read = Some(IonType::String);
    let mut reader = ElementReader::new(probe);

    assert_eq!(
        reader.next_element(),
        Err(ReaderError::Cursor(ProbeError::Injected))
    );
    assert_eq!(
        reader.next_element(),
        Err(ReaderError::Stranded {
            depth: 1,
            expected: 0
        })
    );
    assert!(matches!(reader.next(), Some(Err(ReaderError::Stranded { .. }))));
}

#[test]
fn reader_inside_a_container_yields_its_children() {
    let doc = vec![
        Element::from(Value::List(vec![1_i64.into(), 2_i64.into()])),
        Element::from(true),
    ];
    let mut cursor = ElementCursor::new(&doc);
    cursor.advance().unwrap();
    cursor.step_in().unwrap();

    let children: Result<Vec<_>, _> = ElementReader::new(&mut cursor).collect();
    assert_eq!(children.unwrap(), vec![Element::from(1_i64), Element::from(2_i64)]);
    cursor.step_out().unwrap();
    assert_eq!(cursor.advance(), Ok(Some(IonType::Bool)));
}

#[test]
fn reader_can_borrow_the_cursor() {
    let doc = doc();
    let mut cursor = ElementCursor::new(&doc);
    {
        let mut reader = ElementReader::new(&mut cursor);
        assert_eq!(reader.next_element().unwrap(), doc[0]);
    }
    assert_eq!(cursor.advance(), Ok(Some(IonType::String)));
}

#[test]
fn depth_limit_applies_to_every_value() {
    let doc = vec![
        Element::from(Value::List(vec![])),
        Element::from(Value::List(vec![Element::from(Value::List(vec![]))])),
    ];
    let mut reader =
        ElementReader::with_options(ElementCursor::new(&doc), ReaderOptions { max_depth: Some(1) });
    assert_eq!(reader.next_element().unwrap(), doc[0]);
    assert_eq!(
        reader.next_element(),
        Err(ReaderError::DepthLimitExceeded { limit: 1 })
    );
    // the limit tripped one level down
    assert_eq!(
        reader.next_element(),
        Err(ReaderError::Stranded {
            depth: 1,
            expected: 0
        })
    );
}

#[test]
fn into_inner_returns_the_cursor() {
    let doc = doc();
    let mut reader = ElementReader::new(Probe::new(ElementCursor::new(&doc)));
    reader.next_element().unwrap();
    let probe = reader.into_inner();
    assert_eq!(probe.top_level_advances, 1);
}
