//! Reads the top-level values of a small document one at a time and walks
//! each materialized tree with the safe accessors.
//!
//! The document lives in memory here; a decoding cursor over binary or text
//! Ion plugs into [`ElementReader`] the same way.
//!
//! Run with
//!
//! ```bash
//! cargo run -p ion-tree --example walk_document
//! ```
#![allow(missing_docs)]

use std::sync::Arc;

use ion_tree::{
    Element, ElementCursor, ElementReader, IonType, ReaderError, Struct, SymbolTable,
    SymbolToken, Value,
};

fn document() -> Vec<Element> {
    // `$10` is `status` in the local table the values were written with
    let table = Arc::new(SymbolTable::with_local_symbols([Some("status")]));

    let mut order = Struct::new();
    order.push("id", 1042_i64);
    order.push("item", "widget");
    order.push("item", "gizmo");
    order.push(
        SymbolToken::sid(10),
        Element::new(vec![], Value::Symbol(SymbolToken::text("shipped")), Arc::clone(&table)),
    );
    order.push("note", Element::from(Value::Null(IonType::String)));

    vec![
        Element::new(vec!["order".into()], Value::Struct(order), table),
        Element::from(Value::List(vec![1_i64.into(), 2_i64.into(), 3_i64.into()])),
        Element::from("trailer"),
    ]
}

fn describe(element: &Element, indent: usize) {
    let pad = " ".repeat(indent);
    match element.ion_type() {
        _ if element.is_null() => println!("{pad}{element}"),
        IonType::Struct => {
            let fields = element.as_struct().into_iter().flatten();
            for (name, value) in fields {
                let name = element.field_text(name).unwrap_or("<unknown>");
                println!("{pad}{name}:");
                describe(value, indent + 2);
            }
        }
        IonType::List | IonType::SExp => {
            for child in element.as_iter() {
                describe(child, indent + 2);
            }
        }
        _ => match element.as_text() {
            Some(text) => println!("{pad}{text}"),
            None => println!("{pad}{element}"),
        },
    }
}

fn main() -> Result<(), ReaderError<ion_tree::CursorError>> {
    let doc = document();
    let mut reader = ElementReader::new(ElementCursor::new(&doc));

    while reader.has_next()? {
        let element = reader.next_element()?;
        println!("{} {}", element.ion_type(), element.without_annotations());
        if element.has_annotation("order") {
            let items: Vec<_> = element
                .as_struct()
                .map(|fields| fields.get_all("item").filter_map(Element::as_string).collect())
                .unwrap_or_default();
            println!("  items: {}", items.join(", "));
        }
        describe(&element, 2);
    }
    Ok(())
}
