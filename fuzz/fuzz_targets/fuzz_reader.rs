#![no_main]
use arbitrary::Arbitrary;
use ion_tree::{
    Element, ElementCursor, ElementReader, IonType, ReaderError, ReaderOptions, Struct,
    SymbolToken, Value,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Node {
    Null(u8),
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Symbol(Option<String>, u8),
    Blob(Vec<u8>),
    List(Vec<Node>),
    SExp(Vec<Node>),
    Struct(Vec<(String, Node)>),
    Annotated(Vec<String>, Box<Node>),
}

#[derive(Arbitrary, Debug)]
enum Op {
    HasNext,
    Next,
    Peek,
}

#[derive(Arbitrary, Debug)]
struct Input {
    doc: Vec<Node>,
    ops: Vec<Op>,
    max_depth: Option<u8>,
}

fn to_element(node: Node, depth: usize) -> Element {
    // past this depth containers are cut off to keep the recursion bounded
    let flat = depth >= 32;
    let value = match node {
        Node::Null(kind) => Value::Null(IonType::ALL[usize::from(kind) % IonType::ALL.len()]),
        Node::Bool(b) => Value::Bool(b),
        Node::Int(i) => Value::Int(i.into()),
        Node::Float(f) => Value::Float(f),
        Node::String(s) => Value::String(s),
        Node::Symbol(text, sid) => Value::Symbol(SymbolToken::new(text, Some(usize::from(sid)))),
        Node::Blob(bytes) => Value::Blob(bytes.into()),
        Node::List(_) | Node::SExp(_) | Node::Struct(_) if flat => Value::Null(IonType::List),
        Node::List(children) => {
            Value::List(children.into_iter().map(|c| to_element(c, depth + 1)).collect())
        }
        Node::SExp(children) => {
            Value::SExp(children.into_iter().map(|c| to_element(c, depth + 1)).collect())
        }
        Node::Struct(fields) => Value::Struct(
            fields
                .into_iter()
                .map(|(name, c)| (name, to_element(c, depth + 1)))
                .collect::<Struct>(),
        ),
        Node::Annotated(annotations, inner) => {
            return to_element(*inner, depth).with_annotations(annotations);
        }
    };
    Element::from(value)
}

fn reader(input: Input) {
    let doc: Vec<Element> = input.doc.into_iter().map(|n| to_element(n, 0)).collect();
    let options = ReaderOptions {
        max_depth: input.max_depth.map(usize::from),
    };
    let mut reader = ElementReader::with_options(ElementCursor::new(&doc), options);
    let mut index = 0;

    for op in input.ops {
        match op {
            Op::HasNext => match reader.has_next() {
                Ok(more) => assert_eq!(more, index < doc.len()),
                Err(ReaderError::DepthLimitExceeded { .. }) => return,
                Err(err) => panic!("unexpected error: {err}"),
            },
            Op::Peek => match reader.peek() {
                Ok(peeked) => assert_eq!(peeked, doc.get(index)),
                Err(ReaderError::DepthLimitExceeded { .. }) => return,
                Err(err) => panic!("unexpected error: {err}"),
            },
            Op::Next => match reader.next_element() {
                Ok(element) => {
                    assert_eq!(Some(&element), doc.get(index));
                    index += 1;
                }
                Err(ReaderError::EndOfIteration) => assert_eq!(index, doc.len()),
                Err(ReaderError::DepthLimitExceeded { .. }) => return,
                Err(err) => panic!("unexpected error: {err}"),
            },
        }
    }
}

fuzz_target!(|input: Input| reader(input));
