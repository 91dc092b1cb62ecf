use super::*;

/// Stand-in for a chain of structs each holding the previous one.
struct Nested(Option<Box<Nested>>);

fn depth(n: &Nested) -> usize {
    ensure_sufficient_stack(|| match &n.0 {
        Some(inner) => 1 + depth(inner),
        None => 1,
    })
}

fn chain(len: usize) -> Nested {
    let mut node = Nested(None);
    for _ in 1..len {
        node = Nested(Some(Box::new(node)));
    }
    node
}

#[test]
fn test_shallow_chain() {
    assert_eq!(depth(&chain(4)), 4);
}

#[test]
fn test_deep_chain() {
    let deep = chain(100_000);
    assert_eq!(depth(&deep), 100_000);
    // Drop iteratively; the derived drop glue would recurse.
    let mut cur = deep.0;
    while let Some(next) = cur {
        cur = next.0;
    }
}

#[test]
fn test_returns_closure_result() {
    let result: Result<u32, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
