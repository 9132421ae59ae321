use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relalg::algebra::{
    difference, eliminate, join, product, project, select, union, AlgebraError, Condition,
};
use relalg::expression::{Expr, Node, UnaryOperator};
use relalg::relation::{Attribute, ConstantRelation, Element, Relation};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ints(arity: usize, rows: &[&[i64]]) -> Result<Relation> {
    Ok(Relation::new(
        vec![Attribute::single("int"); arity],
        rows.iter().map(|row| Element::new(row.iter().copied())).collect(),
    )?)
}

fn random_relation(rng: &mut StdRng, arity: usize) -> Result<Relation> {
    let len = rng.gen_range(0..12);
    let elements = (0..len)
        .map(|_| Element::new((0..arity).map(|_| rng.gen_range(0..4i64))))
        .collect();
    Ok(Relation::new(vec![Attribute::single("int"); arity], elements)?)
}

/// Root names in depth-first order, each with its rendered value
fn walk(node: &dyn Node, out: &mut Vec<(String, String)>) -> Result<()> {
    for child in node.children() {
        walk(child, out)?;
    }
    out.push((node.root_name().to_string(), node.evaluate_text()?));
    Ok(())
}

#[test]
fn test_join_then_project() -> Result<()> {
    init();
    let a = Expr::named(ints(2, &[&[1, 2], &[3, 4]])?, "A");
    let b = Expr::named(ints(2, &[&[2, 5]])?, "B");

    let joined = a | join([Condition::eq(-2, 1)]) | b;
    assert_eq!(joined.evaluate()?, ints(4, &[&[1, 2, 2, 5]])?);

    let swapped = project(&[2, 1])? | ints(2, &[&[1, 2], &[3, 4]])?;
    assert_eq!(swapped.evaluate()?, ints(2, &[&[2, 1], &[4, 3]])?);
    Ok(())
}

#[test]
fn test_selection_narrowing_converges() -> Result<()> {
    init();
    let mixed = Attribute::new(["int", "str"])?;
    let relation = Relation::new(
        vec![mixed.clone(), Attribute::single("int"), mixed],
        vec![
            Element::new([1, 1, 1]),
            Element::new([1, 2, 1]),
            Element::new([3, 3, 3]),
        ],
    )?;

    let expr = select([Condition::eq(1, 2), Condition::eq(2, 3)]) | relation;
    let output = expr.evaluate()?;
    assert_eq!(output.attributes(), vec![Attribute::single("int"); 3]);
    assert_eq!(output.len(), 2);
    Ok(())
}

#[test]
fn test_errors_name_the_failing_node() -> Result<()> {
    init();
    let left = Expr::named(
        Relation::new(vec![Attribute::single("str")], vec![Element::new(["x"])])?,
        "L",
    );
    let right = Expr::named(ints(1, &[&[1]])?, "R");

    // The failing difference sits below a union; its own name is reported
    let inner = left | difference() | right;
    let expr = union().apply(inner, ints(1, &[&[2]])?);
    let err = expr.evaluate().unwrap_err();

    assert_eq!(err.node(), "L − R");
    assert!(matches!(
        err.downcast_ref::<AlgebraError>(),
        Some(AlgebraError::TypeIncompatible { column: Some(1), .. })
    ));
    assert_eq!(err.to_string(), "L − R: incompatible types at index 1: str versus int");
    Ok(())
}

#[test]
fn test_selection_type_clash() -> Result<()> {
    init();
    let relation = Relation::new(
        vec![Attribute::single("str"), Attribute::single("int")],
        vec![],
    )?;
    let err = (select([Condition::eq(1, 2)]) | relation)
        .evaluate()
        .unwrap_err();

    let source = err
        .downcast_ref::<AlgebraError>()
        .map(AlgebraError::root_cause);
    assert!(matches!(source, Some(AlgebraError::TypeIncompatible { column: None, .. })));
    Ok(())
}

#[test]
fn test_union_widens_attributes() -> Result<()> {
    init();
    let strings = Relation::new(vec![Attribute::single("str")], vec![Element::new(["a"])])?;
    let output = (Expr::from(ints(1, &[&[1]])?) | union() | strings).evaluate()?;

    assert_eq!(output.attributes(), &[Attribute::new(["int", "str"])?]);
    assert_eq!(output.len(), 2);
    Ok(())
}

#[test]
fn test_select_with_literal_then_eliminate() -> Result<()> {
    init();
    let relation = ints(2, &[&[1, 7], &[1, 7], &[2, 7], &[1, 8]])?;
    let selected = select([Condition::eq(2, ConstantRelation::of(7))]) | relation;
    let output = (eliminate() | selected).evaluate()?;

    assert_eq!(output.elements(), &[Element::new([1, 7]), Element::new([2, 7])]);
    Ok(())
}

#[test]
fn test_algebraic_laws_on_random_relations() -> Result<()> {
    init();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let arity = rng.gen_range(1..4);
        let x = random_relation(&mut rng, arity)?;
        let y = random_relation(&mut rng, arity)?;

        assert_eq!(x.union(&y)?.len(), x.len() + y.len());
        let xy = x.product(&y);
        assert_eq!(xy.len(), x.len() * y.len());
        assert_eq!(xy.arity(), 2 * arity);
        for element in xy.elements() {
            let (prefix, suffix) = element.values().split_at(arity);
            assert!(x.elements().iter().any(|e| e.values() == prefix));
            assert!(y.elements().iter().any(|e| e.values() == suffix));
        }
        assert!(x.difference(&x)?.is_empty());

        let once = x.eliminate();
        assert_eq!(once.eliminate(), once);
        assert!(once.len() <= x.len());

        let all: Vec<usize> = (1..=arity).collect();
        assert_eq!(x.project(&all)?, x);

        let remaining = x.difference(&y)?;
        assert!(remaining
            .elements()
            .iter()
            .all(|e| !y.elements().contains(e)));

        assert_eq!(x.join(&y, &[])?, x.product(&y));
        assert_eq!(x.select(&[])?, x);
    }
    Ok(())
}

#[test]
fn test_repeated_evaluation_is_memoized() -> Result<()> {
    init();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counted = UnaryOperator::from_fn("count", move |relation: &Relation| {
        counter.fetch_add(1, Ordering::SeqCst);
        relation.clone()
    });

    let expr = counted | ints(1, &[&[1], &[2]])?;
    let first = expr.evaluate()?;
    let second = expr.evaluate()?;

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_walk_visits_children_first() -> Result<()> {
    init();
    let a = Expr::named(ints(1, &[&[1], &[2]])?, "A");
    let b = Expr::named(ints(1, &[&[2]])?, "B");
    let expr = eliminate() | (a | product() | b);

    let root = expr.as_node();
    assert!(!root.is_infix());
    assert!(root.left_children().is_empty());
    assert!(root.right_children()[0].is_infix());
    assert_eq!(expr.full_name(), "elim A × B");

    let mut visited = Vec::new();
    walk(root, &mut visited)?;
    let names: Vec<&str> = visited.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["A", "B", "×", "elim"]);

    let (_, rendered) = &visited[3];
    assert_eq!(rendered, "( int , int )\n  1   , 2  \n  2   , 2  ");
    Ok(())
}

#[test]
fn test_independent_trees_in_parallel() -> Result<()> {
    init();
    let trees: Vec<Expr<Relation>> = (1..=4)
        .map(|n| -> Result<Expr<Relation>> {
            let rows: Vec<Vec<i64>> = (0..n).map(|i| vec![i, i * 10]).collect();
            let rows: Vec<&[i64]> = rows.iter().map(Vec::as_slice).collect();
            Ok(project(&[2])? | ints(2, &rows)?)
        })
        .collect::<Result<_>>()?;

    let lengths: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = trees
            .iter()
            .map(|tree| scope.spawn(move || tree.evaluate().map(|r| r.len())))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("evaluation thread panicked"))
            .collect::<Result<_, _>>()
    })?;

    assert_eq!(lengths, vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_shared_tree_across_threads() -> Result<()> {
    init();
    // A raw relation on the left of an infix operator becomes a constant node
    let expr = Arc::new(ints(1, &[&[3], &[1], &[3]])? | union() | ints(1, &[&[1]])?);
    assert_eq!(expr.full_name(), "( int ) ∪ ( int )");

    let results: Vec<Relation> = (0..4)
        .map(|_| {
            let expr = Arc::clone(&expr);
            thread::spawn(move || expr.evaluate())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("evaluation thread panicked"))
        .collect::<Result<_, _>>()?;

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].len(), 4);
    Ok(())
}
