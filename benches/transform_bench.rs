use criterion::{Criterion, criterion_group, criterion_main};
use jslt_lite::{Interpreter, Value};

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let input = Value::from(serde_json::json!({
        "user": {"name": "ada", "age": 36},
        "xs": [1, 2, 3, 4, 5, 6, 7, 8],
        "tags": ["a", "b", "c"]
    }));
    let cases = vec![
        ("identity", "."),
        ("deep_path", ".user.name"),
        (
            "object_with_let",
            r#"let who = .user.name in { "who": $who, "greeting": "hi, " + $who }"#,
        ),
        (
            "for_mapping",
            r#"{ "count": size(.xs), "doubled": for (.xs) . + . }"#,
        ),
        ("conditional", r#"if (.user.age >= 18) "adult" else "minor""#),
    ];
    let interp = Interpreter::new();
    for (name, program) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let outcome =
                    interp.transform(std::hint::black_box(&input), std::hint::black_box(program));
                assert!(outcome.success);
                std::hint::black_box(outcome)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
