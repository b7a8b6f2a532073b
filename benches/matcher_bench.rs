use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stencil::matcher::TemplateMatcher;

const TEST_SIZES: &[(usize, &str)] = &[(100, "small"), (1_000, "medium"), (10_000, "large")];

/// Build a candidate/template pair of roughly `char_count` characters where
/// every statement renames the variable but the template captures it
fn generate_pair(char_count: usize) -> (String, String) {
    let mut candidate = String::new();
    let mut template = String::new();
    let mut statement = 0;

    while candidate.len() < char_count {
        candidate.push_str(&format!("var renamed{statement} = renamed{statement} + {statement};\n"));
        template.push_str(&format!("var _v{statement}_ = _v{statement}_ + {statement};\n"));
        statement += 1;
    }

    (candidate, template)
}

fn bench_validate(c: &mut Criterion) {
    let matcher = TemplateMatcher::with_default_config();

    for &(size, size_name) in TEST_SIZES {
        let (candidate, template) = generate_pair(size);

        let mut group = c.benchmark_group(format!("validate_{size_name}"));
        group.throughput(Throughput::Bytes(candidate.len() as u64));

        group.bench_function("with_placeholders", |b| {
            b.iter(|| {
                matcher.validate(black_box(&candidate), black_box(&template));
            })
        });

        // Literal-only baseline: same text on both sides, no captures
        group.bench_function("literal_only", |b| {
            b.iter(|| {
                matcher.validate(black_box(&candidate), black_box(&candidate));
            })
        });

        group.finish();
    }
}

fn bench_early_mismatch(c: &mut Criterion) {
    // WHY: mismatch in the first characters should cost O(1), not O(n)
    let matcher = TemplateMatcher::with_default_config();
    let (candidate, _) = generate_pair(10_000);

    c.bench_function("early_mismatch", |b| {
        b.iter(|| {
            matcher.validate(black_box(&candidate), black_box("! nothing in common"));
        })
    });
}

criterion_group!(benches, bench_validate, bench_early_mismatch);
criterion_main!(benches);
