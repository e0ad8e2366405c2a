use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textfmt::{args, compile, format, Template};

fn benchmark_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    let templates = [
        ("literal_only", "a plain run of template text without fields"),
        ("simple_fields", "{} {} {}"),
        ("full_specs", "{0:_^+20,.3f} {name!r:>12} {1:#010x}"),
    ];

    for (label, template) in templates {
        group.bench_function(label, |b| b.iter(|| compile(black_box(template))));
    }
    group.finish();
}

fn benchmark_one_shot_format(c: &mut Criterion) {
    c.bench_function("one_shot_format", |b| {
        b.iter(|| format(black_box("{0:>8} = {1:#x}"), args![black_box(1234), 0xBEEFu32]))
    });
}

fn benchmark_precompiled_render(c: &mut Criterion) {
    let template = Template::compile("{0:>8} = {1:#x}").unwrap();

    c.bench_function("precompiled_render", |b| {
        b.iter(|| template.format(args![black_box(1234), 0xBEEFu32]))
    });
}

fn benchmark_value_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_value");

    let int_template = Template::compile("{:020,}").unwrap();
    group.bench_function("grouped_integer", |b| {
        b.iter(|| int_template.format(args![black_box(9_007_199_254_740_991i64)]))
    });

    let float_template = Template::compile("{:.6e}").unwrap();
    group.bench_function("scientific_float", |b| {
        b.iter(|| float_template.format(args![black_box(1234.56789f64)]))
    });

    let string_template = Template::compile("{:_^64}").unwrap();
    group.bench_function("centered_string", |b| {
        b.iter(|| string_template.format(args![black_box("a mid-size payload string")]))
    });

    group.finish();
}

fn benchmark_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sequence");
    let template = Template::compile("{}").unwrap();

    for size in [10, 100, 1000] {
        let numbers: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &numbers, |b, numbers| {
            b.iter(|| template.format(args![black_box(numbers)]))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_compile,
    benchmark_one_shot_format,
    benchmark_precompiled_render,
    benchmark_value_kinds,
    benchmark_sequences
);
criterion_main!(benches);
