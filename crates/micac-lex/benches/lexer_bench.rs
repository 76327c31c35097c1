//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package micac-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use micac_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).filter(|t| t.is_ok()).count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "x := 42; fn main() { y := x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| lexer_token_count(black_box("x := 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    // Source code exercising every token family
    let source = r#"
        // iterative fibonacci
        fn fib(n) {
            if n <= 1 {
                return n;
            }
            a := 0;
            b := 1;
            i := 2;
            while i <= n {
                t := a + b;
                a = b;
                b = t;
                i += 1;
            }
            return b;
        }

        /* bit fiddling */
        fn mix(x, y) {
            x <<= 2;
            x ^= y & 255;
            x |= y >> 3;
            return x % 1000;
        }

        greeting := "hello\n";
        ratio := 3.14;
        flag := true && !false;
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    // Escape-free strings borrow from the source; escaped strings allocate
    let borrowed = r#"a := "plain text without any escapes at all";"#;
    let escaped = r#"a := "line\none\ttab\x41 and \"quotes\"";"#;

    group.bench_function("borrowed_string", |b| {
        b.iter(|| lexer_token_count(black_box(borrowed)))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box(escaped)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_complex,
    bench_lexer_strings
);
criterion_main!(benches);
