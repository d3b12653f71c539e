use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rgit::git::{ActionKind, is_safe_to_run_unattended, parse_status_porcelain};

const SMALL_STATUS: &str = "## main...origin/main [ahead 1]
 M src/main.rs
?? notes.txt";

const MIXED_STATUS: &str = "## master...origin/master [ahead 1, behind 2]
D  COPYING.llvm
 D COPYING.unrar
R  COPYING.unrar -> COPYING.unra
?? COPYING.unra
A  blabla.file
AM blabla1.file
M  COPYING
 M COPYING.lzma
UU src/conflict.rs
AA src/both_added.rs";

fn generate_large_status(num_files: usize) -> String {
    let codes = ["M ", " M", "MM", "A ", "AM", "D ", " D", "??", "UU"];
    let mut output = String::from("## main...origin/main [behind 3]\n");
    for i in 0..num_files {
        output.push_str(&format!("{} src/module_{}/file_{}.rs\n", codes[i % codes.len()], i / 10, i));
    }
    output
}

fn bench_parse_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_status_porcelain");

    group.bench_with_input(BenchmarkId::new("small", "2 files"), &SMALL_STATUS, |b, input| {
        b.iter(|| parse_status_porcelain(black_box(input)))
    });

    group.bench_with_input(BenchmarkId::new("mixed", "10 files"), &MIXED_STATUS, |b, input| {
        b.iter(|| parse_status_porcelain(black_box(input)))
    });

    for size in [100, 1000, 10000] {
        let status = generate_large_status(size);
        group.bench_with_input(BenchmarkId::new("large", size), &status, |b, input| {
            b.iter(|| parse_status_porcelain(black_box(input)))
        });
    }

    group.finish();
}

fn bench_policy(c: &mut Criterion) {
    let status = parse_status_porcelain(&generate_large_status(1000));
    c.bench_function("policy_pull_on_dirty_tree", |b| {
        b.iter(|| is_safe_to_run_unattended(black_box(ActionKind::Pull), black_box(&status)))
    });
}

criterion_group!(benches, bench_parse_status, bench_policy);
criterion_main!(benches);
