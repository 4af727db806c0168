use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netweave_proto::{ParsedLine, Response};

fn bench_parse_privmsg(c: &mut Criterion) {
    let raw = ":longnick!ident@some.host.example.com PRIVMSG #channel :The quick brown fox jumps over the lazy dog";
    c.bench_function("parse_privmsg", |b| {
        b.iter(|| ParsedLine::parse(black_box(raw)).unwrap())
    });
}

fn bench_parse_numeric(c: &mut Criterion) {
    let raw = ":irc.example.com 353 mynick = #channel :@op +voice regular another more";
    c.bench_function("parse_numeric", |b| {
        b.iter(|| {
            let line = ParsedLine::parse(black_box(raw)).unwrap();
            Response::from_code(line.numeric().unwrap())
        })
    });
}

criterion_group!(benches, bench_parse_privmsg, bench_parse_numeric);
criterion_main!(benches);
