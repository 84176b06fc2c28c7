use bank_sim::run::run;
use criterion::{criterion_group, criterion_main, Criterion};

fn script(sessions: usize) -> String {
    let mut data = "op,account,counterparty,holder,type,amount,overdraft\n".to_string();
    for i in 0..sessions {
        data.push_str(&format!(
            r#"open,    {i}00, , John Doe,   savings,  1000.0,
        open,    {i}01, , Jane Smith, checking, 0,       500
        deposit, {i}00, , ,           ,         500.5,
        withdraw,{i}01, , ,           ,         300.25,
        badly formatted record
        transfer,{i}00, {i}01, ,      ,         200,
        withdraw,{i}00, , ,           ,         9000,
        balance, {i}00, , ,           ,         ,
        history, {i}01, , ,           ,         ,
        close,   {i}01, , ,           ,         ,
"#,
            i = i
        ));
    }

    data
}

pub fn bench_replay_1000_sessions(c: &mut Criterion) {
    c.bench_function("replay_1_000_sessions", |b| {
        let cursor = std::io::Cursor::new(script(1_000));

        b.iter(move || run(cursor.clone(), std::io::sink()))
    });
}

pub fn bench_replay_20000_sessions(c: &mut Criterion) {
    c.bench_function("replay_20_000_sessions", |b| {
        let cursor = std::io::Cursor::new(script(20_000));

        b.iter(move || run(cursor.clone(), std::io::sink()))
    });
}

criterion_group!(
    benches,
    bench_replay_1000_sessions,
    bench_replay_20000_sessions,
);
criterion_main!(benches);
